//! Scroll-triggered reveal wrapper.
//!
//! Wrapped content starts in its pre-reveal style and gains the `visible`
//! class the first time it enters the viewport. Observation is one-shot:
//! once visible, the element is unobserved and stays revealed. Browsers
//! without `IntersectionObserver` reveal everything immediately.

use leptos::__reexports::send_wrapper::SendWrapper;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Bottom inset so elements reveal slightly before fully entering view.
const ROOT_MARGIN: &str = "0px 0px -10% 0px";
const THRESHOLD: f64 = 0.1;

fn observer_supported() -> bool {
	web_sys::window()
		.map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
		.unwrap_or(false)
}

/// Wraps children in a section that fades in when scrolled into view.
#[component]
pub fn Reveal(children: Children) -> impl IntoView {
	let node_ref = NodeRef::<leptos::html::Div>::new();
	let (visible, set_visible) = signal(false);

	Effect::new(move |_| {
		let Some(element) = node_ref.get() else {
			return;
		};

		if !observer_supported() {
			set_visible.set(true);
			return;
		}

		let callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)> =
			Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
				for entry in entries.iter() {
					let entry: IntersectionObserverEntry = entry.unchecked_into();
					if entry.is_intersecting() {
						set_visible.set(true);
						observer.unobserve(&entry.target());
					}
				}
			});

		let options = IntersectionObserverInit::new();
		options.set_root_margin(ROOT_MARGIN);
		options.set_threshold(&JsValue::from_f64(THRESHOLD));

		let Ok(observer) = IntersectionObserver::new_with_options(
			callback.as_ref().unchecked_ref(),
			&options,
		) else {
			set_visible.set(true);
			return;
		};
		observer.observe(&element);

		let cleanup = SendWrapper::new((observer, callback));
		on_cleanup(move || {
			let (observer, callback) = cleanup.take();
			observer.disconnect();
			drop(callback);
		});
	});

	view! {
		<div node_ref=node_ref class="reveal" class:visible=move || visible.get()>
			{children()}
		</div>
	}
}
