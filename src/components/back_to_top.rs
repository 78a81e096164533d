//! "Back to top" button that appears after scrolling down.

use leptos::__reexports::send_wrapper::SendWrapper;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};

/// Scroll offset (CSS pixels) past which the button becomes visible.
const SHOW_THRESHOLD_PX: f64 = 480.0;

/// Floating button that smooth-scrolls back to the top of the page.
#[component]
pub fn BackToTop() -> impl IntoView {
	let (visible, set_visible) = signal(false);

	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};

		let scroll_window = window.clone();
		let on_scroll: Closure<dyn FnMut()> = Closure::new(move || {
			let y = scroll_window.scroll_y().unwrap_or(0.0);
			set_visible.set(y > SHOW_THRESHOLD_PX);
		});
		let _ =
			window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());

		let on_scroll = SendWrapper::new(on_scroll);
		on_cleanup(move || {
			let on_scroll = on_scroll.take();
			if let Some(win) = web_sys::window() {
				let _ = win.remove_event_listener_with_callback(
					"scroll",
					on_scroll.as_ref().unchecked_ref(),
				);
			}
		});
	});

	let on_click = move |_: MouseEvent| {
		if let Some(window) = web_sys::window() {
			let options = ScrollToOptions::new();
			options.set_top(0.0);
			options.set_behavior(ScrollBehavior::Smooth);
			window.scroll_to_with_scroll_to_options(&options);
		}
	};

	view! {
		<button
			id="backToTop"
			class="back-to-top"
			class:show=move || visible.get()
			aria-label="Voltar ao topo"
			on:click=on_click
		>
			"\u{2191}"
		</button>
	}
}
