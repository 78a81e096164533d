//! Page-load overlay, dismissed shortly after the app mounts.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// Delay before the overlay fades, matching the CSS transition.
const HIDE_DELAY_MS: i32 = 350;

/// Full-screen loading overlay that hides itself once the page is up.
#[component]
pub fn Preloader() -> impl IntoView {
	let (hidden, set_hidden) = signal(false);

	Effect::new(move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		// One-shot; the returned JsValue keeps the closure alive until it fires.
		let cb = Closure::once_into_js(move || set_hidden.set(true));
		let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
			cb.as_ref().unchecked_ref(),
			HIDE_DELAY_MS,
		);
	});

	view! {
		<div id="preloader" class:hidden=move || hidden.get() aria-hidden="true">
			<div class="spinner"></div>
		</div>
	}
}
