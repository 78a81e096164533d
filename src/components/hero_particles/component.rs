//! Leptos component hosting the particle backdrop canvas.
//!
//! The component mounts a canvas, sizes its backing store for the device
//! pixel ratio, seeds the particle pool, and drives an animation loop via
//! `requestAnimationFrame`. A window resize re-runs surface configuration
//! and rebuilds the pool before the next frame reads the bounds, so no
//! frame ever sees old positions against new bounds.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::particles::{PARTICLE_COUNT, ParticlePool};
use super::{render, surface};

/// Everything the animation loop touches, owned by one `RefCell` so the
/// resize handler swaps surface and pool in a single borrow.
struct Engine {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	pool: ParticlePool,
}

impl Engine {
	/// Re-read the layout, resize the backing store and rebuild the pool
	/// against the new bounds. Old particles are dropped wholesale; the
	/// visible jump on resize matches the pool's sampled-at-creation
	/// positions.
	fn reset(&mut self) {
		let (width, height) = surface::configure(&self.canvas, &self.ctx);
		let mut rng = js_sys::Math::random;
		self.pool.populate(PARTICLE_COUNT, width, height, &mut rng);
	}

	/// One tick: draw the current state, then advance and wrap.
	fn frame(&mut self) {
		render::render(&self.ctx, &self.pool);
		self.pool.advance();
	}
}

/// Animated particle-network backdrop for the hero section.
///
/// Renders a fixed-count particle field with distance-faded link lines.
/// The loop runs for the page's lifetime; if the canvas leaves the
/// document or the 2d context is unavailable the component goes inert
/// instead of erroring into the page.
#[component]
pub fn HeroParticles() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let engine: Rc<RefCell<Option<Engine>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let ctx: Option<CanvasRenderingContext2d> = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|obj| obj.dyn_into().ok());
		let Some(ctx) = ctx else {
			log::warn!("hero-particles: 2d context unavailable, backdrop disabled");
			return;
		};

		let mut initial = Engine {
			canvas: canvas.clone(),
			ctx,
			pool: ParticlePool::new(),
		};
		initial.reset();
		*engine.borrow_mut() = Some(initial);

		let engine_resize = engine.clone();
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut e) = *engine_resize.borrow_mut() {
				e.reset();
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (engine_anim, animate_inner) = (engine.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			let mut keep_running = false;
			if let Some(ref mut e) = *engine_anim.borrow_mut() {
				if e.canvas.is_connected() {
					e.frame();
					keep_running = true;
				} else {
					log::info!("hero-particles: canvas detached, stopping loop");
				}
			}
			if !keep_running {
				return;
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! { <canvas node_ref=canvas_ref class="hero-canvas" aria-hidden="true" /> }
}
