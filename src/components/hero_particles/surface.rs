//! Canvas surface sizing for high-density displays.
//!
//! The canvas draws in logical (CSS pixel) coordinates; the backing store is
//! scaled by the device pixel ratio, capped so 3x+ displays do not triple
//! the fill cost. A single global transform maps logical coordinates onto
//! the scaled backing store, so the renderer never deals with the ratio.

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Backing-store scale cap. Anything above 2x costs memory and fill rate
/// without a visible payoff for a background effect.
pub const MAX_BACKING_SCALE: f64 = 2.0;

/// Effective backing-store scale for a reported device pixel ratio.
pub fn clamp_scale(device_pixel_ratio: f64) -> f64 {
	device_pixel_ratio.clamp(1.0, MAX_BACKING_SCALE)
}

/// Backing-store pixel dimensions for a logical size at a given scale.
pub fn backing_dimensions(logical_width: f64, logical_height: f64, scale: f64) -> (u32, u32) {
	(
		(logical_width * scale).ceil() as u32,
		(logical_height * scale).ceil() as u32,
	)
}

/// Size the canvas backing store to its current on-screen dimensions and
/// install the logical-to-physical transform.
///
/// Returns the logical size so the caller can resample particles against
/// it. Idempotent for an unchanged layout; call again on every window
/// resize. When no window is available this is a no-op that reports the
/// canvas's logical size unchanged.
pub fn configure(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) -> (f64, f64) {
	let (width, height) = (
		f64::from(canvas.client_width()),
		f64::from(canvas.client_height()),
	);

	let Some(window) = web_sys::window() else {
		return (width, height);
	};
	let scale = clamp_scale(window.device_pixel_ratio());

	let (bw, bh) = backing_dimensions(width, height, scale);
	canvas.set_width(bw);
	canvas.set_height(bh);
	let _ = ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);

	(width, height)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scale_clamps_high_density_ratios() {
		assert_eq!(clamp_scale(3.0), 2.0);
		assert_eq!(clamp_scale(1.5), 1.5);
		// Hosts without a ratio hint fall back to 1x.
		assert_eq!(clamp_scale(0.0), 1.0);
	}

	#[test]
	fn backing_store_scales_and_rounds_up() {
		assert_eq!(backing_dimensions(800.0, 600.0, 2.0), (1600, 1200));
		assert_eq!(backing_dimensions(799.5, 599.5, 1.0), (800, 600));
	}

	#[test]
	fn backing_store_is_idempotent_for_unchanged_size() {
		let first = backing_dimensions(1024.0, 768.0, 1.5);
		let second = backing_dimensions(1024.0, 768.0, 1.5);
		assert_eq!(first, second);
	}
}
