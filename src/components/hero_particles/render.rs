//! Canvas drawing for the particle backdrop.
//!
//! Each frame clears the surface, strokes a link line for every pair of
//! particles closer than [`LINK_RADIUS`], then fills each particle as a
//! small disc. The all-pairs scan is quadratic but the pool is a fixed 80
//! particles, so the per-frame cost stays flat. A spatial grid bucketed at
//! the link radius would bring it near linear if the count ever grew.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::ParticlePool;

/// Pairs closer than this (logical units) get a link line.
pub const LINK_RADIUS: f64 = 120.0;

/// Link opacity at distance zero; fades linearly to nothing at
/// [`LINK_RADIUS`].
pub const LINK_BASE_ALPHA: f64 = 0.5;

const LINK_WIDTH: f64 = 1.0;
const LINK_COLOR: Rgb = Rgb::new(91, 140, 255);
const PARTICLE_COLOR: Rgb = Rgb::new(0, 230, 255);

/// Opaque color paired with a per-draw alpha when stroked or filled.
#[derive(Clone, Copy, Debug)]
struct Rgb {
	r: u8,
	g: u8,
	b: u8,
}

impl Rgb {
	const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	fn css(self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
	}
}

/// Link opacity for a pair at Euclidean distance `dist`.
///
/// Monotonically decreasing on `[0, LINK_RADIUS)`, zero at and beyond the
/// radius.
pub fn link_alpha(dist: f64) -> f64 {
	if dist >= LINK_RADIUS {
		0.0
	} else {
		(1.0 - dist / LINK_RADIUS) * LINK_BASE_ALPHA
	}
}

/// Draw one frame of the backdrop at the pool's current positions.
///
/// A zero-sized layout draws nothing; the caller keeps ticking so the
/// backdrop recovers once the layout settles.
pub fn render(ctx: &CanvasRenderingContext2d, pool: &ParticlePool) {
	let (width, height) = pool.bounds();
	if width <= 0.0 || height <= 0.0 {
		return;
	}

	ctx.clear_rect(0.0, 0.0, width, height);

	draw_links(ctx, pool);
	draw_particles(ctx, pool);
}

fn draw_links(ctx: &CanvasRenderingContext2d, pool: &ParticlePool) {
	ctx.set_line_width(LINK_WIDTH);

	let particles = &pool.particles;
	for i in 0..particles.len() {
		let p = &particles[i];
		for q in &particles[i + 1..] {
			let (dx, dy) = (p.x - q.x, p.y - q.y);
			let alpha = link_alpha(dx.hypot(dy));
			if alpha <= 0.0 {
				continue;
			}

			ctx.set_stroke_style_str(&LINK_COLOR.css(alpha));
			ctx.begin_path();
			ctx.move_to(p.x, p.y);
			ctx.line_to(q.x, q.y);
			ctx.stroke();
		}
	}
}

fn draw_particles(ctx: &CanvasRenderingContext2d, pool: &ParticlePool) {
	for p in &pool.particles {
		ctx.set_fill_style_str(&PARTICLE_COLOR.css(p.alpha));
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.fill();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn link_alpha_endpoints() {
		assert_eq!(link_alpha(0.0), LINK_BASE_ALPHA);
		assert_eq!(link_alpha(LINK_RADIUS), 0.0);
		assert_eq!(link_alpha(LINK_RADIUS + 50.0), 0.0);
	}

	#[test]
	fn link_alpha_at_hundred_units() {
		// (1 - 100/120) * 0.5
		let alpha = link_alpha(100.0);
		assert!((alpha - 1.0 / 12.0).abs() < 1e-12);
	}

	#[test]
	fn link_alpha_decreases_with_distance() {
		let mut last = link_alpha(0.0);
		for step in 1..=120 {
			let alpha = link_alpha(f64::from(step));
			assert!(alpha < last);
			last = alpha;
		}
	}

	#[test]
	fn rgba_formatting() {
		assert_eq!(Rgb::new(91, 140, 255).css(0.25), "rgba(91, 140, 255, 0.25)");
	}
}
