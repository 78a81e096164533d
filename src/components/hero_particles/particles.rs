//! Particle bodies and the pool that owns them.
//!
//! The pool is a fixed-size, insertion-order collection that is rebuilt from
//! scratch whenever the surface is resized; initial positions are sampled
//! against the bounds that were current at populate time. Per-frame motion
//! is a plain Euler step with an edge wrap, no acceleration and no collision
//! response.

/// Number of particles in the backdrop.
pub const PARTICLE_COUNT: usize = 80;

/// Velocity components are sampled from `[-VELOCITY_RANGE, VELOCITY_RANGE)`
/// logical units per frame.
pub const VELOCITY_RANGE: f64 = 0.35;

/// Particle radius sampling interval, logical units.
pub const RADIUS_MIN: f64 = 1.0;
/// Upper bound of the radius interval.
pub const RADIUS_MAX: f64 = 2.2;

/// Particle opacity sampling interval.
pub const ALPHA_MIN: f64 = 0.3;
/// Upper bound of the opacity interval.
pub const ALPHA_MAX: f64 = 0.9;

/// Particles wrap to the opposite edge once they drift this far outside the
/// visible bounds, so they leave and re-enter off screen instead of snapping
/// at the border.
pub const WRAP_MARGIN: f64 = 10.0;

/// A single drifting particle. Velocity, radius and opacity are fixed at
/// creation; only the position changes afterwards.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub alpha: f64,
}

/// Owns the particle set and the bounds it was sampled against.
pub struct ParticlePool {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
}

/// Map a `[0, 1)` sample onto `[min, max)`.
fn sample(unit: f64, min: f64, max: f64) -> f64 {
	min + unit * (max - min)
}

impl ParticlePool {
	/// An empty pool with zero bounds; call [`ParticlePool::populate`]
	/// before the first frame.
	pub fn new() -> Self {
		Self {
			particles: Vec::new(),
			width: 0.0,
			height: 0.0,
		}
	}

	/// Replace the entire pool with `count` freshly sampled particles.
	///
	/// `rng` must yield uniform values in `[0, 1)`; the component passes
	/// `js_sys::Math::random`, tests pass a native source. The old
	/// particles are discarded wholesale, never migrated.
	pub fn populate(
		&mut self,
		count: usize,
		width: f64,
		height: f64,
		rng: &mut impl FnMut() -> f64,
	) {
		self.width = width;
		self.height = height;
		self.particles = (0..count)
			.map(|_| Particle {
				x: sample(rng(), 0.0, width),
				y: sample(rng(), 0.0, height),
				vx: sample(rng(), -VELOCITY_RANGE, VELOCITY_RANGE),
				vy: sample(rng(), -VELOCITY_RANGE, VELOCITY_RANGE),
				radius: sample(rng(), RADIUS_MIN, RADIUS_MAX),
				alpha: sample(rng(), ALPHA_MIN, ALPHA_MAX),
			})
			.collect();
	}

	/// Advance every particle by one Euler step and wrap positions that
	/// left the margin band back to the opposite edge.
	///
	/// Motion is one velocity step per call with no frame-time
	/// normalization; speed is tied to the refresh cadence.
	pub fn advance(&mut self) {
		let (w, h) = (self.width, self.height);
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			if p.x < -WRAP_MARGIN {
				p.x = w + WRAP_MARGIN;
			} else if p.x > w + WRAP_MARGIN {
				p.x = -WRAP_MARGIN;
			}
			if p.y < -WRAP_MARGIN {
				p.y = h + WRAP_MARGIN;
			} else if p.y > h + WRAP_MARGIN {
				p.y = -WRAP_MARGIN;
			}
		}
	}

	/// Logical bounds the current particles were sampled against.
	pub fn bounds(&self) -> (f64, f64) {
		(self.width, self.height)
	}
}

impl Default for ParticlePool {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::Rng;

	fn native_rng() -> impl FnMut() -> f64 {
		let mut rng = rand::rng();
		move || rng.random::<f64>()
	}

	#[test]
	fn populate_yields_exact_count_within_ranges() {
		let mut rng = native_rng();
		for _ in 0..50 {
			let mut pool = ParticlePool::new();
			pool.populate(PARTICLE_COUNT, 800.0, 600.0, &mut rng);
			assert_eq!(pool.particles.len(), PARTICLE_COUNT);
			for p in &pool.particles {
				assert!(p.x >= 0.0 && p.x < 800.0);
				assert!(p.y >= 0.0 && p.y < 600.0);
				assert!(p.vx >= -VELOCITY_RANGE && p.vx < VELOCITY_RANGE);
				assert!(p.vy >= -VELOCITY_RANGE && p.vy < VELOCITY_RANGE);
				assert!(p.radius >= RADIUS_MIN && p.radius < RADIUS_MAX);
				assert!(p.alpha >= ALPHA_MIN && p.alpha < ALPHA_MAX);
			}
		}
	}

	#[test]
	fn populate_replaces_previous_pool() {
		let mut rng = native_rng();
		let mut pool = ParticlePool::new();
		pool.populate(PARTICLE_COUNT, 800.0, 600.0, &mut rng);
		pool.populate(5, 320.0, 200.0, &mut rng);
		assert_eq!(pool.particles.len(), 5);
		assert_eq!(pool.bounds(), (320.0, 200.0));
		for p in &pool.particles {
			assert!(p.x < 320.0 && p.y < 200.0);
		}
	}

	#[test]
	fn wrap_relocates_to_opposite_margin() {
		let mut pool = ParticlePool::new();
		pool.populate(0, 800.0, 600.0, &mut || 0.0);
		pool.particles.push(Particle {
			x: 815.0,
			y: 300.0,
			vx: 0.0,
			vy: 0.0,
			radius: 1.0,
			alpha: 0.5,
		});
		pool.particles.push(Particle {
			x: 400.0,
			y: -10.5,
			vx: 0.0,
			vy: 0.0,
			radius: 1.0,
			alpha: 0.5,
		});
		pool.advance();
		assert_eq!(pool.particles[0].x, -WRAP_MARGIN);
		assert_eq!(pool.particles[1].y, 600.0 + WRAP_MARGIN);
	}

	#[test]
	fn positions_stay_bounded_over_many_steps() {
		let mut rng = native_rng();
		let mut pool = ParticlePool::new();
		pool.populate(PARTICLE_COUNT, 400.0, 300.0, &mut rng);
		for _ in 0..20_000 {
			pool.advance();
		}
		for p in &pool.particles {
			assert!(p.x >= -WRAP_MARGIN && p.x <= 400.0 + WRAP_MARGIN);
			assert!(p.y >= -WRAP_MARGIN && p.y <= 300.0 + WRAP_MARGIN);
		}
	}
}
