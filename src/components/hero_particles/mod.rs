//! Animated particle-network backdrop for the hero section.
//!
//! Three pieces form one render loop:
//! - [`surface`] sizes the canvas backing store for the device pixel ratio
//!   and installs the logical-coordinate transform.
//! - [`particles`] owns the pool of drifting bodies, rebuilt on resize.
//! - [`render`] draws links between close pairs and the particles
//!   themselves, once per animation frame.
//!
//! The [`HeroParticles`] component wires them to the DOM: surface sizing,
//! pool population, then a `requestAnimationFrame` loop that re-schedules
//! itself for the page's lifetime. A window resize re-enters at the
//! surface step and cascades through repopulation.

mod component;
pub mod particles;
pub mod render;
pub mod surface;

pub use component::HeroParticles;
