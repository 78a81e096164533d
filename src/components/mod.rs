//! UI components for the portfolio page.

pub mod back_to_top;
pub mod contact;
pub mod hero_particles;
pub mod nav;
pub mod preloader;
pub mod reveal;
pub mod typewriter;
