//! Full-window animated network behind the slides.

mod component;
mod particles;

pub use component::NetworkBackground;
pub use particles::{Link, Particle, ParticleField};
