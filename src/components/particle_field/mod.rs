//! Ambient particle field drawn behind the page.
//!
//! A fixed pool of softly glowing particles drifts across a full-viewport
//! canvas with:
//! - Repulsion away from the pointer within a fixed radius
//! - A vertical wave whose amplitude grows with page scroll
//! - Inelastic bounces off the viewport edges and per-frame friction
//! - Lifespan fading with in-place respawn
//! - Gradient lines linking every pair closer than a scroll-mapped threshold
//!
//! The simulation ([`ParticleField`]) is independent of the browser and is
//! stepped explicitly with a [`FrameInput`]; [`ParticleBackground`] wires it to
//! a canvas and the animation frame loop.
//!
//! # Example
//!
//! ```ignore
//! use folio::components::particle_field::{FieldConfig, ParticleBackground};
//!
//! view! { <ParticleBackground config=FieldConfig { pool_size: 60, ..Default::default() } /> }
//! ```

mod component;
pub mod config;
pub mod connections;
pub mod particles;
mod render;
pub mod theme;

pub use component::ParticleBackground;
pub use config::FieldConfig;
pub use connections::Connection;
pub use particles::{FrameInput, Particle, ParticleField};
pub use theme::FieldTheme;
