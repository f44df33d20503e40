//! Tunable constants of the particle simulation.
//!
//! Every field has a default matching the shipped look; any subset can be
//! overridden from the `"background"` object of the site content JSON.

use serde::Deserialize;

/// Simulation constants. Velocities and forces are per display frame.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of particles. Fixed for the lifetime of a field.
	///
	/// Connection building is quadratic in this value.
	pub pool_size: usize,
	/// Spawn velocity components are drawn from `[-spawn_speed, spawn_speed)`.
	pub spawn_speed: f64,
	pub size_min: f64,
	pub size_max: f64,
	pub opacity_min: f64,
	pub opacity_max: f64,
	/// Hue band (degrees) particle colours are drawn from.
	pub hue_min: f64,
	pub hue_max: f64,
	/// Upper bound of the randomized starting age.
	pub initial_life_max: f64,
	pub max_life_min: f64,
	pub max_life_max: f64,
	/// Pointer repulsion radius in pixels.
	pub repulsion_radius: f64,
	/// Velocity added per frame at full repulsion force.
	pub repulsion_strength: f64,
	/// Wave phase per pixel of x.
	pub wave_frequency: f64,
	/// Wave phase per millisecond of wall-clock time.
	pub wave_speed: f64,
	/// Fraction of the scroll-mapped amplitude applied per frame.
	pub wave_scale: f64,
	/// Fraction of velocity kept (and inverted) on a wall bounce.
	pub restitution: f64,
	/// Velocity multiplier applied every frame.
	pub friction: f64,
	/// Glow radius as a multiple of particle size.
	pub glow_scale: f64,
	/// Glow alpha as a fraction of the particle alpha.
	pub glow_alpha: f64,
	/// Opacity of a connection between two coincident particles.
	pub link_opacity: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			pool_size: 100,
			spawn_speed: 0.25,
			size_min: 1.0,
			size_max: 4.0,
			opacity_min: 0.2,
			opacity_max: 0.8,
			hue_min: 220.0,
			hue_max: 280.0,
			initial_life_max: 100.0,
			max_life_min: 100.0,
			max_life_max: 200.0,
			repulsion_radius: 150.0,
			repulsion_strength: 0.02,
			wave_frequency: 0.01,
			wave_speed: 0.001,
			wave_scale: 0.01,
			restitution: 0.8,
			friction: 0.99,
			glow_scale: 3.0,
			glow_alpha: 0.3,
			link_opacity: 0.3,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_partial_override() {
		let config: FieldConfig =
			serde_json::from_str(r#"{ "pool_size": 40, "friction": 0.95 }"#).unwrap();
		assert_eq!(config.pool_size, 40);
		assert_eq!(config.friction, 0.95);
		assert_eq!(config.repulsion_radius, 150.0);
	}
}
