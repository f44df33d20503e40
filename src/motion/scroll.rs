//! Scroll progress measurement and scroll-linked simulation parameters.
//!
//! Progress is always normalized to `0..=1`. Two flavours exist:
//!
//! - **Page progress**: how far the document has been scrolled, used by the
//!   backgrounds.
//! - **Element progress**: how far a single element has travelled through the
//!   viewport, from its top edge touching the viewport bottom (0) to its bottom
//!   edge leaving through the viewport top (1). Used by the project cards.

use super::keyframes::Keyframes;

/// Normalized document scroll position.
///
/// Returns 0 when the document is not taller than the viewport.
pub fn page_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
	let scrollable = document_height - viewport_height;
	if scrollable <= 0.0 || !scroll_y.is_finite() {
		return 0.0;
	}
	(scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Normalized progress of an element through the viewport.
///
/// `top` is the element's bounding-rect top relative to the viewport.
pub fn element_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
	let travel = viewport_height + height;
	if travel <= 0.0 || !top.is_finite() {
		return 0.0;
	}
	((viewport_height - top) / travel).clamp(0.0, 1.0)
}

/// Simulation parameters sampled for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollParams {
	/// Target pool size. Reported only; the pool never resizes.
	pub particle_count: f64,
	/// Maximum distance at which two particles are linked.
	pub connection_distance: f64,
	/// Strength of the vertical drift wave.
	pub wave_amplitude: f64,
}

/// Keyframe tables translating page progress into [`ScrollParams`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMapper {
	pub particle_count: Keyframes<3>,
	pub connection_distance: Keyframes<3>,
	pub wave_amplitude: Keyframes<2>,
}

impl Default for ScrollMapper {
	fn default() -> Self {
		Self {
			particle_count: Keyframes::new([0.0, 0.5, 1.0], [80.0, 120.0, 60.0]),
			connection_distance: Keyframes::new([0.0, 0.5, 1.0], [120.0, 180.0, 100.0]),
			wave_amplitude: Keyframes::new([0.0, 1.0], [0.0, 50.0]),
		}
	}
}

impl ScrollMapper {
	pub fn sample(&self, progress: f64) -> ScrollParams {
		ScrollParams {
			particle_count: self.particle_count.sample(progress),
			connection_distance: self.connection_distance.sample(progress),
			wave_amplitude: self.wave_amplitude.sample(progress),
		}
	}
}

impl ScrollParams {
	/// Particle count rounded to a whole pool size.
	pub fn target_count(&self) -> usize {
		self.particle_count.round().max(0.0) as usize
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_connection_distance_breakpoints() {
		let m = ScrollMapper::default();
		assert_eq!(m.sample(0.0).connection_distance, 120.0);
		assert_eq!(m.sample(0.5).connection_distance, 180.0);
		assert_eq!(m.sample(1.0).connection_distance, 100.0);
	}

	#[test]
	fn test_particle_count_and_wave_breakpoints() {
		let m = ScrollMapper::default();
		assert_eq!(m.sample(0.0).target_count(), 80);
		assert_eq!(m.sample(0.5).target_count(), 120);
		assert_eq!(m.sample(1.0).target_count(), 60);
		assert_eq!(m.sample(0.0).wave_amplitude, 0.0);
		assert_eq!(m.sample(1.0).wave_amplitude, 50.0);
		assert!((m.sample(0.3).wave_amplitude - 15.0).abs() < 1e-9);
	}

	#[test]
	fn test_monotonic_within_segments() {
		let m = ScrollMapper::default();
		let steps: Vec<f64> = (0..=100).map(|i| i as f64 / 100.0).collect();
		for w in steps.windows(2) {
			let (a, b) = (m.sample(w[0]), m.sample(w[1]));
			if w[1] <= 0.5 {
				assert!(b.connection_distance >= a.connection_distance);
				assert!(b.particle_count >= a.particle_count);
			} else if w[0] >= 0.5 {
				assert!(b.connection_distance <= a.connection_distance);
				assert!(b.particle_count <= a.particle_count);
			}
			assert!(b.wave_amplitude >= a.wave_amplitude);
		}
	}

	#[test]
	fn test_page_progress() {
		assert_eq!(page_progress(0.0, 3000.0, 1000.0), 0.0);
		assert_eq!(page_progress(1000.0, 3000.0, 1000.0), 0.5);
		assert_eq!(page_progress(5000.0, 3000.0, 1000.0), 1.0);
		// Non-scrolling document.
		assert_eq!(page_progress(10.0, 800.0, 1000.0), 0.0);
	}

	#[test]
	fn test_element_progress() {
		// Top edge at the viewport bottom.
		assert_eq!(element_progress(1000.0, 500.0, 1000.0), 0.0);
		// Bottom edge at the viewport top.
		assert_eq!(element_progress(-500.0, 500.0, 1000.0), 1.0);
		assert!((element_progress(250.0, 500.0, 1000.0) - 0.5).abs() < 1e-12);
		// Still below the fold.
		assert_eq!(element_progress(1400.0, 500.0, 1000.0), 0.0);
	}
}
