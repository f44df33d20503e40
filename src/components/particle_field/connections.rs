//! Proximity links between particles, rebuilt every frame.

use super::particles::Particle;

/// A link between two particles closer than the current threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	/// Index of the first particle. Always less than `b`.
	pub a: usize,
	/// Index of the second particle.
	pub b: usize,
	pub distance: f64,
	/// Line opacity, fading linearly to zero at the threshold.
	pub opacity: f64,
}

/// Rebuild `out` with every unordered pair closer than `threshold`.
///
/// Brute force over all pairs, so O(n²) in the pool size. The previous
/// frame's allocation is reused.
pub fn link_pairs(
	particles: &[Particle],
	threshold: f64,
	peak_opacity: f64,
	out: &mut Vec<Connection>,
) {
	out.clear();
	if threshold <= 0.0 {
		return;
	}

	for (a, p1) in particles.iter().enumerate() {
		for (offset, p2) in particles[a + 1..].iter().enumerate() {
			let distance = (p1.x - p2.x).hypot(p1.y - p2.y);
			if distance < threshold {
				out.push(Connection {
					a,
					b: a + 1 + offset,
					distance,
					opacity: (1.0 - distance / threshold) * peak_opacity,
				});
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	fn at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			size: 2.0,
			opacity: 0.5,
			hue: 240.0,
			life: 0.0,
			max_life: 100.0,
		}
	}

	#[test]
	fn test_links_exactly_the_close_pairs() {
		let particles: Vec<Particle> = (0..30)
			.map(|i| {
				let i = i as f64;
				at((i * 37.0) % 400.0, (i * 91.0) % 300.0)
			})
			.collect();
		let threshold = 120.0;
		let mut links = Vec::new();
		link_pairs(&particles, threshold, 0.3, &mut links);

		let linked: HashSet<(usize, usize)> = links.iter().map(|c| (c.a, c.b)).collect();
		assert_eq!(linked.len(), links.len(), "each pair appears once");

		for i in 0..particles.len() {
			for j in (i + 1)..particles.len() {
				let d = (particles[i].x - particles[j].x).hypot(particles[i].y - particles[j].y);
				assert_eq!(linked.contains(&(i, j)), d < threshold, "pair ({i}, {j})");
			}
		}
		assert!(links.iter().all(|c| c.a < c.b));
	}

	#[test]
	fn test_opacity_fades_with_distance() {
		let particles = vec![at(0.0, 0.0), at(60.0, 0.0), at(0.0, 0.0)];
		let mut links = Vec::new();
		link_pairs(&particles, 120.0, 0.3, &mut links);

		let half = links.iter().find(|c| (c.a, c.b) == (0, 1)).unwrap();
		assert!((half.opacity - 0.15).abs() < 1e-12);
		// Coincident particles are linked at full opacity, but never to themselves.
		let coincident = links.iter().find(|c| (c.a, c.b) == (0, 2)).unwrap();
		assert_eq!(coincident.distance, 0.0);
		assert!((coincident.opacity - 0.3).abs() < 1e-12);
		assert!(links.iter().all(|c| c.a != c.b));
	}

	#[test]
	fn test_previous_frame_is_discarded() {
		let mut links = Vec::new();
		link_pairs(&[at(0.0, 0.0), at(10.0, 0.0)], 120.0, 0.3, &mut links);
		assert_eq!(links.len(), 1);
		link_pairs(&[at(0.0, 0.0), at(500.0, 0.0)], 120.0, 0.3, &mut links);
		assert!(links.is_empty());
		link_pairs(&[at(0.0, 0.0), at(10.0, 0.0)], 0.0, 0.3, &mut links);
		assert!(links.is_empty());
	}
}
