//! Easing curves for keyframe segments.

/// Maps linear progress in `0..=1` onto eased progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
	Linear,
	/// CSS `ease-in-out`, i.e. `cubic-bezier(0.42, 0, 0.58, 1)`.
	EaseInOut,
	/// Arbitrary CSS-style cubic bezier with fixed endpoints (0,0) and (1,1).
	CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Easing {
	pub fn apply(self, t: f64) -> f64 {
		let t = t.clamp(0.0, 1.0);
		match self {
			Easing::Linear => t,
			Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
			Easing::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
		}
	}
}

fn bezier(p1: f64, p2: f64, s: f64) -> f64 {
	let u = 1.0 - s;
	3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

fn bezier_slope(p1: f64, p2: f64, s: f64) -> f64 {
	let u = 1.0 - s;
	3.0 * u * u * p1 + 6.0 * u * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Solve the curve for parameter `s` where x(s) == `x`, then return y(s).
/// Newton first, bisection if the slope flattens out.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
	const EPSILON: f64 = 1e-7;

	if x <= 0.0 {
		return 0.0;
	}
	if x >= 1.0 {
		return 1.0;
	}

	let mut s = x;
	for _ in 0..8 {
		let err = bezier(x1, x2, s) - x;
		if err.abs() < EPSILON {
			return bezier(y1, y2, s);
		}
		let slope = bezier_slope(x1, x2, s);
		if slope.abs() < 1e-6 {
			break;
		}
		s -= err / slope;
	}

	let (mut lo, mut hi) = (0.0, 1.0);
	s = x;
	for _ in 0..40 {
		let v = bezier(x1, x2, s);
		if (v - x).abs() < EPSILON {
			break;
		}
		if v < x {
			lo = s;
		} else {
			hi = s;
		}
		s = (lo + hi) / 2.0;
	}
	bezier(y1, y2, s)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_endpoints_fixed() {
		for e in [Easing::Linear, Easing::EaseInOut] {
			assert_eq!(e.apply(0.0), 0.0);
			assert_eq!(e.apply(1.0), 1.0);
		}
	}

	#[test]
	fn test_ease_in_out_is_symmetric() {
		let e = Easing::EaseInOut;
		assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
		assert!((e.apply(0.2) + e.apply(0.8) - 1.0).abs() < 1e-6);
		// Slow start.
		assert!(e.apply(0.1) < 0.1);
	}

	#[test]
	fn test_ease_in_out_monotonic() {
		let e = Easing::EaseInOut;
		let mut prev = 0.0;
		for i in 1..=100 {
			let v = e.apply(i as f64 / 100.0);
			assert!(v >= prev);
			prev = v;
		}
	}

	#[test]
	fn test_linear_bezier_matches_linear() {
		let e = Easing::CubicBezier {
			x1: 1.0 / 3.0,
			y1: 1.0 / 3.0,
			x2: 2.0 / 3.0,
			y2: 2.0 / 3.0,
		};
		assert!((e.apply(0.37) - 0.37).abs() < 1e-6);
	}
}
