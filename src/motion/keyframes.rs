//! Piecewise-linear keyframe interpolation.
//!
//! A [`Keyframes`] maps an input domain (usually progress in `0..=1`) onto an
//! output range through a fixed list of breakpoints. Inputs before the first
//! or after the last breakpoint clamp to the end values, so a mapper can be fed
//! raw scroll measurements without pre-clamping.
//!
//! [`LoopingTrack`] wraps evenly spaced keyframes in a repeating timeline with
//! a start delay and per-segment easing.

use super::easing::Easing;

/// Breakpoints `input[i] -> output[i]`, linearly interpolated in between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframes<const N: usize> {
	input: [f64; N],
	output: [f64; N],
}

impl<const N: usize> Keyframes<N> {
	/// Create a mapping. `input` must be non-decreasing.
	pub const fn new(input: [f64; N], output: [f64; N]) -> Self {
		Self { input, output }
	}

	/// Breakpoints spread evenly over `0..=1`.
	pub fn evenly_spaced(output: [f64; N]) -> Self {
		let mut input = [0.0; N];
		if N > 1 {
			for (i, x) in input.iter_mut().enumerate() {
				*x = i as f64 / (N - 1) as f64;
			}
		}
		Self { input, output }
	}

	/// Value at `t` with linear blending between breakpoints.
	pub fn sample(&self, t: f64) -> f64 {
		self.sample_eased(t, Easing::Linear)
	}

	/// Value at `t`, applying `easing` inside each segment.
	pub fn sample_eased(&self, t: f64, easing: Easing) -> f64 {
		if N == 0 {
			return 0.0;
		}
		if t <= self.input[0] {
			return self.output[0];
		}
		if t >= self.input[N - 1] {
			return self.output[N - 1];
		}

		let seg = self
			.input
			.windows(2)
			.position(|w| t < w[1])
			.unwrap_or(N.saturating_sub(2));
		let (x0, x1) = (self.input[seg], self.input[seg + 1]);
		let (y0, y1) = (self.output[seg], self.output[seg + 1]);
		let span = x1 - x0;
		let local = if span <= 0.0 { 1.0 } else { (t - x0) / span };

		y0 + (y1 - y0) * easing.apply(local)
	}

	/// Output at the first breakpoint.
	pub fn first(&self) -> f64 {
		self.output.first().copied().unwrap_or(0.0)
	}

	/// Output at the last breakpoint.
	pub fn last(&self) -> f64 {
		self.output.last().copied().unwrap_or(0.0)
	}
}

/// An endlessly repeating keyframe animation on a seconds timeline.
///
/// Before `delay` elapses the track holds its first keyframe. Afterwards each
/// period of `duration` seconds walks through the keyframes, easing every
/// segment independently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopingTrack<const N: usize> {
	pub keyframes: Keyframes<N>,
	pub duration: f64,
	pub delay: f64,
	pub easing: Easing,
}

impl<const N: usize> LoopingTrack<N> {
	/// Evenly spaced keyframes with ease-in-out segments and no delay.
	pub fn new(values: [f64; N], duration: f64) -> Self {
		Self {
			keyframes: Keyframes::evenly_spaced(values),
			duration,
			delay: 0.0,
			easing: Easing::EaseInOut,
		}
	}

	pub fn with_delay(self, delay: f64) -> Self {
		Self { delay, ..self }
	}

	/// Sample at `time` seconds since the timeline started.
	pub fn sample(&self, time: f64) -> f64 {
		let elapsed = time - self.delay;
		if elapsed <= 0.0 || self.duration <= 0.0 {
			return self.keyframes.first();
		}
		let phase = (elapsed % self.duration) / self.duration;
		self.keyframes.sample_eased(phase, self.easing)
	}
}
