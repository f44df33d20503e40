//! Frame scheduling lifecycle shared by every animated layer.
//!
//! A [`FrameLoop`] owns a [`FrameHost`] (in the browser: `requestAnimationFrame`
//! plus window listeners) and enforces the start / frame / stop protocol:
//!
//! 1. [`FrameLoop::start`] attaches listeners and requests the first frame.
//! 2. Each callback calls [`FrameLoop::begin_frame`], does its work, then
//!    [`FrameLoop::end_frame`], which requests the next frame. At most one
//!    request is ever pending.
//! 3. [`FrameLoop::stop`] cancels the pending request and detaches listeners.
//!    A stopped loop never requests again, even if a stale callback fires.

/// Platform hooks a [`FrameLoop`] drives.
pub trait FrameHost {
	/// Identifier of a pending frame request.
	type Handle: Copy;

	/// Schedule one callback for the next display refresh.
	fn request_frame(&mut self) -> Option<Self::Handle>;
	/// Drop a previously scheduled callback.
	fn cancel_frame(&mut self, handle: Self::Handle);
	/// Register input listeners (pointer, resize, ...).
	fn attach(&mut self);
	/// Deregister everything [`FrameHost::attach`] registered.
	fn detach(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoopState {
	Idle,
	Running,
	Stopped,
}

/// Start/stop bookkeeping around a [`FrameHost`].
pub struct FrameLoop<H: FrameHost> {
	host: H,
	pending: Option<H::Handle>,
	state: LoopState,
	frames: u64,
}

impl<H: FrameHost> FrameLoop<H> {
	pub fn new(host: H) -> Self {
		Self {
			host,
			pending: None,
			state: LoopState::Idle,
			frames: 0,
		}
	}

	/// Attach listeners and request the first frame. No-op unless idle.
	pub fn start(&mut self) {
		if self.state != LoopState::Idle {
			return;
		}
		self.state = LoopState::Running;
		self.host.attach();
		self.schedule();
	}

	/// Mark the pending request as consumed. Returns `false` when the loop is
	/// no longer running and the frame's work should be skipped.
	pub fn begin_frame(&mut self) -> bool {
		self.pending = None;
		if self.state != LoopState::Running {
			return false;
		}
		self.frames += 1;
		true
	}

	/// Request the next frame if still running.
	pub fn end_frame(&mut self) {
		if self.state == LoopState::Running {
			self.schedule();
		}
	}

	/// Cancel the pending frame and detach listeners. Idempotent.
	pub fn stop(&mut self) {
		if self.state != LoopState::Running {
			self.state = LoopState::Stopped;
			return;
		}
		self.state = LoopState::Stopped;
		if let Some(handle) = self.pending.take() {
			self.host.cancel_frame(handle);
		}
		self.host.detach();
	}

	pub fn is_running(&self) -> bool {
		self.state == LoopState::Running
	}

	/// Number of frames that have run since [`FrameLoop::start`].
	pub fn frames(&self) -> u64 {
		self.frames
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	fn schedule(&mut self) {
		if self.pending.is_some() {
			return;
		}
		self.pending = self.host.request_frame();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Records every call a loop makes, standing in for the browser.
	#[derive(Default)]
	struct RecordingHost {
		next_handle: u32,
		requested: Vec<u32>,
		cancelled: Vec<u32>,
		attached: bool,
		detach_calls: u32,
	}

	impl FrameHost for RecordingHost {
		type Handle = u32;

		fn request_frame(&mut self) -> Option<u32> {
			self.next_handle += 1;
			self.requested.push(self.next_handle);
			Some(self.next_handle)
		}

		fn cancel_frame(&mut self, handle: u32) {
			self.cancelled.push(handle);
		}

		fn attach(&mut self) {
			self.attached = true;
		}

		fn detach(&mut self) {
			self.attached = false;
			self.detach_calls += 1;
		}
	}

	fn run_frame(frame_loop: &mut FrameLoop<RecordingHost>) -> bool {
		let ran = frame_loop.begin_frame();
		frame_loop.end_frame();
		ran
	}

	#[test]
	fn test_start_requests_one_frame_and_attaches() {
		let mut fl = FrameLoop::new(RecordingHost::default());
		fl.start();
		fl.start();
		assert!(fl.host().attached);
		assert_eq!(fl.host().requested.len(), 1);
	}

	#[test]
	fn test_each_frame_requests_the_next() {
		let mut fl = FrameLoop::new(RecordingHost::default());
		fl.start();
		for _ in 0..5 {
			assert!(run_frame(&mut fl));
		}
		assert_eq!(fl.frames(), 5);
		assert_eq!(fl.host().requested.len(), 6);
	}

	#[test]
	fn test_end_frame_without_begin_does_not_double_request() {
		let mut fl = FrameLoop::new(RecordingHost::default());
		fl.start();
		fl.end_frame();
		assert_eq!(fl.host().requested.len(), 1);
	}

	#[test]
	fn test_stop_cancels_pending_and_detaches() {
		let mut fl = FrameLoop::new(RecordingHost::default());
		fl.start();
		run_frame(&mut fl);
		fl.stop();

		assert!(!fl.is_running());
		assert!(!fl.host().attached);
		assert_eq!(fl.host().cancelled, vec![2]);

		// A stale callback after teardown does nothing and schedules nothing.
		let requested = fl.host().requested.len();
		assert!(!run_frame(&mut fl));
		assert_eq!(fl.frames(), 1);
		assert_eq!(fl.host().requested.len(), requested);
	}

	#[test]
	fn test_stop_is_idempotent() {
		let mut fl = FrameLoop::new(RecordingHost::default());
		fl.start();
		fl.stop();
		fl.stop();
		assert_eq!(fl.host().detach_calls, 1);
		// Cannot be restarted once stopped.
		fl.start();
		assert!(!fl.is_running());
	}

	#[test]
	fn test_stop_before_start_never_attaches() {
		let mut fl = FrameLoop::new(RecordingHost::default());
		fl.stop();
		fl.start();
		assert!(!fl.host().attached);
		assert!(fl.host().requested.is_empty());
	}
}
