//! Time- and scroll-driven animation primitives.
//!
//! Everything in here is plain arithmetic over `f64` so it can be exercised by
//! native unit tests; the browser glue that feeds these functions lives in
//! [`crate::components`].

pub mod clock;
pub mod easing;
pub mod frame_loop;
pub mod keyframes;
pub mod scroll;

pub use easing::Easing;
pub use frame_loop::{FrameHost, FrameLoop};
pub use keyframes::{Keyframes, LoopingTrack};
pub use scroll::{ScrollMapper, ScrollParams};
