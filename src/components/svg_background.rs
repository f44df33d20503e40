//! Ambient vector background.
//!
//! A 1000x1000 SVG scene sitting behind the page. Scroll progress rotates,
//! scales and fades two shape groups; the pointer nudges the shapes around; a
//! set of phase-shifted looping tracks keeps everything breathing. The scene is
//! a pure function of `(time, scroll, pointer)` via [`AmbientScene::frame`];
//! the component only feeds it from an animation frame loop.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{Event, MouseEvent};

use super::host::{self, BrowserHost};
use crate::motion::{FrameLoop, Keyframes, LoopingTrack};

/// Number of small floating motes.
pub const MOTE_COUNT: usize = 20;

/// Pointer position as a percentage (`0..=100`) of the viewport.
pub fn pointer_percent(client_x: f64, client_y: f64, width: f64, height: f64) -> (f64, f64) {
	let pct = |v: f64, extent: f64| {
		if extent > 0.0 {
			v / extent * 100.0
		} else {
			0.0
		}
	};
	(pct(client_x, width), pct(client_y, height))
}

/// A small looping circle placed on a deterministic scatter pattern.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mote {
	pub cx: f64,
	pub cy: f64,
	pub hue: f64,
	bob: LoopingTrack<3>,
	opacity: LoopingTrack<3>,
}

impl Mote {
	/// The `i`-th mote. Positions come from modular strides so the pattern
	/// looks scattered yet never changes between loads.
	pub fn nth(i: usize) -> Self {
		let cx = 50.0 + ((i * 47) % 900) as f64;
		let cy = 50.0 + ((i * 73) % 900) as f64;
		let duration = 3.0 + i as f64 * 0.2;
		let delay = i as f64 * 0.1;
		Self {
			cx,
			cy,
			hue: 220.0 + i as f64 * 10.0,
			bob: LoopingTrack::new([cy, cy - 20.0, cy], duration).with_delay(delay),
			opacity: LoopingTrack::new([0.2, 0.8, 0.2], duration).with_delay(delay),
		}
	}
}

/// Sampled state of one mote.
#[derive(Clone, Debug, PartialEq)]
pub struct MoteFrame {
	pub cx: f64,
	pub cy: f64,
	pub opacity: f64,
	pub fill: String,
}

/// Scroll-driven rotation and scale of a shape group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupFrame {
	pub rotate: f64,
	pub scale: f64,
}

impl GroupFrame {
	pub fn to_style(self) -> String {
		format!(
			"transform-box: fill-box; transform-origin: center; transform: rotate({:.2}deg) scale({:.4});",
			self.rotate, self.scale
		)
	}
}

/// Everything the SVG needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneFrame {
	pub opacity: f64,
	pub grid_opacity: f64,
	pub primary: GroupFrame,
	pub secondary: GroupFrame,
	pub circle: (f64, f64, f64),
	pub circle_opacity: f64,
	pub ellipse: (f64, f64, f64, f64),
	pub ellipse_opacity: f64,
	pub curve: String,
	pub motes: Vec<MoteFrame>,
}

/// Keyframe tables for the whole scene.
#[derive(Clone, Debug)]
pub struct AmbientScene {
	rotate_primary: Keyframes<2>,
	rotate_secondary: Keyframes<2>,
	scale: Keyframes<3>,
	opacity: Keyframes<4>,
	grid_opacity: Keyframes<3>,
	circle_radius: LoopingTrack<3>,
	circle_opacity: LoopingTrack<3>,
	ellipse_rx: LoopingTrack<3>,
	ellipse_ry: LoopingTrack<3>,
	ellipse_opacity: LoopingTrack<3>,
	curve_swell: LoopingTrack<3>,
	motes: Vec<Mote>,
}

impl Default for AmbientScene {
	fn default() -> Self {
		Self {
			rotate_primary: Keyframes::new([0.0, 1.0], [0.0, 360.0]),
			rotate_secondary: Keyframes::new([0.0, 1.0], [0.0, -180.0]),
			scale: Keyframes::new([0.0, 0.5, 1.0], [1.0, 1.2, 0.8]),
			opacity: Keyframes::new([0.0, 0.3, 0.7, 1.0], [0.1, 0.3, 0.2, 0.05]),
			grid_opacity: Keyframes::new([0.0, 0.5, 1.0], [0.1, 0.05, 0.02]),
			circle_radius: LoopingTrack::new([150.0, 180.0, 150.0], 4.0),
			circle_opacity: LoopingTrack::new([0.3, 0.6, 0.3], 4.0),
			ellipse_rx: LoopingTrack::new([120.0, 140.0, 120.0], 6.0).with_delay(1.0),
			ellipse_ry: LoopingTrack::new([80.0, 100.0, 80.0], 6.0).with_delay(1.0),
			ellipse_opacity: LoopingTrack::new([0.2, 0.5, 0.2], 6.0).with_delay(1.0),
			curve_swell: LoopingTrack::new([0.0, 20.0, 0.0], 8.0),
			motes: (0..MOTE_COUNT).map(Mote::nth).collect(),
		}
	}
}

impl AmbientScene {
	/// Sample the scene at `time` seconds, page `scroll` progress, and pointer
	/// position in viewport percent.
	pub fn frame(&self, time: f64, scroll: f64, pointer: (f64, f64)) -> SceneFrame {
		let (px, py) = pointer;
		let scale = self.scale.sample(scroll);
		let swell = self.curve_swell.sample(time);
		let baseline = 500.0 + py * 2.0 + swell;
		let control = 300.0 + px - swell;

		SceneFrame {
			opacity: self.opacity.sample(scroll),
			grid_opacity: self.grid_opacity.sample(scroll),
			primary: GroupFrame {
				rotate: self.rotate_primary.sample(scroll),
				scale,
			},
			secondary: GroupFrame {
				rotate: self.rotate_secondary.sample(scroll),
				scale,
			},
			circle: (
				400.0 + px * 2.0,
				300.0 + py * 1.5,
				self.circle_radius.sample(time),
			),
			circle_opacity: self.circle_opacity.sample(time),
			ellipse: (
				600.0 - px * 1.5,
				700.0 - py * 2.0,
				self.ellipse_rx.sample(time),
				self.ellipse_ry.sample(time),
			),
			ellipse_opacity: self.ellipse_opacity.sample(time),
			curve: format!(
				"M 0,{baseline:.2} Q 250,{control:.2} 500,{baseline:.2} T 1000,{baseline:.2}"
			),
			motes: self
				.motes
				.iter()
				.map(|m| MoteFrame {
					cx: m.cx,
					cy: m.bob.sample(time),
					opacity: m.opacity.sample(time),
					fill: format!("hsl({}, 70%, 60%)", m.hue),
				})
				.collect(),
		}
	}
}

struct SceneContext {
	frames: FrameLoop<BrowserHost>,
	started_ms: f64,
}

/// Full-viewport decorative SVG layer.
#[component]
pub fn AmbientBackground() -> impl IntoView {
	let clock = RwSignal::new(0.0);
	let scroll = RwSignal::new(0.0);
	let pointer = RwSignal::new((0.0, 0.0));
	let scene = AmbientScene::default();
	let frame = Memo::new(move |_| scene.frame(clock.get(), scroll.get(), pointer.get()));

	let context: Rc<RefCell<Option<SceneContext>>> = Rc::new(RefCell::new(None));

	if let Some(window) = web_sys::window() {
		let slot = context.clone();
		let on_frame = Closure::<dyn FnMut()>::new(move || {
			let mut guard = slot.borrow_mut();
			let Some(c) = guard.as_mut() else {
				return;
			};
			if !c.frames.begin_frame() {
				return;
			}
			clock.set((js_sys::Date::now() - c.started_ms) / 1000.0);
			if let Some(w) = web_sys::window() {
				scroll.set(host::page_scroll_progress(&w));
			}
			c.frames.end_frame();
		});
		let on_pointer = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
			let (Some(ev), Some(window)) = (ev.dyn_ref::<MouseEvent>(), web_sys::window()) else {
				return;
			};
			let (w, h) = host::viewport_size(&window).unwrap_or((0.0, 0.0));
			pointer.set(pointer_percent(
				ev.client_x() as f64,
				ev.client_y() as f64,
				w,
				h,
			));
		});

		let browser = BrowserHost::new(window, on_frame).listen("pointermove", on_pointer);
		*context.borrow_mut() = Some(SceneContext {
			frames: FrameLoop::new(browser),
			started_ms: js_sys::Date::now(),
		});
		if let Some(ref mut c) = *context.borrow_mut() {
			c.frames.start();
		}
	}

	let context_cleanup = SendWrapper::new(context);
	on_cleanup(move || {
		if let Some(mut c) = context_cleanup.borrow_mut().take() {
			c.frames.stop();
			debug!("folio: ambient background stopped");
		}
	});

	let motes = (0..MOTE_COUNT)
		.map(|i| {
			let mote = move |f: fn(&MoteFrame) -> String| {
				move || frame.with(|s| s.motes.get(i).map(f).unwrap_or_default())
			};
			view! {
				<circle
					cx=mote(|m| format!("{:.2}", m.cx))
					cy=mote(|m| format!("{:.2}", m.cy))
					r="2"
					fill=mote(|m| m.fill.clone())
					opacity=mote(|m| format!("{:.3}", m.opacity))
				/>
			}
		})
		.collect_view();

	view! {
		<div class="ambient-background" aria-hidden="true">
			<svg
				viewBox="0 0 1000 1000"
				xmlns="http://www.w3.org/2000/svg"
				preserveAspectRatio="xMidYMid slice"
				opacity=move || format!("{:.3}", frame.with(|s| s.opacity))
			>
				<defs>
					<radialGradient id="ambient-gradient-1" cx="50%" cy="50%" r="50%">
						<stop offset="0%" stop-color="rgba(139, 92, 246, 0.1)" />
						<stop offset="100%" stop-color="rgba(59, 130, 246, 0.05)" />
					</radialGradient>
					<radialGradient id="ambient-gradient-2" cx="50%" cy="50%" r="50%">
						<stop offset="0%" stop-color="rgba(236, 72, 153, 0.08)" />
						<stop offset="100%" stop-color="rgba(139, 92, 246, 0.03)" />
					</radialGradient>
					<filter id="ambient-glow">
						<feGaussianBlur stdDeviation="3" result="coloredBlur" />
						<feMerge>
							<feMergeNode in="coloredBlur" />
							<feMergeNode in="SourceGraphic" />
						</feMerge>
					</filter>
					<pattern id="ambient-grid" width="50" height="50" patternUnits="userSpaceOnUse">
						<path
							d="M 50 0 L 0 0 0 50"
							fill="none"
							stroke="rgba(100, 116, 139, 0.1)"
							stroke-width="1"
						/>
					</pattern>
				</defs>

				<g style=move || frame.with(|s| s.primary.to_style())>
					<circle
						cx=move || format!("{:.2}", frame.with(|s| s.circle.0))
						cy=move || format!("{:.2}", frame.with(|s| s.circle.1))
						r=move || format!("{:.2}", frame.with(|s| s.circle.2))
						opacity=move || format!("{:.3}", frame.with(|s| s.circle_opacity))
						fill="url(#ambient-gradient-1)"
						filter="url(#ambient-glow)"
					/>
				</g>

				<g style=move || frame.with(|s| s.secondary.to_style())>
					<ellipse
						cx=move || format!("{:.2}", frame.with(|s| s.ellipse.0))
						cy=move || format!("{:.2}", frame.with(|s| s.ellipse.1))
						rx=move || format!("{:.2}", frame.with(|s| s.ellipse.2))
						ry=move || format!("{:.2}", frame.with(|s| s.ellipse.3))
						opacity=move || format!("{:.3}", frame.with(|s| s.ellipse_opacity))
						fill="url(#ambient-gradient-2)"
						filter="url(#ambient-glow)"
					/>
				</g>

				<path
					d=move || frame.with(|s| s.curve.clone())
					stroke="rgba(139, 92, 246, 0.2)"
					stroke-width="2"
					fill="none"
					filter="url(#ambient-glow)"
				/>

				<rect
					width="100%"
					height="100%"
					fill="url(#ambient-grid)"
					opacity=move || format!("{:.3}", frame.with(|s| s.grid_opacity))
				/>

				{motes}
			</svg>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_mote_layout_is_deterministic() {
		let m = Mote::nth(3);
		assert_eq!((m.cx, m.cy, m.hue), (191.0, 269.0, 250.0));
		// Strides wrap at 900.
		let m = Mote::nth(13);
		assert_eq!((m.cx, m.cy), (661.0, 99.0));
		assert_eq!(Mote::nth(13), Mote::nth(13));
	}

	#[test]
	fn test_scroll_bindings() {
		let scene = AmbientScene::default();
		let top = scene.frame(0.0, 0.0, (0.0, 0.0));
		assert_eq!(top.primary, GroupFrame { rotate: 0.0, scale: 1.0 });
		assert_eq!(top.opacity, 0.1);
		assert_eq!(top.grid_opacity, 0.1);

		let middle = scene.frame(0.0, 0.5, (0.0, 0.0));
		assert_eq!(middle.primary.rotate, 180.0);
		assert_eq!(middle.secondary.rotate, -90.0);
		assert_eq!(middle.primary.scale, 1.2);
		assert_eq!(middle.grid_opacity, 0.05);

		let bottom = scene.frame(0.0, 1.0, (0.0, 0.0));
		assert_eq!(bottom.opacity, 0.05);
		assert_eq!(bottom.secondary.scale, 0.8);
	}

	#[test]
	fn test_pointer_moves_shapes_in_opposite_directions() {
		let scene = AmbientScene::default();
		let f = scene.frame(0.0, 0.0, (50.0, 20.0));
		assert_eq!((f.circle.0, f.circle.1), (500.0, 330.0));
		assert_eq!((f.ellipse.0, f.ellipse.1), (525.0, 660.0));
		assert_eq!(f.curve, "M 0,540.00 Q 250,350.00 500,540.00 T 1000,540.00");
	}

	#[test]
	fn test_loops_breathe_and_honor_delay() {
		let scene = AmbientScene::default();
		let start = scene.frame(0.0, 0.0, (0.0, 0.0));
		assert_eq!(start.circle.2, 150.0);
		assert_eq!(start.ellipse.2, 120.0);

		let peak = scene.frame(2.0, 0.0, (0.0, 0.0));
		assert!((peak.circle.2 - 180.0).abs() < 1e-9);
		assert!((peak.circle_opacity - 0.6).abs() < 1e-9);
		// Ellipse is still inside its one second delay plus one second of easing.
		assert!(peak.ellipse.2 > 120.0 && peak.ellipse.2 < 140.0);

		let swell = scene.frame(4.0, 0.0, (0.0, 0.0));
		assert_eq!(swell.curve, "M 0,520.00 Q 250,280.00 500,520.00 T 1000,520.00");
	}

	#[test]
	fn test_motes_bob_upward() {
		let scene = AmbientScene::default();
		let m0 = Mote::nth(0);
		let f = scene.frame(1.5, 0.0, (0.0, 0.0));
		assert_eq!(f.motes.len(), MOTE_COUNT);
		assert!((f.motes[0].cy - (m0.cy - 20.0)).abs() < 1e-9);
		assert!((f.motes[0].opacity - 0.8).abs() < 1e-9);
		assert_eq!(f.motes[1].fill, "hsl(230, 70%, 60%)");
	}

	#[test]
	fn test_pointer_percent() {
		assert_eq!(pointer_percent(500.0, 250.0, 1000.0, 500.0), (50.0, 50.0));
		assert_eq!(pointer_percent(10.0, 10.0, 0.0, 0.0), (0.0, 0.0));
	}
}
