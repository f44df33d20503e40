//! Browser glue shared by the animated layers.
//!
//! [`BrowserHost`] implements [`FrameHost`] on top of `requestAnimationFrame`
//! and passive window listeners. The free functions read viewport geometry and
//! fall back to `None`/zero instead of failing when the DOM is unavailable.

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{
	AddEventListenerOptions, CanvasRenderingContext2d, Event, HtmlCanvasElement, Window,
};

use crate::motion::FrameHost;
use crate::motion::scroll;

/// Animation frame callback.
pub type FrameCallback = Closure<dyn FnMut()>;
/// Window event callback.
pub type EventCallback = Closure<dyn FnMut(Event)>;

/// `requestAnimationFrame` scheduling plus a set of window listeners that are
/// attached and detached together.
pub struct BrowserHost {
	window: Window,
	on_frame: FrameCallback,
	listeners: Vec<(&'static str, EventCallback)>,
}

impl BrowserHost {
	pub fn new(window: Window, on_frame: FrameCallback) -> Self {
		Self {
			window,
			on_frame,
			listeners: Vec::new(),
		}
	}

	/// Add a window listener, registered once the loop starts.
	pub fn listen(mut self, event: &'static str, callback: EventCallback) -> Self {
		self.listeners.push((event, callback));
		self
	}
}

impl FrameHost for BrowserHost {
	type Handle = i32;

	fn request_frame(&mut self) -> Option<i32> {
		self.window
			.request_animation_frame(self.on_frame.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel_frame(&mut self, handle: i32) {
		let _ = self.window.cancel_animation_frame(handle);
	}

	fn attach(&mut self) {
		let options = AddEventListenerOptions::new();
		options.set_passive(true);
		for (event, callback) in &self.listeners {
			if let Err(e) = self
				.window
				.add_event_listener_with_callback_and_add_event_listener_options(
					event,
					callback.as_ref().unchecked_ref(),
					&options,
				) {
				warn!("folio: failed to listen for {}: {:?}", event, e);
			}
		}
	}

	fn detach(&mut self) {
		for (event, callback) in &self.listeners {
			let _ = self
				.window
				.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
		}
	}
}

/// Inner window size in CSS pixels.
pub fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Document scroll progress in `0..=1`.
pub fn page_scroll_progress(window: &Window) -> f64 {
	let scroll_y = window.scroll_y().unwrap_or(0.0);
	let viewport = viewport_size(window).map(|(_, h)| h).unwrap_or(0.0);
	let document_height = window
		.document()
		.and_then(|d| d.document_element())
		.map(|e| e.scroll_height() as f64)
		.unwrap_or(0.0);
	scroll::page_progress(scroll_y, document_height, viewport)
}

/// The canvas' 2D context, or `None` if the browser refuses one.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}
