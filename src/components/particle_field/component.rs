//! Leptos component hosting the particle field canvas.
//!
//! The canvas is fixed behind the page and ignores pointer events; the pointer
//! is tracked through a passive window listener instead. Each
//! `requestAnimationFrame` callback samples page scroll, advances the
//! simulation by one step and redraws. Unmounting stops the [`FrameLoop`],
//! which cancels the pending frame and removes both window listeners.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, Window};

use super::config::FieldConfig;
use super::particles::{FrameInput, ParticleField};
use super::render;
use super::theme::FieldTheme;
use crate::components::host::{self, BrowserHost};
use crate::motion::{FrameLoop, ScrollMapper};

/// Everything a mounted canvas owns. Dropped on unmount.
struct FieldContext {
	frames: FrameLoop<BrowserHost>,
	field: ParticleField,
	mapper: ScrollMapper,
	theme: FieldTheme,
	rng: SmallRng,
	pointer: Option<(f64, f64)>,
	/// Last reported scroll-mapped pool size, for debug logging only.
	target_count: usize,
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

type SharedContext = Rc<RefCell<Option<FieldContext>>>;

/// Full-viewport animated particle layer.
///
/// `config` overrides the simulation constants; defaults are used otherwise.
/// If the browser cannot provide a 2D context the canvas stays blank.
#[component]
pub fn ParticleBackground(#[prop(optional, into)] config: Option<FieldConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: SharedContext = Rc::new(RefCell::new(None));
	let context_init = context.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context_init.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		mount(
			&context_init,
			&window,
			canvas.into(),
			config.clone().unwrap_or_default(),
		);
	});

	let context_cleanup = SendWrapper::new(context);
	on_cleanup(move || {
		if let Some(mut c) = context_cleanup.borrow_mut().take() {
			c.frames.stop();
			info!(
				"folio: particle field stopped after {} frames",
				c.frames.frames()
			);
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field"
			style=FieldTheme::default().canvas_style()
			aria-hidden="true"
		/>
	}
}

fn mount(slot: &SharedContext, window: &Window, canvas: HtmlCanvasElement, config: FieldConfig) {
	let Some((w, h)) = host::viewport_size(window) else {
		warn!("folio: viewport size unavailable, particle field disabled");
		return;
	};
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let Some(ctx) = host::context_2d(&canvas) else {
		warn!("folio: 2d canvas context unavailable, particle field disabled");
		return;
	};

	let seed = (js_sys::Math::random() * u64::MAX as f64) as u64 ^ js_sys::Date::now().to_bits();
	let mut rng = SmallRng::seed_from_u64(seed);
	let field = ParticleField::new(config, w, h, &mut rng);
	let pool = field.particles().len();

	let slot_frame = slot.clone();
	let on_frame = Closure::<dyn FnMut()>::new(move || frame(&slot_frame));

	let slot_resize = slot.clone();
	let on_resize = Closure::<dyn FnMut(Event)>::new(move |_: Event| resize(&slot_resize));

	let slot_pointer = slot.clone();
	let on_pointer = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
		let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
			return;
		};
		if let Some(ref mut c) = *slot_pointer.borrow_mut() {
			c.pointer = Some((ev.client_x() as f64, ev.client_y() as f64));
		}
	});

	let browser = BrowserHost::new(window.clone(), on_frame)
		.listen("resize", on_resize)
		.listen("pointermove", on_pointer);

	*slot.borrow_mut() = Some(FieldContext {
		frames: FrameLoop::new(browser),
		field,
		mapper: ScrollMapper::default(),
		theme: FieldTheme::default(),
		rng,
		pointer: None,
		target_count: 0,
		canvas,
		ctx,
	});
	if let Some(ref mut c) = *slot.borrow_mut() {
		c.frames.start();
	}

	info!("folio: particle field mounted ({} particles, {}x{})", pool, w, h);
}

fn frame(slot: &SharedContext) {
	let mut guard = slot.borrow_mut();
	let Some(c) = guard.as_mut() else {
		return;
	};
	if !c.frames.begin_frame() {
		return;
	}

	let progress = web_sys::window()
		.map(|w| host::page_scroll_progress(&w))
		.unwrap_or(0.0);
	let params = c.mapper.sample(progress);
	if params.target_count() != c.target_count {
		c.target_count = params.target_count();
		debug!("folio: scroll target particle count {}", c.target_count);
	}

	let input = FrameInput {
		pointer: c.pointer,
		time_ms: js_sys::Date::now(),
		params,
	};
	c.field.advance(&input, &mut c.rng);
	render::render(&c.field, &c.ctx, &c.theme);

	c.frames.end_frame();
}

fn resize(slot: &SharedContext) {
	let Some((w, h)) = web_sys::window().and_then(|win| host::viewport_size(&win)) else {
		return;
	};
	if let Some(ref mut c) = *slot.borrow_mut() {
		c.canvas.set_width(w as u32);
		c.canvas.set_height(h as u32);
		c.field.resize(w, h);
		debug!("folio: particle field resized to {}x{}", w, h);
	}
}
