//! folio: single-page portfolio site rendered client-side with Leptos.
//!
//! The page is static content composed over two animated layers: a canvas
//! particle field whose parameters follow page scroll, and an ambient SVG
//! scene. Project cards stack up as the work section scrolls past.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;
pub mod motion;

use components::cursor::CustomCursor;
use components::floating_icons::FloatingIcons;
use components::particle_field::ParticleBackground;
use components::sections::{About, ContactSection, Footer, Header, Hero, Skills, Work, Writing};
use components::svg_background::AmbientBackground;
pub use content::SiteContent;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("folio: logging initialized");
}

/// Site content from a script element with id="site-content", if present and
/// valid.
fn load_site_content() -> Option<SiteContent> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-content")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match SiteContent::from_json(&json_text) {
		Ok(content) => {
			info!(
				"folio: loaded {} projects, {} articles from page",
				content.projects.len(),
				content.articles.len()
			);
			Some(content)
		}
		Err(e) => {
			warn!("folio: failed to parse site content, using built-in: {}", e);
			None
		}
	}
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let SiteContent {
		profile,
		clock,
		focus_areas,
		projects,
		skills,
		about,
		experience,
		articles,
		contact,
		background,
	} = load_site_content().unwrap_or_else(SiteContent::builtin);
	let title = profile.name.clone();
	let description = profile.tagline.clone();
	let name = profile.name.clone();
	let credit = profile.footer_credit.clone();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=title.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content=description />

		<ParticleBackground config=background />
		<AmbientBackground />
		<FloatingIcons />
		<CustomCursor />

		<div class="page">
			<Header name=title.clone() clock=clock />
			<main>
				<Hero profile=profile focus_areas=focus_areas />
				<Work projects=projects />
				<Skills categories=skills />
				<About paragraphs=about experience=experience />
				<Writing articles=articles />
				<ContactSection contact=contact />
			</main>
			<Footer name=name credit=credit />
		</div>
	}
}
