//! Scroll-stacked project cards.
//!
//! Each card is sticky and measures its own progress through the viewport. The
//! progress drives an independent piecewise-linear transform so that, while the
//! list scrolls past, cards slide up into place, hold, then shrink and settle
//! into a pile with later cards layered on top of earlier ones.

use leptos::prelude::*;

use super::buttons::{ButtonVariant, CleanButton, MagneticButton};
use super::host;
use crate::content::Project;
use crate::motion::Keyframes;
use crate::motion::scroll;

const ENTER_HOLD_EXIT: [f64; 4] = [0.0, 0.2, 0.8, 1.0];

/// Visual state of one card at a given scroll progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
	/// Vertical offset in pixels.
	pub y: f64,
	pub scale: f64,
	pub opacity: f64,
	pub z_index: i32,
}

impl CardTransform {
	/// Transform for card `index` of `total` at its own `progress`.
	pub fn at(progress: f64, index: usize, total: usize) -> Self {
		let i = index as f64;
		let y = Keyframes::new(ENTER_HOLD_EXIT, [100.0, 0.0, 0.0, -15.0 * i]);
		let scale = Keyframes::new(ENTER_HOLD_EXIT, [0.9, 1.0, 1.0, 0.95 - 0.02 * i]);
		let opacity = Keyframes::new(ENTER_HOLD_EXIT, [0.0, 1.0, 1.0, 0.8]);
		// Stacking order only inflates once the card is on its way out.
		let z_index = Keyframes::new([0.0, 0.8, 1.0], [i + 1.0, i + 1.0, total as f64 + i]);

		Self {
			y: y.sample(progress),
			scale: scale.sample(progress),
			opacity: opacity.sample(progress),
			z_index: z_index.sample(progress).round() as i32,
		}
	}

	pub fn to_style(&self) -> String {
		format!(
			"transform: translateY({:.2}px) scale({:.4}); opacity: {:.3}; z-index: {};",
			self.y, self.scale, self.opacity, self.z_index
		)
	}
}

/// Two-digit ordinal shown on each card, starting at "01".
pub fn ordinal(index: usize) -> String {
	format!("{:02}", index + 1)
}

/// A non-empty link, or `None`.
fn present(href: Option<String>) -> Option<String> {
	href.filter(|h| !h.trim().is_empty())
}

/// Demo and source links shown on a card, empty entries dropped.
pub fn card_links(demo: Option<String>, source: Option<String>) -> (Option<String>, Option<String>) {
	(present(demo), present(source))
}

/// The full project list.
#[component]
pub fn ProjectStack(projects: Vec<Project>) -> impl IntoView {
	let total = projects.len();
	view! {
		<div class="project-stack">
			{projects
				.into_iter()
				.enumerate()
				.map(|(index, project)| view! { <ProjectCard project=project index=index total=total /> })
				.collect_view()}
		</div>
	}
}

/// A single sticky card tracking its own scroll progress.
#[component]
pub fn ProjectCard(project: Project, index: usize, total: usize) -> impl IntoView {
	let card_ref = NodeRef::<leptos::html::Div>::new();
	let progress = RwSignal::new(0.0);

	// Skipped until the node is attached.
	let measure = move || {
		let Some(el) = card_ref.get_untracked() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};
		let viewport = host::viewport_size(&window).map(|(_, h)| h).unwrap_or(0.0);
		let rect = el.get_bounding_client_rect();
		progress.set(scroll::element_progress(rect.top(), rect.height(), viewport));
	};

	Effect::new(move |_| {
		if card_ref.get().is_some() {
			measure();
		}
	});
	let on_scroll = window_event_listener(leptos::ev::scroll, move |_| measure());
	let on_resize = window_event_listener(leptos::ev::resize, move |_| measure());
	on_cleanup(move || {
		on_scroll.remove();
		on_resize.remove();
	});

	let style = move || CardTransform::at(progress.get(), index, total).to_style();

	let Project {
		title,
		year,
		description,
		image,
		tags,
		demo,
		source,
	} = project;
	let (demo, source) = card_links(demo, source);
	let image = image.unwrap_or_else(|| "/placeholder.svg".to_string());

	view! {
		<div node_ref=card_ref class="project-card" style=style>
			<div class="project-card__body">
				<div class="project-card__text">
					<div class="project-card__meta">
						<span class="project-card__year">{year}</span>
						<div class="tags">
							{tags
								.into_iter()
								.map(|tag| view! { <span class="badge">{tag}</span> })
								.collect_view()}
						</div>
					</div>
					<h3 class="project-card__title">{title.clone()}</h3>
					<p class="project-card__description">{description}</p>
					<div class="project-card__links">
						{demo
							.map(|href| {
								view! {
									<MagneticButton href=href external=true>
										"View Project"
										<span class="arrow">"↗"</span>
									</MagneticButton>
								}
							})}
						{source
							.map(|href| {
								view! {
									<CleanButton variant=ButtonVariant::Outline href=href external=true>
										"Source"
									</CleanButton>
								}
							})}
					</div>
				</div>
				<div class="project-card__media">
					<img src=image alt=title />
					<div class="project-card__ordinal">{ordinal(index)}</div>
				</div>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_enter_hold_exit_breakpoints() {
		let entering = CardTransform::at(0.0, 2, 3);
		assert_eq!((entering.y, entering.scale, entering.opacity), (100.0, 0.9, 0.0));

		for progress in [0.2, 0.5, 0.8] {
			let held = CardTransform::at(progress, 2, 3);
			assert_eq!((held.y, held.scale, held.opacity), (0.0, 1.0, 1.0));
		}

		let gone = CardTransform::at(1.0, 2, 3);
		assert_eq!(gone.y, -30.0);
		assert!((gone.scale - 0.91).abs() < 1e-12);
		assert_eq!(gone.opacity, 0.8);
	}

	#[test]
	fn test_z_index_inflates_only_when_leaving() {
		assert_eq!(CardTransform::at(0.0, 1, 3).z_index, 2);
		assert_eq!(CardTransform::at(0.8, 1, 3).z_index, 2);
		assert_eq!(CardTransform::at(1.0, 1, 3).z_index, 4);
		assert!(CardTransform::at(0.9, 1, 3).z_index >= 2);
	}

	#[test]
	fn test_later_cards_layer_on_top() {
		let total = 3;
		for progress in [0.0, 0.5, 0.9, 1.0] {
			let zs: Vec<i32> = (0..total)
				.map(|i| CardTransform::at(progress, i, total).z_index)
				.collect();
			assert!(zs.windows(2).all(|w| w[0] < w[1]), "{zs:?} at {progress}");
		}
	}

	#[test]
	fn test_card_links_drop_empty_entries() {
		let (demo, source) = card_links(Some(String::new()), Some("https://git.example/p".into()));
		assert_eq!(demo, None);
		assert_eq!(source.as_deref(), Some("https://git.example/p"));

		let (demo, source) = card_links(Some("https://demo.example".into()), Some("  ".into()));
		assert_eq!(demo.as_deref(), Some("https://demo.example"));
		assert_eq!(source, None);

		assert_eq!(card_links(None, None), (None, None));
	}

	#[test]
	fn test_style_and_ordinal() {
		let style = CardTransform::at(0.5, 0, 1).to_style();
		assert_eq!(
			style,
			"transform: translateY(0.00px) scale(1.0000); opacity: 1.000; z-index: 1;"
		);
		assert_eq!(ordinal(0), "01");
		assert_eq!(ordinal(11), "12");
	}
}
