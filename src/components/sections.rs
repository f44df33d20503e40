//! Page sections. Static markup over [`SiteContent`](crate::content::SiteContent)
//! slices; the header clock is the only one with a timer.

use std::time::Duration;

use leptos::prelude::*;
use log::warn;

use super::buttons::{ButtonVariant, CleanButton};
use super::card_stack::ProjectStack;
use super::reveal::{Reveal, RevealFrom, stagger};
use super::theme_toggle::ThemeToggle;
use crate::content::{
	Article, ClockConfig, Contact, Experience, FocusArea, Profile, Project, SkillCategory,
};
use crate::motion::clock::format_clock;

/// In-page anchors listed in the header.
pub const NAV_ITEMS: [&str; 3] = ["Work", "About", "Contact"];

/// `#work` for "Work".
pub fn anchor(item: &str) -> String {
	format!("#{}", item.to_lowercase())
}

#[component]
pub fn Header(name: String, clock: ClockConfig) -> impl IntoView {
	let offset = clock.utc_offset_minutes;
	let now = move || format_clock(js_sys::Date::now(), offset);
	let time = RwSignal::new(now());

	match set_interval_with_handle(move || time.set(now()), Duration::from_secs(1)) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(e) => warn!("folio: clock interval unavailable: {:?}", e),
	}

	view! {
		<header class="site-header">
			<div class="site-header__inner">
				<div class="site-header__name">{name}</div>
				<nav class="site-header__nav">
					{NAV_ITEMS
						.iter()
						.map(|item| view! { <a href=anchor(item) data-magnetic="">{*item}</a> })
						.collect_view()}
				</nav>
				<div class="site-header__aside">
					<ThemeToggle />
					<span class="site-header__clock">{clock.label} " " {move || time.get()}</span>
				</div>
			</div>
		</header>
	}
}

#[component]
pub fn Hero(profile: Profile, focus_areas: Vec<FocusArea>) -> impl IntoView {
	let Profile {
		availability,
		headline_lead,
		headline_highlight,
		headline_tail,
		tagline,
		video_caption,
		..
	} = profile;
	let availability = (!availability.is_empty()).then(|| {
		view! {
			<div class="badge badge--available">
				<span class="pulse" />
				{availability}
			</div>
		}
	});

	view! {
		<section class="hero">
			<div class="hero__text">
				<Reveal from=RevealFrom::Left delay=0.2>
					{availability}
					<h1 class="hero__headline">
						{headline_lead} " " <span class="highlight">{headline_highlight}</span> " "
						{headline_tail}
					</h1>
					<p class="hero__tagline">{tagline}</p>
				</Reveal>
				<Reveal delay=0.6 class="hero__actions">
					<CleanButton variant=ButtonVariant::Accent href="#work">
						"My Projects"
					</CleanButton>
					<CleanButton variant=ButtonVariant::Outline href="#contact">
						"Let's Connect"
					</CleanButton>
				</Reveal>
				<div class="hero__focus">
					{focus_areas
						.into_iter()
						.enumerate()
						.map(|(i, area)| {
							view! {
								<Reveal from=RevealFrom::Scale delay=stagger(1.0, 0.1, i) class="chip">
									<span class="chip__icon">{area.icon}</span>
									<span>{area.name}</span>
								</Reveal>
							}
						})
						.collect_view()}
				</div>
			</div>
			<Reveal delay=0.7 class="hero__media">
				<h3 class="hero__caption">{video_caption}</h3>
				<Reveal from=RevealFrom::Scale delay=0.9 class="video-placeholder">
					<div class="video-placeholder__play">"▶"</div>
					<p>"Introduction Video"</p>
				</Reveal>
			</Reveal>
		</section>
	}
}

#[component]
pub fn Work(projects: Vec<Project>) -> impl IntoView {
	view! {
		<section id="work" class="section work">
			<Reveal class="section__heading">
				<h2>"Selected Work"</h2>
				<p>
					"A collection of projects that show how I approach complex design and development problems."
				</p>
				<div class="stack-legend">
					<div class="stack-legend__bars">
						<span />
						<span />
						<span />
					</div>
					<span>"Call Stack (LIFO)"</span>
				</div>
			</Reveal>
			<ProjectStack projects=projects />
		</section>
	}
}

#[component]
pub fn Skills(categories: Vec<SkillCategory>) -> impl IntoView {
	view! {
		<section class="section skills">
			<Reveal>
				<h2 class="section__title">"Tech Stack & Expertise"</h2>
			</Reveal>
			<div class="skills__grid">
				{categories
					.into_iter()
					.enumerate()
					.map(|(i, category)| {
						view! {
							<Reveal from=RevealFrom::Scale delay=stagger(0.0, 0.08, i) class="skill-card">
								<div class="skill-card__header">
									<span class="skill-card__icon">{category.icon}</span>
									<h3>{category.title}</h3>
								</div>
								<ul class="skill-card__list">
									{category
										.skills
										.into_iter()
										.map(|skill| view! { <li>{skill}</li> })
										.collect_view()}
								</ul>
							</Reveal>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}

#[component]
pub fn About(paragraphs: Vec<String>, experience: Vec<Experience>) -> impl IntoView {
	view! {
		<section id="about" class="section about">
			<div class="about__bio">
				<Reveal>
					<h2 class="section__title">"About Me"</h2>
				</Reveal>
				<Reveal delay=0.2>
					{paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
				</Reveal>
			</div>
			<div class="about__journey">
				<Reveal>
					<h3>"My Journey"</h3>
				</Reveal>
				<ol class="timeline">
					{experience
						.into_iter()
						.enumerate()
						.map(|(i, exp)| {
							view! {
								<li class="timeline__entry">
									<Reveal delay=stagger(0.0, 0.1, i)>
										<div class="timeline__header">
											<h4>{exp.role}</h4>
											<span class="timeline__period">{exp.period}</span>
										</div>
										<p class="timeline__company">{exp.company}</p>
										<p class="timeline__description">{exp.description}</p>
									</Reveal>
								</li>
							}
						})
						.collect_view()}
				</ol>
			</div>
		</section>
	}
}

/// Article cards. Renders nothing when there are no articles.
#[component]
pub fn Writing(articles: Vec<Article>) -> impl IntoView {
	if articles.is_empty() {
		return ().into_any();
	}
	view! {
		<section id="writing" class="section writing">
			<Reveal>
				<h2 class="section__title">"Writing"</h2>
			</Reveal>
			<div class="writing__grid">
				{articles
					.into_iter()
					.enumerate()
					.map(|(index, article)| view! { <ArticleCard article=article index=index /> })
					.collect_view()}
			</div>
		</section>
	}
	.into_any()
}

#[component]
fn ArticleCard(article: Article, index: usize) -> impl IntoView {
	view! {
		<Reveal delay=stagger(0.0, 0.1, index)>
			<article class="article-card">
				<div class="article-card__meta">
					<span>{article.date}</span>
					<span>{article.read_time}</span>
				</div>
				<h3>{article.title}</h3>
				<p class="article-card__excerpt">{article.excerpt}</p>
				<div class="article-card__footer">
					<div class="tags">
						{article
							.tags
							.into_iter()
							.map(|tag| view! { <span class="badge badge--outline">{tag}</span> })
							.collect_view()}
					</div>
					<CleanButton variant=ButtonVariant::Ghost href=article.link external=true>
						"Read More"
						<span class="arrow">"↗"</span>
					</CleanButton>
				</div>
			</article>
		</Reveal>
	}
}

#[component]
pub fn ContactSection(contact: Contact) -> impl IntoView {
	let mailto = format!("mailto:{}", contact.email);
	view! {
		<section id="contact" class="section contact">
			<Reveal>
				<h2 class="section__title">{contact.heading}</h2>
			</Reveal>
			<Reveal delay=0.2>
				<p class="contact__blurb">{contact.blurb}</p>
			</Reveal>
			<Reveal delay=0.4 class="contact__cta">
				<CleanButton variant=ButtonVariant::Accent href=mailto>
					"Get In Touch"
				</CleanButton>
			</Reveal>
			<Reveal delay=0.6 class="contact__links">
				{contact
					.links
					.into_iter()
					.map(|link| {
						view! {
							<CleanButton
								variant=ButtonVariant::Ghost
								href=link.href
								external=true
								label=link.label
							>
								{link.icon}
							</CleanButton>
						}
					})
					.collect_view()}
			</Reveal>
		</section>
	}
}

/// Copyright line with the current year.
pub fn copyright(year: u32, name: &str) -> String {
	format!("© {year} {name}. All rights reserved.")
}

#[component]
pub fn Footer(name: String, credit: String) -> impl IntoView {
	let year = js_sys::Date::new_0().get_full_year();
	view! {
		<footer class="site-footer">
			<p>{copyright(year, &name)}</p>
			<p>{credit}</p>
		</footer>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_nav_anchors() {
		let anchors: Vec<String> = NAV_ITEMS.iter().map(|i| anchor(i)).collect();
		assert_eq!(anchors, ["#work", "#about", "#contact"]);
	}

	#[test]
	fn test_copyright() {
		assert_eq!(copyright(2025, "Alex Morgan"), "© 2025 Alex Morgan. All rights reserved.");
	}
}
