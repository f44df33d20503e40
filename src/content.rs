//! Site copy and lists, deserialized from JSON.
//!
//! A default document is compiled in; the host page may replace it with a
//! `<script type="application/json" id="site-content">` element.

use serde::Deserialize;

use crate::components::particle_field::FieldConfig;

const BUILTIN: &str = include_str!("../content/site.json");

/// Everything the page renders.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteContent {
	pub profile: Profile,
	#[serde(default)]
	pub clock: ClockConfig,
	#[serde(default)]
	pub focus_areas: Vec<FocusArea>,
	#[serde(default)]
	pub projects: Vec<Project>,
	#[serde(default)]
	pub skills: Vec<SkillCategory>,
	/// About section paragraphs.
	#[serde(default)]
	pub about: Vec<String>,
	#[serde(default)]
	pub experience: Vec<Experience>,
	#[serde(default)]
	pub articles: Vec<Article>,
	#[serde(default)]
	pub contact: Contact,
	/// Overrides for the particle background.
	#[serde(default)]
	pub background: FieldConfig,
}

impl SiteContent {
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// The compiled-in document.
	pub fn builtin() -> Self {
		// Covered by test_builtin_content_parses.
		Self::from_json(BUILTIN).unwrap_or_else(|e| {
			log::error!("folio: built-in content is invalid: {}", e);
			Self::empty()
		})
	}

	fn empty() -> Self {
		Self {
			profile: Profile::default(),
			clock: ClockConfig::default(),
			focus_areas: Vec::new(),
			projects: Vec::new(),
			skills: Vec::new(),
			about: Vec::new(),
			experience: Vec::new(),
			articles: Vec::new(),
			contact: Contact::default(),
			background: FieldConfig::default(),
		}
	}
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Profile {
	pub name: String,
	/// Short status shown in the hero badge, hidden when empty.
	pub availability: String,
	/// Headline split around the highlighted phrase.
	pub headline_lead: String,
	pub headline_highlight: String,
	pub headline_tail: String,
	pub tagline: String,
	/// Caption above the intro video placeholder.
	pub video_caption: String,
	pub footer_credit: String,
}

/// Header clock: a fixed UTC offset and its label.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
	pub label: String,
	pub utc_offset_minutes: i32,
}

impl Default for ClockConfig {
	fn default() -> Self {
		Self {
			label: "IST".to_string(),
			utc_offset_minutes: 330,
		}
	}
}

/// Hero chip.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FocusArea {
	pub icon: String,
	pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Project {
	pub title: String,
	/// Free-form period, e.g. "Jan 2019 – Jun 2019".
	pub year: String,
	pub description: String,
	#[serde(default)]
	pub image: Option<String>,
	#[serde(default)]
	pub tags: Vec<String>,
	/// Live demo; empty strings count as absent.
	#[serde(default)]
	pub demo: Option<String>,
	#[serde(default)]
	pub source: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SkillCategory {
	pub icon: String,
	pub title: String,
	pub skills: Vec<String>,
}

/// One entry of the journey timeline.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Experience {
	pub company: String,
	pub role: String,
	pub period: String,
	pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Article {
	pub title: String,
	pub excerpt: String,
	pub date: String,
	pub read_time: String,
	#[serde(default)]
	pub tags: Vec<String>,
	pub link: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Contact {
	pub heading: String,
	pub blurb: String,
	/// Target of the primary call to action.
	pub email: String,
	pub links: Vec<ContactLink>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactLink {
	pub label: String,
	pub href: String,
	/// Short glyph rendered inside the icon button.
	pub icon: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builtin_content_parses() {
		let content = SiteContent::from_json(BUILTIN).unwrap();
		assert!(!content.profile.name.is_empty());
		assert!(!content.projects.is_empty());
		assert!(!content.skills.is_empty());
		assert_eq!(content.clock.utc_offset_minutes, 330);
		assert_eq!(content.background, FieldConfig::default());
	}

	#[test]
	fn test_minimal_document_fills_defaults() {
		let content = SiteContent::from_json(r#"{ "profile": { "name": "A. Person" } }"#).unwrap();
		assert_eq!(content.profile.name, "A. Person");
		assert_eq!(content.clock, ClockConfig::default());
		assert!(content.projects.is_empty());
		assert!(content.contact.links.is_empty());
	}

	#[test]
	fn test_background_overrides() {
		let content = SiteContent::from_json(
			r#"{ "profile": {}, "background": { "pool_size": 40, "friction": 0.95 } }"#,
		)
		.unwrap();
		assert_eq!(content.background.pool_size, 40);
		assert_eq!(content.background.friction, 0.95);
		assert_eq!(content.background.restitution, FieldConfig::default().restitution);
	}

	#[test]
	fn test_project_optional_fields() {
		let project: Project = serde_json::from_str(
			r#"{ "title": "T", "year": "2024", "description": "D", "demo": "" }"#,
		)
		.unwrap();
		assert_eq!(project.demo.as_deref(), Some(""));
		assert!(project.image.is_none());
		assert!(project.tags.is_empty());
	}

	#[test]
	fn test_malformed_json_is_an_error() {
		assert!(SiteContent::from_json("{ not json").is_err());
		assert!(SiteContent::from_json("{}").is_err());
	}
}
