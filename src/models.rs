//! Site Models
//!
//! Typed records for the configuration document, the blog index and blog posts.
//! Optional lists default to empty so an absent fragment renders as nothing.
//! An explicit `null` is treated the same as a missing key.

use serde::{Deserialize, Deserializer, Serialize};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Root configuration document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub navigation: Vec<NavItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub home: HomeConfig,
    #[serde(default, deserialize_with = "null_as_default")]
    pub about: AboutConfig,
    #[serde(default, deserialize_with = "null_as_default")]
    pub portfolio: PortfolioConfig,
    /// Required only when navigation names a `contact` pane
    #[serde(default)]
    pub contact: Option<ContactConfig>,
}

/// One navigation entry; `id` names the section anchor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
}

// ========================
// Home
// ========================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub typing_text: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
}

// ========================
// About
// ========================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub intro: Intro,
    #[serde(default, deserialize_with = "null_as_default")]
    pub personal_info: Vec<InfoItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<Skill>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<TimelineEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: Vec<TimelineEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cv_link: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Intro {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub highlight: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoItem {
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

/// Skill with a percentage level (0..=100, checked at load)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u32,
}

/// Education or experience timeline row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

// ========================
// Portfolio
// ========================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub filters: Vec<FilterButton>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<PortfolioItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterButton {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alt: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
}

// ========================
// Contact
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub form_action: String,
    pub form_fields: FormFields,
}

/// The four contact form inputs; each one must be present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormFields {
    pub name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    #[serde(default, deserialize_with = "null_as_default")]
    pub placeholder: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required: bool,
}

// ========================
// Blog
// ========================

/// `data/blogs.json` document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlogIndexDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub blogs: Vec<BlogEntry>,
}

/// Blog summary shown in the list; `file` is fetched verbatim on open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogEntry {
    pub title: String,
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    pub file: String,
}

/// Full blog post; `content` is pre-formatted markup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}
