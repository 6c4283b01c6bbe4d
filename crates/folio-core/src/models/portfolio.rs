//! Portfolio document model

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for list items inside a portfolio document.
///
/// Freshly created items get a UUID v7. Stored documents may carry older
/// identifiers in other formats, so the value is kept as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new unique item ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Professional category of a portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    Photography,
    #[default]
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Video Editing")]
    VideoEditing,
    Cooking,
    Painting,
    Writing,
    Design,
}

impl Category {
    pub const ALL: [Self; 7] = [
        Self::Photography,
        Self::WebDevelopment,
        Self::VideoEditing,
        Self::Cooking,
        Self::Painting,
        Self::Writing,
        Self::Design,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Photography => "Photography",
            Self::WebDevelopment => "Web Development",
            Self::VideoEditing => "Video Editing",
            Self::Cooking => "Cooking",
            Self::Painting => "Painting",
            Self::Writing => "Writing",
            Self::Design => "Design",
        }
    }

    /// One-line pitch shown on the category picker
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Photography => "Showcase your visual storytelling through stunning galleries.",
            Self::WebDevelopment => {
                "Display code projects, technical skills, and software solutions."
            }
            Self::VideoEditing => "Highlight showreels, motion graphics, and cinematic works.",
            Self::Cooking => "Share recipes, culinary adventures, and professional plating.",
            Self::Painting => {
                "An online gallery for your fine art, sketches, and digital paintings."
            }
            Self::Writing => "A clean layout for articles, copy, scripts, and literary works.",
            Self::Design => "Portfolio for UI/UX, graphics, and brand identity specialists.",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// A named skill with a proficiency level between 0 and 100
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(deserialize_with = "deserialize_level")]
    pub level: u8,
}

/// Stored and shared documents may carry any non-negative level; anything
/// past the maximum is clamped.
fn deserialize_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let level = u64::deserialize(deserializer)?.min(u64::from(Skill::MAX_LEVEL));
    Ok(u8::try_from(level).unwrap_or(Skill::MAX_LEVEL))
}

impl Skill {
    pub const MAX_LEVEL: u8 = 100;

    #[must_use]
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level: level.min(Self::MAX_LEVEL),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    /// Link to the project site or media
    pub link: String,
    pub tags: Vec<String>,
}

impl Project {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            title: title.into(),
            description: String::new(),
            link: String::new(),
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualification {
    pub id: ItemId,
    pub degree: String,
    pub institution: String,
    pub year: String,
}

impl Qualification {
    #[must_use]
    pub fn new(degree: impl Into<String>, institution: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            degree: degree.into(),
            institution: institution.into(),
            year: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub id: ItemId,
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Certification {
    #[must_use]
    pub fn new(name: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            issuer: issuer.into(),
            date: String::new(),
            link: None,
        }
    }
}

/// Social networks a portfolio may link to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    Github,
    Linkedin,
    Instagram,
    Twitter,
    Portfolio,
}

impl SocialNetwork {
    pub const ALL: [Self; 5] = [
        Self::Github,
        Self::Linkedin,
        Self::Instagram,
        Self::Twitter,
        Self::Portfolio,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Portfolio => "portfolio",
        }
    }
}

/// The portfolio document
///
/// Field names on the wire match the documents already stored remotely and
/// embedded in share links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub tagline: String,
    /// Free-text bio
    #[serde(default, rename = "about")]
    pub bio: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub qualifications: Vec<Qualification>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub socials: BTreeMap<SocialNetwork, String>,
}

impl PortfolioData {
    /// The empty document used for fresh sessions and after sign-out
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn social(&self, network: SocialNetwork) -> Option<&str> {
        self.socials.get(&network).map(String::as_str)
    }
}
