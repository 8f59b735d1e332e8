//! Typed records for everything the site displays.
//!
//! The store keeps loose JSON documents; these types are the only shape the
//! rest of the workspace sees. Every field goes through a [`crate::lenient`]
//! helper so a malformed document still produces a record.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lenient;

/// Anything that carries a category/type label for list filtering.
pub trait Categorized {
    fn category(&self) -> Option<&str>;
}

impl<T: Categorized + ?Sized> Categorized for &T {
    fn category(&self) -> Option<&str> {
        (**self).category()
    }
}

/// A record stored as one document in a named collection.
///
/// The document id is the storage key and is not repeated inside the body.
pub trait Document: Serialize + DeserializeOwned + Clone {
    const COLLECTION: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Build a record from a stored body. Fails only when the body is not a JSON object.
    fn from_document(id: &str, body: Value) -> Result<Self, String> {
        let Value::Object(mut fields) = body else {
            return Err(format!("document {}/{} is not an object", Self::COLLECTION, id));
        };
        fields.insert("id".to_string(), Value::String(id.to_string()));
        serde_json::from_value(Value::Object(fields))
            .map_err(|e| format!("document {}/{} is malformed: {}", Self::COLLECTION, id, e))
    }

    /// The stored body: the serialized record without its id.
    fn to_document(&self) -> Result<Value, String> {
        let mut value = serde_json::to_value(self).map_err(|e| e.to_string())?;
        if let Value::Object(fields) = &mut value {
            fields.remove("id");
        }
        Ok(value)
    }
}

/// A portfolio project with its image gallery.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub date: String,
    /// Cover image, always the first gallery entry when the gallery is non-empty
    #[serde(default, deserialize_with = "lenient::string")]
    pub image_url: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub images: Vec<String>,
}

impl Project {
    /// The tile image: the explicit cover, else the first gallery image.
    pub fn cover_image(&self) -> Option<&str> {
        if !self.image_url.is_empty() {
            Some(self.image_url.as_str())
        } else {
            self.images.first().map(String::as_str)
        }
    }

    /// Gallery shown in the modal. Older documents only have a cover.
    pub fn gallery(&self) -> Vec<String> {
        if !self.images.is_empty() {
            self.images.clone()
        } else if !self.image_url.is_empty() {
            vec![self.image_url.clone()]
        } else {
            Vec::new()
        }
    }
}

impl Categorized for Project {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl Document for Project {
    const COLLECTION: &'static str = "projects";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// A work-experience entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::optional_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub place: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub period: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
}

impl Experience {
    /// Up to `limit` skills for a card, plus how many were left out.
    pub fn skill_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.skills.len().min(limit);
        (&self.skills[..shown], self.skills.len() - shown)
    }

    pub fn badge_class(&self) -> &'static str {
        badge_class(self.kind.as_deref())
    }
}

impl Categorized for Experience {
    fn category(&self) -> Option<&str> {
        self.kind.as_deref()
    }
}

impl Document for Experience {
    const COLLECTION: &'static str = "experience";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Badge colour class for an experience type. Unknown and missing types use the development style.
pub fn badge_class(kind: Option<&str>) -> &'static str {
    match kind.map(|k| k.trim().to_lowercase()).as_deref() {
        Some("creative") => "badge badge-creative",
        Some("impact") | Some("leadership") => "badge badge-impact",
        _ => "badge badge-development",
    }
}

/// A rated skill shown as a progress bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default = "lenient::default_score", deserialize_with = "lenient::score")]
    pub score: u8,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::optional_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
}

impl Document for Skill {
    const COLLECTION: &'static str = "skills";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Column of the skills grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillKind {
    Development,
    Creative,
    Impact,
}

impl SkillKind {
    pub const ALL: [SkillKind; 3] = [SkillKind::Development, SkillKind::Creative, SkillKind::Impact];

    /// Column for a stored label. Untyped skills count as development; unknown labels have no column.
    pub fn from_label(label: Option<&str>) -> Option<Self> {
        match label.map(|l| l.trim().to_lowercase()).as_deref() {
            None | Some("") | Some("development") => Some(SkillKind::Development),
            Some("creative") => Some(SkillKind::Creative),
            Some("impact") => Some(SkillKind::Impact),
            Some(_) => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SkillKind::Development => "Development",
            SkillKind::Creative => "Creative",
            SkillKind::Impact => "Impact",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SkillKind::Development => "skill-development",
            SkillKind::Creative => "skill-creative",
            SkillKind::Impact => "skill-impact",
        }
    }
}

/// Skills of one column, in the order given.
pub fn skills_of_kind(skills: &[Skill], kind: SkillKind) -> Vec<&Skill> {
    skills
        .iter()
        .filter(|s| SkillKind::from_label(s.kind.as_deref()) == Some(kind))
        .collect()
}

/// Home page hero block, stored at `content/hero`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub image_url: String,
}

impl HeroContent {
    pub const KEY: &'static str = "hero";
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            name: String::new(),
            title: "Full Stack Developer".to_string(),
            description: "Welcome to my portfolio.".to_string(),
            image_url: String::new(),
        }
    }
}

/// About page copy, stored at `content/about`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub image_url: String,
}

impl AboutContent {
    pub const KEY: &'static str = "about";

    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "About Me"
        } else {
            &self.title
        }
    }

    pub fn display_description(&self) -> &str {
        if self.description.trim().is_empty() {
            "No description added yet."
        } else {
            &self.description
        }
    }
}

/// Collection holding the single-document site content (hero, about).
pub const CONTENT_COLLECTION: &str = "content";

/// Either kind of list entry that can be opened in a detail modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentItem {
    Project(Project),
    Experience(Experience),
}

impl ContentItem {
    pub fn id(&self) -> &str {
        match self {
            ContentItem::Project(p) => &p.id,
            ContentItem::Experience(e) => &e.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ContentItem::Project(p) => &p.title,
            ContentItem::Experience(e) => &e.title,
        }
    }

    /// Gallery images; experience entries have none.
    pub fn images(&self) -> Vec<String> {
        match self {
            ContentItem::Project(p) => p.gallery(),
            ContentItem::Experience(_) => Vec::new(),
        }
    }
}

impl Categorized for ContentItem {
    fn category(&self) -> Option<&str> {
        match self {
            ContentItem::Project(p) => p.category(),
            ContentItem::Experience(e) => e.category(),
        }
    }
}

/// Public repository as returned by the GitHub REST API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubRepo {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
}

/// Repositories shown on the home page development tab
pub const LATEST_REPO_COUNT: usize = 4;

/// The `count` most recently pushed repositories, newest first. Repos never pushed sort last.
pub fn latest_repos(mut repos: Vec<GithubRepo>, count: usize) -> Vec<GithubRepo> {
    repos.sort_by(|a, b| b.pushed_at.cmp(&a.pushed_at));
    repos.truncate(count);
    repos
}
