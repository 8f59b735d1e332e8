use serde::{Deserialize, Serialize};
use std::fmt;

pub mod carousel;
pub mod content;
pub mod filter;
pub mod forms;
pub mod lenient;

pub use carousel::{Carousel, SwipeDirection, SwipeTracker, SWIPE_THRESHOLD};
pub use content::{
    AboutContent, Categorized, ContentItem, Document, Experience, GithubRepo, HeroContent,
    Project, Skill, SkillKind,
};
pub use filter::{filter_by_category, CategorySelection, CategoryView};

/// Category labels a project can be saved under
pub const PROJECT_CATEGORIES: [&str; 3] = ["photography", "graphic design", "development"];

/// Type labels for experience entries and skills
pub const EXPERIENCE_TYPES: [&str; 3] = ["development", "creative", "impact"];

pub const MAX_TITLE_LEN: usize = 200;

/// Body of a project create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProjectRequest {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    /// Full gallery in display order. On update, `None` keeps the stored gallery.
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

impl SaveProjectRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_title(&self.title, "Project title")?;
        validate_label(&self.category, &PROJECT_CATEGORIES, "Project category")
    }
}

/// Body of an experience create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveExperienceRequest {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub place: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
}

impl SaveExperienceRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_title(&self.title, "Experience title")?;
        validate_label(&self.kind, &EXPERIENCE_TYPES, "Experience type")
    }

    /// Trimmed, non-empty, first occurrence of each skill.
    pub fn normalized_skills(&self) -> Vec<String> {
        let mut skills: Vec<String> = Vec::with_capacity(self.skills.len());
        for skill in &self.skills {
            let skill = skill.trim();
            if !skill.is_empty() && !skills.iter().any(|s| s == skill) {
                skills.push(skill.to_string());
            }
        }
        skills
    }
}

/// Body of a skill create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveSkillRequest {
    pub name: String,
    #[serde(default = "lenient::default_score", deserialize_with = "lenient::score")]
    pub score: u8,
    #[serde(rename = "type")]
    pub kind: String,
}

impl SaveSkillRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_title(&self.name, "Skill name")?;
        validate_label(&self.kind, &EXPERIENCE_TYPES, "Skill type")
    }
}

fn validate_title(value: &str, what: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} cannot be empty", what));
    }
    if value.chars().count() > MAX_TITLE_LEN {
        return Err(format!("{} cannot exceed {} characters", what, MAX_TITLE_LEN));
    }
    Ok(())
}

fn validate_label(value: &str, allowed: &[&str], what: &str) -> Result<(), String> {
    if allowed.iter().any(|a| a.eq_ignore_ascii_case(value.trim())) {
        Ok(())
    } else {
        Err(format!("{} must be one of: {}", what, allowed.join(", ")))
    }
}

/// Storage folder an uploaded image belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFolder {
    Hero,
    About,
    Projects,
}

impl ImageFolder {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFolder::Hero => "hero",
            ImageFolder::About => "about",
            ImageFolder::Projects => "projects",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hero" => Some(ImageFolder::Hero),
            "about" => Some(ImageFolder::About),
            "projects" => Some(ImageFolder::Projects),
            _ => None,
        }
    }

    /// Hero uploads overwrite by name; the others keep every upload.
    pub fn timestamped(&self) -> bool {
        !matches!(self, ImageFolder::Hero)
    }
}

impl fmt::Display for ImageFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// RFC 3339
    pub expires_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub authenticated: bool,
}

/// Public site settings the frontend needs at runtime
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteInfo {
    pub github_user: Option<String>,
    pub contact_email: String,
}

/// Log line forwarded from the browser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_request_validation() {
        let mut req = SaveProjectRequest {
            title: "Night walk".to_string(),
            category: "Photography".to_string(),
            description: String::new(),
            date: "2024-05-01".to_string(),
            images: None,
        };
        assert!(req.validate().is_ok());

        req.category = "sculpture".to_string();
        assert!(req.validate().unwrap_err().contains("Project category"));

        req.category = "photography".to_string();
        req.title = "   ".to_string();
        assert_eq!(req.validate().unwrap_err(), "Project title cannot be empty");

        req.title = "x".repeat(MAX_TITLE_LEN + 1);
        assert!(req.validate().unwrap_err().contains("cannot exceed"));
    }

    #[test]
    fn test_experience_request_accepts_string_skills() {
        let req: SaveExperienceRequest = serde_json::from_value(json!({
            "title": "Designer",
            "type": "creative",
            "skills": "Figma"
        }))
        .unwrap();
        assert_eq!(req.skills, vec!["Figma"]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_normalized_skills() {
        let req = SaveExperienceRequest {
            title: "Dev".into(),
            kind: "development".into(),
            company: String::new(),
            place: String::new(),
            period: String::new(),
            description: String::new(),
            skills: vec![" Rust ".into(), "".into(), "Rust".into(), "SQL".into()],
        };
        assert_eq!(req.normalized_skills(), vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_skill_request_clamps_score() {
        let req: SaveSkillRequest =
            serde_json::from_value(json!({"name": "Rust", "score": 250, "type": "development"})).unwrap();
        assert_eq!(req.score, 100);
        let req: SaveSkillRequest = serde_json::from_value(json!({"name": "Rust", "type": "impact"})).unwrap();
        assert_eq!(req.score, 50);
    }

    #[test]
    fn test_image_folder() {
        assert_eq!(ImageFolder::parse("projects"), Some(ImageFolder::Projects));
        assert_eq!(ImageFolder::parse("../etc"), None);
        assert!(!ImageFolder::Hero.timestamped());
        assert!(ImageFolder::About.timestamped());
        assert_eq!(ImageFolder::Projects.to_string(), "projects");
    }
}
