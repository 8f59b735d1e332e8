//! Editable form state behind the admin dashboard.

use crate::content::{Experience, Project, Skill};
use crate::lenient::DEFAULT_SCORE;
use crate::{SaveExperienceRequest, SaveProjectRequest, SaveSkillRequest};

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectForm {
    pub title: String,
    pub category: String,
    pub description: String,
    pub date: String,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: "photography".to_string(),
            description: String::new(),
            date: String::new(),
        }
    }
}

impl ProjectForm {
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            category: project
                .category
                .clone()
                .map(|c| c.to_lowercase())
                .unwrap_or_else(|| Self::default().category),
            description: project.description.clone(),
            date: project.date.clone(),
        }
    }

    pub fn to_request(&self, images: Vec<String>) -> SaveProjectRequest {
        SaveProjectRequest {
            title: self.title.trim().to_string(),
            category: self.category.clone(),
            description: self.description.clone(),
            date: self.date.clone(),
            images: Some(images),
        }
    }

    /// Run before any of the selected files are uploaded.
    pub fn validate(&self) -> Result<(), String> {
        self.to_request(Vec::new()).validate()
    }
}

/// Gallery to save after an upload round.
///
/// Edits append new uploads to what the project already had. A new project
/// gets exactly the uploaded images.
pub fn merge_gallery(existing: &[String], uploaded: Vec<String>, editing: bool) -> Vec<String> {
    if !editing {
        return uploaded;
    }
    let mut gallery = existing.to_vec();
    gallery.extend(uploaded);
    gallery
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceForm {
    pub title: String,
    pub kind: String,
    pub company: String,
    pub place: String,
    pub period: String,
    pub description: String,
    pub skills: Vec<String>,
    /// Text typed into the skill tag box, not yet committed
    pub skill_input: String,
}

impl Default for ExperienceForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            kind: "development".to_string(),
            company: String::new(),
            place: String::new(),
            period: String::new(),
            description: String::new(),
            skills: Vec::new(),
            skill_input: String::new(),
        }
    }
}

impl ExperienceForm {
    pub fn from_experience(experience: &Experience) -> Self {
        Self {
            title: experience.title.clone(),
            kind: experience
                .kind
                .clone()
                .map(|k| k.to_lowercase())
                .unwrap_or_else(|| Self::default().kind),
            company: experience.company.clone(),
            place: experience.place.clone(),
            period: experience.period.clone(),
            description: experience.description.clone(),
            skills: experience.skills.clone(),
            skill_input: String::new(),
        }
    }

    /// Commit the tag box. Blank input is ignored; a duplicate clears the box without adding.
    pub fn commit_skill_input(&mut self) -> bool {
        let skill = self.skill_input.trim().to_string();
        if skill.is_empty() {
            return false;
        }
        self.skill_input.clear();
        if self.skills.contains(&skill) {
            return false;
        }
        self.skills.push(skill);
        true
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|s| s != skill);
    }

    pub fn to_request(&self) -> SaveExperienceRequest {
        SaveExperienceRequest {
            title: self.title.trim().to_string(),
            kind: self.kind.clone(),
            company: self.company.clone(),
            place: self.place.clone(),
            period: self.period.clone(),
            description: self.description.clone(),
            skills: self.skills.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.to_request().validate()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillForm {
    pub name: String,
    pub score: u8,
    pub kind: String,
}

impl Default for SkillForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            score: DEFAULT_SCORE,
            kind: "development".to_string(),
        }
    }
}

impl SkillForm {
    pub fn from_skill(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            score: skill.score,
            kind: skill
                .kind
                .clone()
                .map(|k| k.to_lowercase())
                .unwrap_or_else(|| Self::default().kind),
        }
    }

    /// Slider input; anything unparsable leaves the score alone.
    pub fn set_score(&mut self, raw: &str) {
        if let Ok(value) = raw.trim().parse::<f64>() {
            self.score = crate::lenient::clamp_score(value);
        }
    }

    pub fn to_request(&self) -> SaveSkillRequest {
        SaveSkillRequest {
            name: self.name.trim().to_string(),
            score: self.score,
            kind: self.kind.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.to_request().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_gallery_for_new_project() {
        let merged = merge_gallery(&["old.jpg".to_string()], vec!["new.jpg".to_string()], false);
        assert_eq!(merged, vec!["new.jpg"]);
        assert!(merge_gallery(&[], Vec::new(), false).is_empty());
    }

    #[test]
    fn test_merge_gallery_appends_on_edit() {
        let existing = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        assert_eq!(merge_gallery(&existing, Vec::new(), true), existing);
        assert_eq!(
            merge_gallery(&existing, vec!["c.jpg".to_string()], true),
            vec!["a.jpg", "b.jpg", "c.jpg"]
        );
    }

    #[test]
    fn test_skill_tags() {
        let mut form = ExperienceForm::default();
        form.skill_input = "  Rust ".to_string();
        assert!(form.commit_skill_input());
        assert_eq!(form.skills, vec!["Rust"]);
        assert_eq!(form.skill_input, "");

        form.skill_input = "Rust".to_string();
        assert!(!form.commit_skill_input());
        assert_eq!(form.skills.len(), 1);
        assert_eq!(form.skill_input, "");

        form.skill_input = "   ".to_string();
        assert!(!form.commit_skill_input());
        assert_eq!(form.skill_input, "   ");

        form.skill_input = "SQL".to_string();
        form.commit_skill_input();
        form.remove_skill("Rust");
        assert_eq!(form.skills, vec!["SQL"]);
    }

    #[test]
    fn test_forms_from_records_default_missing_labels() {
        let project = Project {
            title: "Untitled".into(),
            ..Default::default()
        };
        assert_eq!(ProjectForm::from_project(&project).category, "photography");

        let experience = Experience {
            kind: Some("Creative".into()),
            ..Default::default()
        };
        assert_eq!(ExperienceForm::from_experience(&experience).kind, "creative");

        let skill = Skill {
            id: "s".into(),
            name: "Rust".into(),
            score: 90,
            kind: None,
        };
        let form = SkillForm::from_skill(&skill);
        assert_eq!(form.kind, "development");
        assert_eq!(form.score, 90);
    }

    #[test]
    fn test_requests_validate() {
        let form = ProjectForm {
            title: " Poster ".into(),
            category: "graphic design".into(),
            ..Default::default()
        };
        let req = form.to_request(vec!["x.png".into()]);
        assert_eq!(req.title, "Poster");
        assert_eq!(req.images.as_deref(), Some(&["x.png".to_string()][..]));
        assert!(req.validate().is_ok());

        assert!(form.validate().is_ok());
        assert!(ProjectForm::default().validate().is_err());
        assert!(SkillForm::default().validate().is_err());
        assert!(ExperienceForm::default().validate().is_err());
    }

    #[test]
    fn test_set_score() {
        let mut form = SkillForm::default();
        form.set_score("75");
        assert_eq!(form.score, 75);
        form.set_score("abc");
        assert_eq!(form.score, 75);
        form.set_score("130");
        assert_eq!(form.score, 100);
    }
}
