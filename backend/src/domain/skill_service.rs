use shared::{SaveSkillRequest, Skill};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};
use crate::storage::{DocumentStorage, Repository};

/// Service for managing rated skills
#[derive(Clone)]
pub struct SkillService {
    repository: Repository<Skill>,
}

impl SkillService {
    pub fn new(storage: Arc<dyn DocumentStorage>) -> Self {
        Self {
            repository: Repository::new(storage),
        }
    }

    /// All skills, highest score first
    pub async fn list_skills(&self) -> DomainResult<Vec<Skill>> {
        let mut skills = self.repository.list().await?;
        skills.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(skills)
    }

    pub async fn create_skill(&self, request: SaveSkillRequest) -> DomainResult<Skill> {
        info!("Creating skill: name={}, score={}", request.name, request.score);
        request.validate().map_err(DomainError::Validation)?;

        let skill = Self::build(Uuid::new_v4().simple().to_string(), request);
        self.repository.save(&skill).await?;
        Ok(skill)
    }

    pub async fn update_skill(&self, id: &str, request: SaveSkillRequest) -> DomainResult<Skill> {
        info!("Updating skill: {}", id);
        request.validate().map_err(DomainError::Validation)?;

        if self.repository.get(id).await?.is_none() {
            warn!("Skill not found: {}", id);
            return Err(DomainError::not_found("Skill", id));
        }

        let skill = Self::build(id.to_string(), request);
        self.repository.save(&skill).await?;
        Ok(skill)
    }

    pub async fn delete_skill(&self, id: &str) -> DomainResult<()> {
        info!("Deleting skill: {}", id);
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found("Skill", id));
        }
        Ok(())
    }

    fn build(id: String, request: SaveSkillRequest) -> Skill {
        Skill {
            id,
            name: request.name.trim().to_string(),
            score: request.score.min(100),
            kind: Some(request.kind.trim().to_lowercase()),
        }
    }
}
