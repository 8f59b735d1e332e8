use shared::{Experience, SaveExperienceRequest};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};
use crate::storage::{DocumentStorage, Repository};

/// Service for managing work experience entries
#[derive(Clone)]
pub struct ExperienceService {
    repository: Repository<Experience>,
}

impl ExperienceService {
    pub fn new(storage: Arc<dyn DocumentStorage>) -> Self {
        Self {
            repository: Repository::new(storage),
        }
    }

    /// All entries in the order they were added
    pub async fn list_experience(&self) -> DomainResult<Vec<Experience>> {
        let entries = self.repository.list().await?;
        info!("Found {} experience entries", entries.len());
        Ok(entries)
    }

    pub async fn get_experience(&self, id: &str) -> DomainResult<Experience> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Experience", id))
    }

    pub async fn create_experience(
        &self,
        request: SaveExperienceRequest,
    ) -> DomainResult<Experience> {
        info!("Creating experience: title={}", request.title);
        request.validate().map_err(DomainError::Validation)?;

        let mut entry = Experience {
            id: Uuid::new_v4().simple().to_string(),
            ..Default::default()
        };
        Self::apply_request(&mut entry, request);

        self.repository.save(&entry).await?;
        info!("Created experience {}", entry.id);
        Ok(entry)
    }

    pub async fn update_experience(
        &self,
        id: &str,
        request: SaveExperienceRequest,
    ) -> DomainResult<Experience> {
        info!("Updating experience: {}", id);
        request.validate().map_err(DomainError::Validation)?;

        let mut entry = self.get_experience(id).await?;
        Self::apply_request(&mut entry, request);

        self.repository.save(&entry).await?;
        Ok(entry)
    }

    pub async fn delete_experience(&self, id: &str) -> DomainResult<()> {
        info!("Deleting experience: {}", id);
        if !self.repository.delete(id).await? {
            warn!("Experience not found: {}", id);
            return Err(DomainError::not_found("Experience", id));
        }
        Ok(())
    }

    fn apply_request(entry: &mut Experience, request: SaveExperienceRequest) {
        entry.skills = request.normalized_skills();
        entry.title = request.title.trim().to_string();
        entry.kind = Some(request.kind.trim().to_lowercase());
        entry.company = request.company;
        entry.place = request.place;
        entry.period = request.period;
        entry.description = request.description;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DbConnection;

    async fn setup_test() -> ExperienceService {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        ExperienceService::new(Arc::new(db))
    }

    fn request(title: &str, kind: &str, skills: &[&str]) -> SaveExperienceRequest {
        SaveExperienceRequest {
            title: title.to_string(),
            kind: kind.to_string(),
            company: "Acme".to_string(),
            place: "Remote".to_string(),
            period: "2021 - 2023".to_string(),
            description: "Built things.".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_create_normalizes_skills_and_type() {
        let service = setup_test().await;

        let entry = service
            .create_experience(request("Engineer", "Development", &[" Rust", "Rust", "", "SQL"]))
            .await
            .unwrap();

        assert_eq!(entry.kind.as_deref(), Some("development"));
        assert_eq!(entry.skills, vec!["Rust", "SQL"]);
        assert_eq!(service.get_experience(&entry.id).await.unwrap(), entry);
    }

    #[tokio::test]
    async fn test_rejects_unknown_type() {
        let service = setup_test().await;
        let err = service
            .create_experience(request("Chef", "culinary", &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order_after_update() {
        let service = setup_test().await;
        let first = service.create_experience(request("First", "impact", &[])).await.unwrap();
        service.create_experience(request("Second", "creative", &[])).await.unwrap();

        service
            .update_experience(&first.id, request("First, renamed", "impact", &["Mentoring"]))
            .await
            .unwrap();

        let titles: Vec<String> = service
            .list_experience()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["First, renamed", "Second"]);
    }

    #[tokio::test]
    async fn test_delete_missing_entry() {
        let service = setup_test().await;
        assert!(matches!(
            service.delete_experience("ghost").await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
