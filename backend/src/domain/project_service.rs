use shared::{Project, SaveProjectRequest};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};
use crate::storage::{DocumentStorage, Repository};

/// Service for managing portfolio projects and their galleries
#[derive(Clone)]
pub struct ProjectService {
    repository: Repository<Project>,
}

impl ProjectService {
    pub fn new(storage: Arc<dyn DocumentStorage>) -> Self {
        Self {
            repository: Repository::new(storage),
        }
    }

    /// All projects, newest `date` first. Dates compare as text.
    pub async fn list_projects(&self) -> DomainResult<Vec<Project>> {
        let mut projects = self.repository.list().await?;
        projects.sort_by(|a, b| b.date.cmp(&a.date));
        info!("Found {} projects", projects.len());
        Ok(projects)
    }

    pub async fn get_project(&self, id: &str) -> DomainResult<Project> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Project", id))
    }

    pub async fn create_project(&self, request: SaveProjectRequest) -> DomainResult<Project> {
        info!("Creating project: title={}", request.title);
        request.validate().map_err(DomainError::Validation)?;

        let mut project = Project {
            id: Uuid::new_v4().simple().to_string(),
            ..Default::default()
        };
        Self::apply_request(&mut project, request);

        self.repository.save(&project).await?;
        info!("Created project {} with {} images", project.id, project.images.len());
        Ok(project)
    }

    /// Replace the editable fields. The gallery is only replaced when the request carries one.
    pub async fn update_project(
        &self,
        id: &str,
        request: SaveProjectRequest,
    ) -> DomainResult<Project> {
        info!("Updating project: {}", id);
        request.validate().map_err(DomainError::Validation)?;

        let mut project = self.get_project(id).await?;
        Self::apply_request(&mut project, request);

        self.repository.save(&project).await?;
        Ok(project)
    }

    pub async fn delete_project(&self, id: &str) -> DomainResult<()> {
        info!("Deleting project: {}", id);
        if !self.repository.delete(id).await? {
            warn!("Project not found: {}", id);
            return Err(DomainError::not_found("Project", id));
        }
        Ok(())
    }

    fn apply_request(project: &mut Project, request: SaveProjectRequest) {
        project.title = request.title.trim().to_string();
        project.category = Some(request.category.trim().to_lowercase());
        project.description = request.description;
        project.date = request.date.trim().to_string();

        if let Some(images) = request.images {
            project.images = images
                .into_iter()
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty())
                .collect();
            project.image_url = project.images.first().cloned().unwrap_or_default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DbConnection;

    async fn setup_test() -> ProjectService {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        ProjectService::new(Arc::new(db))
    }

    fn request(title: &str, category: &str, date: &str, images: Option<Vec<&str>>) -> SaveProjectRequest {
        SaveProjectRequest {
            title: title.to_string(),
            category: category.to_string(),
            description: String::new(),
            date: date.to_string(),
            images: images.map(|list| list.into_iter().map(String::from).collect()),
        }
    }

    #[tokio::test]
    async fn test_create_project_sets_cover() {
        let service = setup_test().await;

        let project = service
            .create_project(request(" Dunes ", "Photography", "2024-03-01", Some(vec!["a.jpg", " ", "b.jpg"])))
            .await
            .unwrap();

        assert!(!project.id.is_empty());
        assert_eq!(project.title, "Dunes");
        assert_eq!(project.category.as_deref(), Some("photography"));
        assert_eq!(project.images, vec!["a.jpg", "b.jpg"]);
        assert_eq!(project.image_url, "a.jpg");
        assert_eq!(service.get_project(&project.id).await.unwrap(), project);
    }

    #[tokio::test]
    async fn test_create_without_images_has_empty_cover() {
        let service = setup_test().await;
        let project = service
            .create_project(request("Logo", "graphic design", "", None))
            .await
            .unwrap();
        assert!(project.images.is_empty());
        assert_eq!(project.image_url, "");
    }

    #[tokio::test]
    async fn test_invalid_project_is_rejected() {
        let service = setup_test().await;

        let err = service
            .create_project(request("", "photography", "", None))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = service
            .create_project(request("Statue", "sculpture", "", None))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(service.list_projects().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_gallery_unless_given() {
        let service = setup_test().await;
        let created = service
            .create_project(request("Dunes", "photography", "2024-03-01", Some(vec!["a.jpg"])))
            .await
            .unwrap();

        let updated = service
            .update_project(&created.id, request("Dunes II", "photography", "2024-03-02", None))
            .await
            .unwrap();
        assert_eq!(updated.title, "Dunes II");
        assert_eq!(updated.images, vec!["a.jpg"]);
        assert_eq!(updated.image_url, "a.jpg");

        let updated = service
            .update_project(
                &created.id,
                request("Dunes II", "photography", "2024-03-02", Some(vec!["a.jpg", "c.jpg"])),
            )
            .await
            .unwrap();
        assert_eq!(updated.images, vec!["a.jpg", "c.jpg"]);
    }

    #[tokio::test]
    async fn test_update_missing_project() {
        let service = setup_test().await;
        let err = service
            .update_project("ghost", request("X", "development", "", None))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_sorted_by_date_descending() {
        let service = setup_test().await;
        for (title, date) in [("old", "2022-01-01"), ("new", "2024-06-01"), ("mid", "2023-05-05")] {
            service
                .create_project(request(title, "development", date, None))
                .await
                .unwrap();
        }

        let titles: Vec<String> = service
            .list_projects()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn test_delete_project() {
        let service = setup_test().await;
        let created = service
            .create_project(request("Gone", "development", "", None))
            .await
            .unwrap();

        service.delete_project(&created.id).await.unwrap();
        assert!(matches!(
            service.delete_project(&created.id).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            service.get_project(&created.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
