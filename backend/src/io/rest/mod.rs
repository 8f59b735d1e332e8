//! # REST API Interface Layer
//!
//! HTTP endpoints under `/api`. Handlers deserialize the request, call one
//! domain service and map [`crate::domain::DomainError`] to a status code via
//! [`error::ApiError`]. Writes require an operator session ([`auth::Operator`]).

pub mod auth;
pub mod auth_apis;
pub mod content_apis;
pub mod error;
pub mod experience_apis;
pub mod logging_apis;
pub mod project_apis;
pub mod site_apis;
pub mod skill_apis;
pub mod upload_apis;

use axum::Router;

use crate::AppState;

/// Every API route, relative to `/api`
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(content_apis::router())
        .merge(project_apis::router())
        .merge(experience_apis::router())
        .merge(skill_apis::router())
        .merge(upload_apis::router())
        .merge(auth_apis::router())
        .merge(site_apis::router())
        .merge(logging_apis::router())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::config::{AdminConfig, PortfolioConfig};
    use crate::domain::auth_service::hash_password;
    use crate::storage::{DbConnection, DocumentStorage, FileImageStore};
    use crate::{create_router, AppState};

    struct TestApp {
        router: Router,
        db: Arc<DbConnection>,
        _uploads: TempDir,
    }

    async fn setup_test() -> TestApp {
        let uploads = tempfile::tempdir().expect("Failed to create upload dir");
        let config = PortfolioConfig {
            upload_dir: uploads.path().to_path_buf(),
            static_dir: uploads.path().join("dist"),
            admin: AdminConfig {
                email: "me@example.com".to_string(),
                password_sha256: hash_password("secret"),
            },
            ..Default::default()
        };

        let db = Arc::new(DbConnection::init_test().await.expect("Failed to create test database"));
        let images = FileImageStore::new(&config.upload_dir).expect("Failed to open upload dir");
        let state = AppState::new(db.clone(), Arc::new(images), &config);
        let router = create_router(state, &config).expect("Failed to build router");

        TestApp {
            router,
            db,
            _uploads: uploads,
        }
    }

    impl TestApp {
        async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
            let response = self.router.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let body = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap()
            };
            (status, body)
        }

        async fn get(&self, uri: &str) -> (StatusCode, Value) {
            self.send(Request::get(uri).body(Body::empty()).unwrap()).await
        }

        async fn json(&self, method: &str, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
            let mut builder = Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json");
            if let Some(token) = token {
                builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
            }
            self.send(builder.body(Body::from(body.to_string())).unwrap()).await
        }

        async fn login(&self) -> String {
            let (status, body) = self
                .json("POST", "/api/auth/login", None, json!({"email": "me@example.com", "password": "secret"}))
                .await;
            assert_eq!(status, StatusCode::OK);
            body["token"].as_str().unwrap().to_string()
        }
    }

    #[tokio::test]
    async fn test_public_reads_on_empty_store() {
        let app = setup_test().await;

        let (status, body) = app.get("/api/projects").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, body) = app.get("/api/content/hero").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Full Stack Developer");

        let (status, body) = app.get("/api/site").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["contact_email"], "hello@example.com");
    }

    #[tokio::test]
    async fn test_writes_require_session() {
        let app = setup_test().await;

        let project = json!({"title": "Dunes", "category": "photography"});
        let (status, body) = app.json("POST", "/api/projects", None, project.clone()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Authentication required");

        let (status, _) = app.json("POST", "/api/projects", Some("forged"), project).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = app.json("PUT", "/api/content/about", None, json!({"title": "x"})).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_session_logout() {
        let app = setup_test().await;

        let (status, body) = app
            .json("POST", "/api/auth/login", None, json!({"email": "me@example.com", "password": "nope"}))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body["error"].is_string());

        let token = app.login().await;
        let session = Request::get("/api/auth/session")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let (_, body) = app.send(session).await;
        assert_eq!(body["authenticated"], true);

        let (status, _) = app.json("POST", "/api/auth/logout", Some(&token), json!({})).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, body) = app.get("/api/auth/session").await;
        assert_eq!(body["authenticated"], false);
        let (status, _) = app.json("POST", "/api/skills", Some(&token), json!({"name": "Rust", "type": "development"})).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_project_lifecycle() {
        let app = setup_test().await;
        let token = app.login().await;

        let (status, created) = app
            .json(
                "POST",
                "/api/projects",
                Some(&token),
                json!({"title": "Dunes", "category": "Photography", "date": "2024-01-01", "images": ["a.jpg", "b.jpg"]}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["imageUrl"], "a.jpg");
        assert_eq!(created["category"], "photography");
        let id = created["id"].as_str().unwrap().to_string();

        let (status, fetched) = app.get(&format!("/api/projects/{}", id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, updated) = app
            .json(
                "PUT",
                &format!("/api/projects/{}", id),
                Some(&token),
                json!({"title": "Dunes at dusk", "category": "photography"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["images"], json!(["a.jpg", "b.jpg"]));

        let delete = Request::delete(format!("/api/projects/{}", id))
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let (status, _) = app.send(delete).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = app.get(&format!("/api/projects/{}", id)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("not found"));
    }

    #[tokio::test]
    async fn test_validation_errors_are_bad_requests() {
        let app = setup_test().await;
        let token = app.login().await;

        let (status, body) = app
            .json("POST", "/api/experience", Some(&token), json!({"title": "", "type": "creative"}))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Experience title cannot be empty");
    }

    #[tokio::test]
    async fn test_experience_and_skills() {
        let app = setup_test().await;
        let token = app.login().await;

        let (status, entry) = app
            .json(
                "POST",
                "/api/experience",
                Some(&token),
                json!({"title": "Designer", "type": "creative", "skills": "Figma"}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(entry["skills"], json!(["Figma"]));

        for (name, score) in [("Rust", 90), ("Figma", 70)] {
            let (status, _) = app
                .json("POST", "/api/skills", Some(&token), json!({"name": name, "score": score, "type": "development"}))
                .await;
            assert_eq!(status, StatusCode::CREATED);
        }
        let (_, skills) = app.get("/api/skills").await;
        assert_eq!(skills[0]["name"], "Rust");
        assert_eq!(skills.as_array().unwrap().len(), 2);

        let (_, entries) = app.get("/api/experience").await;
        assert_eq!(entries.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_upload_image() {
        let app = setup_test().await;
        let token = app.login().await;

        let upload = Request::post("/api/uploads/projects?filename=my%20shot.png")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "image/png")
            .body(Body::from(vec![0x89, 0x50, 0x4e, 0x47]))
            .unwrap();
        let (status, body) = app.send(upload).await;
        assert_eq!(status, StatusCode::CREATED);
        let url = body["url"].as_str().unwrap();
        assert!(url.starts_with("http://localhost:3000/uploads/projects/"));
        assert!(url.ends_with("_my_shot.png"));

        let bad_folder = Request::post("/api/uploads/secrets?filename=a.png")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "image/png")
            .body(Body::from(vec![1, 2, 3]))
            .unwrap();
        let (status, _) = app.send(bad_folder).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let not_image = Request::post("/api/uploads/about?filename=a.txt")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("hello"))
            .unwrap();
        let (status, _) = app.send(not_image).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_frontend_log_forwarding() {
        let app = setup_test().await;
        let (status, _) = app
            .json("POST", "/api/logs", None, json!({"level": "warn", "message": "slow fetch", "component": "home"}))
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_malformed_project_reads_as_not_found() {
        let app = setup_test().await;
        app.db
            .put_document("projects", "bad", &json!(["not", "an", "object"]))
            .await
            .unwrap();
        let token = app.login().await;

        let (status, _) = app.get("/api/projects/bad").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = app
            .json("PUT", "/api/projects/bad", Some(&token), json!({"title": "Fixed", "category": "Photography"}))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = app.get("/api/projects").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }
}
