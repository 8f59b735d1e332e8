use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::content::{latest_repos, LATEST_REPO_COUNT};
use shared::{
    AboutContent, ApiErrorBody, Experience, GithubRepo, HeroContent,
    ImageFolder, LoginRequest, LoginResponse, Project, SaveExperienceRequest, SaveProjectRequest,
    SaveSkillRequest, SessionStatus, SiteInfo, Skill, UploadResponse,
};
use web_sys::File;

use crate::services::session::Session;

/// Backend origin, fixed at build time
pub const DEFAULT_API_URL: &str = match option_env!("PORTFOLIO_API_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

const GITHUB_API_URL: &str = "https://api.github.com";

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the build-time base URL
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL.to_string())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Attach the stored session token, if any
    fn authorized(builder: RequestBuilder) -> RequestBuilder {
        match Session::token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<T, String> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| format!("Failed to fetch {}: {}", what, e))?;
        Self::read_json(response, what).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        body: &B,
        what: &str,
    ) -> Result<T, String> {
        let response = Self::authorized(builder)
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        Self::read_json(response, what).await
    }

    async fn send_empty(&self, builder: RequestBuilder) -> Result<(), String> {
        let response = Self::authorized(builder)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if response.ok() {
            Ok(())
        } else {
            Err(Self::error_message(response).await)
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, String> {
        if !response.ok() {
            return Err(Self::error_message(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse {}: {}", what, e))
    }

    /// The backend's `{"error": ...}` message, else the raw body
    async fn error_message(response: Response) -> String {
        let status = response.status();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        match serde_json::from_str::<ApiErrorBody>(&text) {
            Ok(body) => body.error,
            Err(_) => format!("Server error {}: {}", status, text),
        }
    }

    pub async fn get_hero(&self) -> Result<HeroContent, String> {
        self.get_json("/content/hero", "hero content").await
    }

    pub async fn save_hero(&self, hero: &HeroContent) -> Result<HeroContent, String> {
        self.send_json(Request::put(&self.url("/content/hero")), hero, "hero content")
            .await
    }

    pub async fn get_about(&self) -> Result<AboutContent, String> {
        self.get_json("/content/about", "about content").await
    }

    pub async fn save_about(&self, about: &AboutContent) -> Result<AboutContent, String> {
        self.send_json(Request::put(&self.url("/content/about")), about, "about content")
            .await
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, String> {
        self.get_json("/projects", "projects").await
    }

    pub async fn create_project(&self, request: &SaveProjectRequest) -> Result<Project, String> {
        self.send_json(Request::post(&self.url("/projects")), request, "project")
            .await
    }

    pub async fn update_project(
        &self,
        id: &str,
        request: &SaveProjectRequest,
    ) -> Result<Project, String> {
        let url = self.url(&format!("/projects/{}", id));
        self.send_json(Request::put(&url), request, "project").await
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), String> {
        self.send_empty(Request::delete(&self.url(&format!("/projects/{}", id))))
            .await
    }

    pub async fn list_experience(&self) -> Result<Vec<Experience>, String> {
        self.get_json("/experience", "experience").await
    }

    pub async fn create_experience(
        &self,
        request: &SaveExperienceRequest,
    ) -> Result<Experience, String> {
        self.send_json(Request::post(&self.url("/experience")), request, "experience")
            .await
    }

    pub async fn update_experience(
        &self,
        id: &str,
        request: &SaveExperienceRequest,
    ) -> Result<Experience, String> {
        let url = self.url(&format!("/experience/{}", id));
        self.send_json(Request::put(&url), request, "experience").await
    }

    pub async fn delete_experience(&self, id: &str) -> Result<(), String> {
        self.send_empty(Request::delete(&self.url(&format!("/experience/{}", id))))
            .await
    }

    pub async fn list_skills(&self) -> Result<Vec<Skill>, String> {
        self.get_json("/skills", "skills").await
    }

    pub async fn create_skill(&self, request: &SaveSkillRequest) -> Result<Skill, String> {
        self.send_json(Request::post(&self.url("/skills")), request, "skill")
            .await
    }

    pub async fn update_skill(&self, id: &str, request: &SaveSkillRequest) -> Result<Skill, String> {
        let url = self.url(&format!("/skills/{}", id));
        self.send_json(Request::put(&url), request, "skill").await
    }

    pub async fn delete_skill(&self, id: &str) -> Result<(), String> {
        self.send_empty(Request::delete(&self.url(&format!("/skills/{}", id))))
            .await
    }

    /// Upload one image file and return its public URL
    pub async fn upload_image(&self, folder: ImageFolder, file: File) -> Result<String, String> {
        let url = self.url(&format!("/uploads/{}", folder));
        let content_type = file.type_();
        let name = file.name();

        let response = Self::authorized(Request::post(&url))
            .query([("filename", name.as_str())])
            .header("Content-Type", &content_type)
            .body(file)
            .map_err(|e| format!("Failed to prepare upload: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Upload failed: {}", e))?;

        let uploaded: UploadResponse = Self::read_json(response, "upload response").await?;
        Ok(uploaded.url)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, String> {
        let response = Request::post(&self.url("/auth/login"))
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        Self::read_json(response, "login response").await
    }

    pub async fn logout(&self) -> Result<(), String> {
        self.send_empty(Request::post(&self.url("/auth/logout"))).await
    }

    /// Whether the stored token is still a live session
    pub async fn session_status(&self) -> Result<bool, String> {
        let response = Self::authorized(Request::get(&self.url("/auth/session")))
            .send()
            .await
            .map_err(|e| format!("Failed to check session: {}", e))?;
        let status: SessionStatus = Self::read_json(response, "session status").await?;
        Ok(status.authenticated)
    }

    pub async fn site_info(&self) -> Result<SiteInfo, String> {
        self.get_json("/site", "site info").await
    }

    /// The owner's most recently pushed public repositories
    pub async fn latest_github_repos(&self, user: &str) -> Result<Vec<GithubRepo>, String> {
        let url = format!("{}/users/{}/repos", GITHUB_API_URL, user);
        let response = Request::get(&url)
            .query([("sort", "pushed"), ("per_page", "30")])
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| format!("Failed to fetch repositories: {}", e))?;
        if !response.ok() {
            return Err(format!("GitHub returned {}", response.status()));
        }
        let repos = response
            .json::<Vec<GithubRepo>>()
            .await
            .map_err(|e| format!("Failed to parse repositories: {}", e))?;
        Ok(latest_repos(repos, LATEST_REPO_COUNT))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
