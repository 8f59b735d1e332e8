pub mod use_experience;
pub mod use_github_repos;
pub mod use_projects;
pub mod use_session;
pub mod use_site_content;
pub mod use_skills;
