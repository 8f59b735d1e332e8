use shared::GithubRepo;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RepoCardProps {
    pub repo: GithubRepo,
}

#[function_component(RepoCard)]
pub fn repo_card(props: &RepoCardProps) -> Html {
    let repo = &props.repo;
    html! {
        <div class="repo-card">
            <h3 class="repo-name">{&repo.name}</h3>
            <p class="repo-description">{repo.description.clone().unwrap_or_default()}</p>
            <a href={repo.html_url.clone()} target="_blank" rel="noopener noreferrer" class="repo-link">
                {"Code →"}
            </a>
        </div>
    }
}
