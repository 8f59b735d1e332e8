use shared::GithubRepo;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct GithubReposState {
    pub repos: Vec<GithubRepo>,
    pub loading: bool,
}

/// Latest public repositories of `user`. Refetched when the user changes;
/// no user means no repositories.
#[hook]
pub fn use_github_repos(api_client: &ApiClient, user: Option<String>) -> GithubReposState {
    let repos = use_state(Vec::<GithubRepo>::new);
    let loading = use_state(|| false);

    {
        let api_client = api_client.clone();
        let repos = repos.clone();
        let loading = loading.clone();

        use_effect_with(user, move |user| {
            if let Some(user) = user.clone() {
                spawn_local(async move {
                    loading.set(true);
                    match api_client.latest_github_repos(&user).await {
                        Ok(list) => repos.set(list),
                        Err(e) => Logger::warn_with_component("use_github_repos", &format!("Failed to fetch repositories for {}: {}", user, e)),
                    }
                    loading.set(false);
                });
            } else {
                repos.set(Vec::new());
            }
            || ()
        });
    }

    GithubReposState {
        repos: (*repos).clone(),
        loading: *loading,
    }
}
