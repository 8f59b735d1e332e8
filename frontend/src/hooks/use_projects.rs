use shared::Project;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct ProjectsState {
    pub projects: Vec<Project>,
    pub loading: bool,
}

pub struct UseProjectsResult {
    pub state: ProjectsState,
    pub refresh: Callback<()>,
}

/// Projects from the store, fetched once on mount and again on `refresh`.
/// A failed fetch keeps whatever was loaded before.
#[hook]
pub fn use_projects(api_client: &ApiClient) -> UseProjectsResult {
    let projects = use_state(Vec::<Project>::new);
    let loading = use_state(|| true);

    let refresh = {
        let api_client = api_client.clone();
        let projects = projects.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let projects = projects.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.list_projects().await {
                    Ok(list) => projects.set(list),
                    Err(e) => Logger::error_with_component("use_projects", &format!("Failed to fetch projects: {}", e)),
                }

                loading.set(false);
            });
        })
    };

    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    UseProjectsResult {
        state: ProjectsState {
            projects: (*projects).clone(),
            loading: *loading,
        },
        refresh,
    }
}
