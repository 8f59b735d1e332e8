use shared::Experience;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct ExperienceState {
    pub entries: Vec<Experience>,
    pub loading: bool,
}

pub struct UseExperienceResult {
    pub state: ExperienceState,
    pub refresh: Callback<()>,
}

/// Experience entries from the store, fetched once on mount and again on `refresh`.
/// A failed fetch keeps whatever was loaded before.
#[hook]
pub fn use_experience(api_client: &ApiClient) -> UseExperienceResult {
    let entries = use_state(Vec::<Experience>::new);
    let loading = use_state(|| true);

    let refresh = {
        let api_client = api_client.clone();
        let entries = entries.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let entries = entries.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.list_experience().await {
                    Ok(list) => entries.set(list),
                    Err(e) => Logger::error_with_component("use_experience", &format!("Failed to fetch experience: {}", e)),
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

    UseExperienceResult {
        state: ExperienceState {
            entries: (*entries).clone(),
            loading: *loading,
        },
        refresh,
    }
}
