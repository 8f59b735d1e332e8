use shared::Skill;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct SkillsState {
    pub skills: Vec<Skill>,
    pub loading: bool,
}

pub struct UseSkillsResult {
    pub state: SkillsState,
    pub refresh: Callback<()>,
}

/// Skills from the store, highest score first, fetched once on mount and again on `refresh`.
/// A failed fetch keeps whatever was loaded before.
#[hook]
pub fn use_skills(api_client: &ApiClient) -> UseSkillsResult {
    let skills = use_state(Vec::<Skill>::new);
    let loading = use_state(|| true);

    let refresh = {
        let api_client = api_client.clone();
        let skills = skills.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let skills = skills.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.list_skills().await {
                    Ok(list) => skills.set(list),
                    Err(e) => Logger::error_with_component("use_skills", &format!("Failed to fetch skills: {}", e)),
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

    UseSkillsResult {
        state: SkillsState {
            skills: (*skills).clone(),
            loading: *loading,
        },
        refresh,
    }
}
