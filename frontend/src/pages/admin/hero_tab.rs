use shared::{HeroContent, ImageFolder};
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

use super::fields::{clear_file_input, selected_files, update};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/150";

#[derive(Properties, PartialEq)]
pub struct HeroTabProps {
    pub api_client: ApiClient,
    pub on_saved: Callback<String>,
    pub on_content_changed: Callback<()>,
}

#[function_component(HeroTab)]
pub fn hero_tab(props: &HeroTabProps) -> Html {
    let hero = use_state(HeroContent::default);
    let image_file = use_state(|| None::<File>);
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);
    let file_input = use_node_ref();

    {
        let api_client = props.api_client.clone();
        let hero = hero.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.get_hero().await {
                    Ok(content) => hero.set(content),
                    Err(e) => Logger::error_with_component("hero_tab", &format!("Failed to load hero: {}", e)),
                }
            });
            || ()
        });
    }

    let on_file_change = {
        let image_file = image_file.clone();
        Callback::from(move |e: Event| image_file.set(selected_files(&e).into_iter().next()))
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let on_saved = props.on_saved.clone();
        let on_content_changed = props.on_content_changed.clone();
        let hero = hero.clone();
        let image_file = image_file.clone();
        let saving = saving.clone();
        let error = error.clone();
        let file_input = file_input.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let api_client = api_client.clone();
            let on_saved = on_saved.clone();
            let on_content_changed = on_content_changed.clone();
            let hero = hero.clone();
            let image_file = image_file.clone();
            let saving = saving.clone();
            let error = error.clone();
            let file_input = file_input.clone();

            spawn_local(async move {
                saving.set(true);
                error.set(None);

                let mut content = (*hero).clone();
                if let Some(file) = (*image_file).clone() {
                    match api_client.upload_image(ImageFolder::Hero, file).await {
                        Ok(url) => content.image_url = url,
                        Err(e) => {
                            error.set(Some(e));
                            saving.set(false);
                            return;
                        }
                    }
                }

                match api_client.save_hero(&content).await {
                    Ok(saved) => {
                        hero.set(saved);
                        image_file.set(None);
                        clear_file_input(&file_input);
                        on_saved.emit("Home/Hero updated!".to_string());
                        on_content_changed.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("hero_tab", &format!("Failed to save hero: {}", e));
                        error.set(Some(e));
                    }
                }

                saving.set(false);
            });
        })
    };

    let avatar = if hero.image_url.is_empty() {
        PLACEHOLDER_AVATAR.to_string()
    } else {
        hero.image_url.clone()
    };

    html! {
        <div class="admin-content-card">
            <h2>{"Edit Home Hero"}</h2>
            {if let Some(message) = &*error {
                html! { <p class="form-error">{message}</p> }
            } else {
                html! {}
            }}
            <form class="admin-form" onsubmit={on_submit}>
                <div class="hero-avatar-edit">
                    <img class="hero-avatar" src={avatar} alt="Profile" />
                    <label class="file-label">
                        {"Change"}
                        <input ref={file_input} type="file" accept="image/*" onchange={on_file_change} />
                    </label>
                </div>
                <input
                    placeholder="Full Name"
                    value={hero.name.clone()}
                    oninput={update(&hero, |h: &mut HeroContent, v| h.name = v)}
                />
                <input
                    placeholder="Job Title"
                    value={hero.title.clone()}
                    oninput={update(&hero, |h: &mut HeroContent, v| h.title = v)}
                />
                <textarea
                    placeholder="Short Intro Bio"
                    value={hero.description.clone()}
                    oninput={update(&hero, |h: &mut HeroContent, v| h.description = v)}
                />
                <button type="submit" class="btn btn-primary" disabled={*saving}>
                    {if *saving { "Saving..." } else { "Save Changes" }}
                </button>
            </form>
        </div>
    }
}
