use shared::{AboutContent, ImageFolder};
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

use super::fields::{clear_file_input, selected_files, update};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct AboutTabProps {
    pub api_client: ApiClient,
    pub on_saved: Callback<String>,
    pub on_content_changed: Callback<()>,
}

#[function_component(AboutTab)]
pub fn about_tab(props: &AboutTabProps) -> Html {
    let about = use_state(AboutContent::default);
    let image_file = use_state(|| None::<File>);
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);
    let file_input = use_node_ref();

    {
        let api_client = props.api_client.clone();
        let about = about.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.get_about().await {
                    Ok(content) => about.set(content),
                    Err(e) => Logger::error_with_component("about_tab", &format!("Failed to load about page: {}", e)),
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
        let about = about.clone();
        let image_file = image_file.clone();
        let saving = saving.clone();
        let error = error.clone();
        let file_input = file_input.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let api_client = api_client.clone();
            let on_saved = on_saved.clone();
            let on_content_changed = on_content_changed.clone();
            let about = about.clone();
            let image_file = image_file.clone();
            let saving = saving.clone();
            let error = error.clone();
            let file_input = file_input.clone();

            spawn_local(async move {
                saving.set(true);
                error.set(None);

                let mut content = (*about).clone();
                if let Some(file) = (*image_file).clone() {
                    match api_client.upload_image(ImageFolder::About, file).await {
                        Ok(url) => content.image_url = url,
                        Err(e) => {
                            error.set(Some(e));
                            saving.set(false);
                            return;
                        }
                    }
                }

                match api_client.save_about(&content).await {
                    Ok(saved) => {
                        about.set(saved);
                        image_file.set(None);
                        clear_file_input(&file_input);
                        on_saved.emit("About Page updated!".to_string());
                        on_content_changed.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("about_tab", &format!("Failed to save about page: {}", e));
                        error.set(Some(e));
                    }
                }

                saving.set(false);
            });
        })
    };

    let preview = match (&*image_file, about.image_url.is_empty()) {
        (Some(file), _) => html! { <span class="image-pending">{format!("New image: {}", file.name())}</span> },
        (None, false) => html! { <img src={about.image_url.clone()} alt="About" /> },
        (None, true) => html! { <span class="image-missing">{"No Image"}</span> },
    };

    html! {
        <div class="admin-content-card about-editor">
            <div class="about-editor-form">
                <h2>{"Edit About Page"}</h2>
                <p class="form-hint">{"This content appears on the About page."}</p>
                {if let Some(message) = &*error {
                    html! { <p class="form-error">{message}</p> }
                } else {
                    html! {}
                }}
                <form class="admin-form" onsubmit={on_submit}>
                    <div class="form-field">
                        <label>{"Headline"}</label>
                        <input
                            placeholder="e.g. A Little About Me"
                            value={about.title.clone()}
                            oninput={update(&about, |a: &mut AboutContent, v| a.title = v)}
                        />
                    </div>
                    <div class="form-field">
                        <label>{"Bio / Story"}</label>
                        <textarea
                            placeholder="Tell your story here..."
                            value={about.description.clone()}
                            oninput={update(&about, |a: &mut AboutContent, v| a.description = v)}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={*saving}>
                        {if *saving { "Saving..." } else { "Save About Page" }}
                    </button>
                </form>
            </div>
            <div class="about-editor-image">
                <label>{"About Photo"}</label>
                <div class="image-preview">{preview}</div>
                <label class="file-label">
                    {"Upload New"}
                    <input ref={file_input} type="file" accept="image/*" onchange={on_file_change} />
                </label>
            </div>
        </div>
    }
}
