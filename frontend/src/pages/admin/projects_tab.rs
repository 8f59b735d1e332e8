use shared::forms::{merge_gallery, ProjectForm};
use shared::{ImageFolder, Project, PROJECT_CATEGORIES};
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

use super::fields::{clear_file_input, label_options, selected_files, update};
use crate::hooks::use_projects::use_projects;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ProjectsTabProps {
    pub api_client: ApiClient,
    pub on_saved: Callback<String>,
}

#[function_component(ProjectsTab)]
pub fn projects_tab(props: &ProjectsTabProps) -> Html {
    let projects = use_projects(&props.api_client);
    let form = use_state(ProjectForm::default);
    let editing = use_state(|| None::<Project>);
    let files = use_state(Vec::<File>::new);
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);
    let file_input = use_node_ref();

    let reset = {
        let form = form.clone();
        let editing = editing.clone();
        let files = files.clone();
        let file_input = file_input.clone();
        Callback::from(move |_: ()| {
            form.set(ProjectForm::default());
            editing.set(None);
            files.set(Vec::new());
            clear_file_input(&file_input);
        })
    };

    let on_files_change = {
        let files = files.clone();
        Callback::from(move |e: Event| files.set(selected_files(&e)))
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let on_saved = props.on_saved.clone();
        let refresh = projects.refresh.clone();
        let form = form.clone();
        let editing = editing.clone();
        let files = files.clone();
        let saving = saving.clone();
        let error = error.clone();
        let reset = reset.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Err(message) = form.validate() {
                error.set(Some(message));
                return;
            }

            let api_client = api_client.clone();
            let on_saved = on_saved.clone();
            let refresh = refresh.clone();
            let form = (*form).clone();
            let editing = (*editing).clone();
            let files = (*files).clone();
            let saving = saving.clone();
            let error = error.clone();
            let reset = reset.clone();

            spawn_local(async move {
                saving.set(true);
                error.set(None);

                let mut uploaded = Vec::with_capacity(files.len());
                for file in files {
                    match api_client.upload_image(ImageFolder::Projects, file).await {
                        Ok(url) => uploaded.push(url),
                        Err(e) => {
                            Logger::error_with_component("projects_tab", &format!("Upload failed: {}", e));
                            error.set(Some(e));
                            saving.set(false);
                            return;
                        }
                    }
                }

                let existing = editing.as_ref().map(Project::gallery).unwrap_or_default();
                let gallery = merge_gallery(&existing, uploaded, editing.is_some());
                let request = form.to_request(gallery);

                let result = match &editing {
                    Some(project) => api_client
                        .update_project(&project.id, &request)
                        .await
                        .map(|_| "Project Updated!"),
                    None => api_client.create_project(&request).await.map(|_| "Project Added!"),
                };

                match result {
                    Ok(message) => {
                        on_saved.emit(message.to_string());
                        reset.emit(());
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("projects_tab", &format!("Failed to save project: {}", e));
                        error.set(Some(e));
                    }
                }

                saving.set(false);
            });
        })
    };

    let on_cancel = {
        let reset = reset.clone();
        Callback::from(move |_: MouseEvent| reset.emit(()))
    };

    let edit = |project: &Project| {
        let form = form.clone();
        let editing = editing.clone();
        let project = project.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(ProjectForm::from_project(&project));
            editing.set(Some(project.clone()));
        })
    };

    let delete = |project: &Project| {
        let api_client = props.api_client.clone();
        let refresh = projects.refresh.clone();
        let error = error.clone();
        let id = project.id.clone();
        Callback::from(move |_: MouseEvent| {
            if !gloo::dialogs::confirm("Delete?") {
                return;
            }
            let api_client = api_client.clone();
            let refresh = refresh.clone();
            let error = error.clone();
            let id = id.clone();
            spawn_local(async move {
                match api_client.delete_project(&id).await {
                    Ok(()) => refresh.emit(()),
                    Err(e) => error.set(Some(e)),
                }
            });
        })
    };

    let is_editing = editing.is_some();

    html! {
        <div class="admin-grid">
            <div class="admin-form-card">
                <h2>{if is_editing { "Edit Project" } else { "Add Project" }}</h2>
                {if let Some(message) = &*error {
                    html! { <p class="form-error">{message}</p> }
                } else {
                    html! {}
                }}
                <form class="admin-form" onsubmit={on_submit}>
                    <input
                        required=true
                        placeholder="Title"
                        value={form.title.clone()}
                        oninput={update(&form, |f: &mut ProjectForm, v| f.title = v)}
                    />
                    <select onchange={update(&form, |f: &mut ProjectForm, v| f.category = v)}>
                        {label_options(&PROJECT_CATEGORIES, &form.category)}
                    </select>
                    <input
                        required=true
                        placeholder="Date"
                        value={form.date.clone()}
                        oninput={update(&form, |f: &mut ProjectForm, v| f.date = v)}
                    />
                    <input
                        ref={file_input}
                        type="file"
                        accept="image/*"
                        multiple=true
                        onchange={on_files_change}
                    />
                    <textarea
                        required=true
                        placeholder="Description"
                        rows="3"
                        value={form.description.clone()}
                        oninput={update(&form, |f: &mut ProjectForm, v| f.description = v)}
                    />
                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary" disabled={*saving}>
                            {if is_editing { "Update" } else { "Add" }}
                        </button>
                        {if is_editing {
                            html! { <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Cancel"}</button> }
                        } else {
                            html! {}
                        }}
                    </div>
                </form>
            </div>

            <div class="admin-list">
                { for projects.state.projects.iter().map(|project| html! {
                    <div key={project.id.clone()} class="admin-item">
                        {match project.cover_image() {
                            Some(src) => html! { <img class="admin-thumb" src={src.to_string()} alt={project.title.clone()} /> },
                            None => html! { <div class="admin-thumb"></div> },
                        }}
                        <div class="admin-item-body">
                            <h3>{&project.title}</h3>
                            <p class="admin-item-meta">{project.category.clone().unwrap_or_default()}</p>
                            <div class="admin-item-actions">
                                <button type="button" class="btn btn-link" onclick={edit(project)}>{"Edit"}</button>
                                <button type="button" class="btn btn-link danger" onclick={delete(project)}>{"Del"}</button>
                            </div>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}
