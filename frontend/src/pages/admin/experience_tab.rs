use shared::forms::ExperienceForm;
use shared::{Experience, EXPERIENCE_TYPES};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::fields::{label_options, update};
use crate::hooks::use_experience::use_experience;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ExperienceTabProps {
    pub api_client: ApiClient,
    pub on_saved: Callback<String>,
}

#[function_component(ExperienceTab)]
pub fn experience_tab(props: &ExperienceTabProps) -> Html {
    let experience = use_experience(&props.api_client);
    let form = use_state(ExperienceForm::default);
    let editing_id = use_state(|| None::<String>);
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);

    let reset = {
        let form = form.clone();
        let editing_id = editing_id.clone();
        Callback::from(move |_: ()| {
            form.set(ExperienceForm::default());
            editing_id.set(None);
        })
    };

    // Enter commits the tag box instead of submitting the form
    let on_skill_keydown = {
        let form = form.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() != "Enter" {
                return;
            }
            e.prevent_default();
            let mut next = (*form).clone();
            next.commit_skill_input();
            form.set(next);
        })
    };

    let remove_skill = |skill: &str| {
        let form = form.clone();
        let skill = skill.to_string();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.remove_skill(&skill);
            form.set(next);
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let on_saved = props.on_saved.clone();
        let refresh = experience.refresh.clone();
        let form = form.clone();
        let editing_id = editing_id.clone();
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
            let request = form.to_request();
            let editing_id = (*editing_id).clone();
            let saving = saving.clone();
            let error = error.clone();
            let reset = reset.clone();

            spawn_local(async move {
                saving.set(true);
                error.set(None);

                let result = match &editing_id {
                    Some(id) => api_client
                        .update_experience(id, &request)
                        .await
                        .map(|_| "Experience updated!"),
                    None => api_client
                        .create_experience(&request)
                        .await
                        .map(|_| "Experience added!"),
                };

                match result {
                    Ok(message) => {
                        on_saved.emit(message.to_string());
                        reset.emit(());
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("experience_tab", &format!("Failed to save experience: {}", e));
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

    let edit = |entry: &Experience| {
        let form = form.clone();
        let editing_id = editing_id.clone();
        let entry = entry.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(ExperienceForm::from_experience(&entry));
            editing_id.set(Some(entry.id.clone()));
        })
    };

    let delete = |entry: &Experience| {
        let api_client = props.api_client.clone();
        let refresh = experience.refresh.clone();
        let error = error.clone();
        let id = entry.id.clone();
        Callback::from(move |_: MouseEvent| {
            if !gloo::dialogs::confirm("Delete?") {
                return;
            }
            let api_client = api_client.clone();
            let refresh = refresh.clone();
            let error = error.clone();
            let id = id.clone();
            spawn_local(async move {
                match api_client.delete_experience(&id).await {
                    Ok(()) => refresh.emit(()),
                    Err(e) => error.set(Some(e)),
                }
            });
        })
    };

    let is_editing = editing_id.is_some();

    html! {
        <div class="admin-grid">
            <div class="admin-form-card">
                <h2>{if is_editing { "Edit Job" } else { "Add Job" }}</h2>
                {if let Some(message) = &*error {
                    html! { <p class="form-error">{message}</p> }
                } else {
                    html! {}
                }}
                <form class="admin-form" onsubmit={on_submit}>
                    <input
                        required=true
                        placeholder="Job Title (e.g. Frontend Dev)"
                        value={form.title.clone()}
                        oninput={update(&form, |f: &mut ExperienceForm, v| f.title = v)}
                    />
                    <div class="form-row">
                        <select onchange={update(&form, |f: &mut ExperienceForm, v| f.kind = v)}>
                            {label_options(&EXPERIENCE_TYPES, &form.kind)}
                        </select>
                        <input
                            required=true
                            placeholder="Company"
                            value={form.company.clone()}
                            oninput={update(&form, |f: &mut ExperienceForm, v| f.company = v)}
                        />
                    </div>
                    <div class="form-row">
                        <input
                            required=true
                            placeholder="Location"
                            value={form.place.clone()}
                            oninput={update(&form, |f: &mut ExperienceForm, v| f.place = v)}
                        />
                        <input
                            required=true
                            placeholder="Date (e.g. 2023)"
                            value={form.period.clone()}
                            oninput={update(&form, |f: &mut ExperienceForm, v| f.period = v)}
                        />
                    </div>
                    <textarea
                        required=true
                        placeholder="Description"
                        rows="3"
                        value={form.description.clone()}
                        oninput={update(&form, |f: &mut ExperienceForm, v| f.description = v)}
                    />
                    <div class="skill-tags">
                        <label>{"Skills (Type & Press Enter)"}</label>
                        <div class="skill-chips">
                            { for form.skills.iter().map(|skill| html! {
                                <span key={skill.clone()} class="skill-chip removable">
                                    {skill}
                                    <button type="button" onclick={remove_skill(skill)}>{"✕"}</button>
                                </span>
                            }) }
                        </div>
                        <input
                            placeholder="Type skill + Enter..."
                            value={form.skill_input.clone()}
                            oninput={update(&form, |f: &mut ExperienceForm, v| f.skill_input = v)}
                            onkeydown={on_skill_keydown}
                        />
                    </div>
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
                { for experience.state.entries.iter().map(|entry| html! {
                    <div key={entry.id.clone()} class="admin-item">
                        <div class="admin-item-body">
                            <div class="admin-item-tags">
                                <span class={entry.badge_class()}>{entry.kind.clone().unwrap_or_default()}</span>
                                <span class="experience-place">{&entry.place}</span>
                            </div>
                            <h3>{&entry.title}</h3>
                            <p class="experience-company">{&entry.company}</p>
                            <div class="skill-chips">
                                { for entry.skills.iter().map(|skill| html! {
                                    <span class="skill-chip">{skill}</span>
                                }) }
                            </div>
                        </div>
                        <div class="admin-item-actions">
                            <button type="button" class="btn btn-link" onclick={edit(entry)}>{"Edit"}</button>
                            <button type="button" class="btn btn-link danger" onclick={delete(entry)}>{"Del"}</button>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}
