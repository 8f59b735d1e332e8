use shared::forms::SkillForm;
use shared::{Skill, EXPERIENCE_TYPES};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::fields::{label_options, update};
use crate::hooks::use_skills::use_skills;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct SkillsTabProps {
    pub api_client: ApiClient,
    pub on_saved: Callback<String>,
}

#[function_component(SkillsTab)]
pub fn skills_tab(props: &SkillsTabProps) -> Html {
    let skills = use_skills(&props.api_client);
    let form = use_state(SkillForm::default);
    let editing_id = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);

    let reset = {
        let form = form.clone();
        let editing_id = editing_id.clone();
        Callback::from(move |_: ()| {
            form.set(SkillForm::default());
            editing_id.set(None);
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let on_saved = props.on_saved.clone();
        let refresh = skills.refresh.clone();
        let form = form.clone();
        let editing_id = editing_id.clone();
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
            let error = error.clone();
            let reset = reset.clone();

            spawn_local(async move {
                error.set(None);

                let result = match &editing_id {
                    Some(id) => api_client.update_skill(id, &request).await.map(|_| "Skill updated!"),
                    None => api_client.create_skill(&request).await.map(|_| "Skill added!"),
                };

                match result {
                    Ok(message) => {
                        on_saved.emit(message.to_string());
                        reset.emit(());
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("skills_tab", &format!("Failed to save skill: {}", e));
                        error.set(Some(e));
                    }
                }
            });
        })
    };

    let on_cancel = {
        let reset = reset.clone();
        Callback::from(move |_: MouseEvent| reset.emit(()))
    };

    let edit = |skill: &Skill| {
        let form = form.clone();
        let editing_id = editing_id.clone();
        let skill = skill.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(SkillForm::from_skill(&skill));
            editing_id.set(Some(skill.id.clone()));
        })
    };

    let delete = |skill: &Skill| {
        let api_client = props.api_client.clone();
        let refresh = skills.refresh.clone();
        let error = error.clone();
        let id = skill.id.clone();
        Callback::from(move |_: MouseEvent| {
            let api_client = api_client.clone();
            let refresh = refresh.clone();
            let error = error.clone();
            let id = id.clone();
            spawn_local(async move {
                match api_client.delete_skill(&id).await {
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
                <h2>{if is_editing { "Edit Skill" } else { "Add Skill" }}</h2>
                {if let Some(message) = &*error {
                    html! { <p class="form-error">{message}</p> }
                } else {
                    html! {}
                }}
                <form class="admin-form" onsubmit={on_submit}>
                    <input
                        required=true
                        placeholder="Skill Name (e.g. React)"
                        value={form.name.clone()}
                        oninput={update(&form, |f: &mut SkillForm, v| f.name = v)}
                    />
                    <div class="form-field">
                        <label>{"Category"}</label>
                        <select onchange={update(&form, |f: &mut SkillForm, v| f.kind = v)}>
                            {label_options(&EXPERIENCE_TYPES, &form.kind)}
                        </select>
                    </div>
                    <div class="form-field">
                        <label>{"Fluency "}<span>{format!("{}%", form.score)}</span></label>
                        <input
                            type="range"
                            min="0"
                            max="100"
                            value={form.score.to_string()}
                            oninput={update(&form, |f: &mut SkillForm, v| f.set_score(&v))}
                        />
                    </div>
                    <div class="form-actions">
                        <button type="submit" class="btn btn-success">
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

            <div class="admin-list-card">
                <h2>{"Your Skills"}</h2>
                {if skills.state.loading && skills.state.skills.is_empty() {
                    html! { <p class="loading">{"Loading..."}</p> }
                } else {
                    html! {}
                }}
                <div class="admin-skill-list">
                    { for skills.state.skills.iter().map(|skill| html! {
                        <div key={skill.id.clone()} class="admin-skill">
                            <div class="admin-skill-body">
                                <div class="admin-skill-header">
                                    <span class="skill-name">{&skill.name}</span>
                                    <span class="skill-type">{skill.kind.clone().unwrap_or_else(|| "Dev".to_string())}</span>
                                </div>
                                <div class="skill-bar">
                                    <div class="skill-bar-fill" style={format!("width: {}%", skill.score)}></div>
                                </div>
                            </div>
                            <div class="admin-item-actions">
                                <button type="button" class="btn btn-link" onclick={edit(skill)}>{"Edit"}</button>
                                <button type="button" class="btn btn-link danger" onclick={delete(skill)}>{"Del"}</button>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}
