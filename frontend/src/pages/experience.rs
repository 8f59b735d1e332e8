use shared::filter::EXPERIENCE_PAGE;
use shared::Experience;
use yew::prelude::*;

use crate::components::category_tabs::CategoryTabs;
use crate::components::experience_card::ExperienceCard;
use crate::components::experience_modal::ExperienceModal;
use crate::hooks::use_experience::use_experience;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ExperiencePageProps {
    pub api_client: ApiClient,
}

#[function_component(ExperiencePage)]
pub fn experience_page(props: &ExperiencePageProps) -> Html {
    let experience = use_experience(&props.api_client);
    let selection = use_state(|| EXPERIENCE_PAGE.selection());
    let selected = use_state(|| None::<Experience>);

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |label: &'static str| {
            let mut next = (*selection).clone();
            if next.select(label) {
                selection.set(next);
            }
        })
    };

    let on_open = {
        let selected = selected.clone();
        Callback::from(move |entry: Experience| selected.set(Some(entry)))
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let entries = &experience.state.entries;
    let visible = selection.apply(entries);

    let body = if experience.state.loading && entries.is_empty() {
        html! { <div class="loading">{"Loading..."}</div> }
    } else if entries.is_empty() {
        html! { <div class="empty-state">{"No experience entries found yet."}</div> }
    } else if visible.is_empty() {
        html! { <div class="empty-state">{"No experience entries in this category yet."}</div> }
    } else {
        html! {
            <div class="experience-grid">
                { for visible.iter().map(|entry| html! {
                    <ExperienceCard key={entry.id.clone()} experience={(*entry).clone()} on_open={on_open.clone()} />
                }) }
            </div>
        }
    };

    html! {
        <div class="experience-page">
            <div class="page-header">
                <h1 class="page-title">{"Work Experience"}</h1>
                <p class="page-subtitle">
                    {"A timeline of my professional journey, covering development, design, and impact roles."}
                </p>
            </div>
            <CategoryTabs selection={(*selection).clone()} {on_select} />
            {body}
            {if let Some(entry) = &*selected {
                html! { <ExperienceModal experience={entry.clone()} {on_close} /> }
            } else {
                html! {}
            }}
        </div>
    }
}
