//! Operator dashboard: one tab per editable collection or content block.
//!
//! Every tab reports successful saves through `on_saved`; the dashboard shows
//! the message in a banner that clears itself after [`SUCCESS_BANNER_MS`].

mod about_tab;
mod experience_tab;
mod fields;
mod hero_tab;
mod projects_tab;
mod skills_tab;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::services::api::ApiClient;
use about_tab::AboutTab;
use experience_tab::ExperienceTab;
use hero_tab::HeroTab;
use projects_tab::ProjectsTab;
use skills_tab::SkillsTab;

pub const SUCCESS_BANNER_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Projects,
    Experience,
    Skills,
    Hero,
    About,
}

impl AdminTab {
    const ALL: [AdminTab; 5] = [
        AdminTab::Projects,
        AdminTab::Experience,
        AdminTab::Skills,
        AdminTab::Hero,
        AdminTab::About,
    ];

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Projects => "Projects",
            AdminTab::Experience => "Experience",
            AdminTab::Skills => "Skills",
            AdminTab::Hero => "Home Hero",
            AdminTab::About => "About Page",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AdminPageProps {
    pub api_client: ApiClient,
    pub on_logout: Callback<()>,
    /// Hero or about copy changed; public pages should refetch it
    pub on_content_changed: Callback<()>,
}

#[function_component(AdminPage)]
pub fn admin_page(props: &AdminPageProps) -> Html {
    let active_tab = use_state(|| AdminTab::Projects);
    let success = use_state(|| None::<String>);
    let banner_timeout = use_mut_ref(|| None::<Timeout>);

    let on_saved = {
        let success = success.clone();
        let banner_timeout = banner_timeout.clone();
        Callback::from(move |message: String| {
            success.set(Some(message));
            let success = success.clone();
            // Replacing the handle drops (and cancels) any pending clear
            *banner_timeout.borrow_mut() = Some(Timeout::new(SUCCESS_BANNER_MS, move || {
                success.set(None);
            }));
        })
    };

    let on_logout_click = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    let tab_button = |tab: AdminTab| {
        let active_tab = active_tab.clone();
        let class = if *active_tab == tab { "admin-tab active" } else { "admin-tab" };
        html! {
            <button
                key={tab.label()}
                type="button"
                {class}
                onclick={Callback::from(move |_: MouseEvent| active_tab.set(tab))}
            >
                {tab.label()}
            </button>
        }
    };

    let api_client = props.api_client.clone();
    let content = match *active_tab {
        AdminTab::Projects => html! { <ProjectsTab {api_client} {on_saved} /> },
        AdminTab::Experience => html! { <ExperienceTab {api_client} {on_saved} /> },
        AdminTab::Skills => html! { <SkillsTab {api_client} {on_saved} /> },
        AdminTab::Hero => html! {
            <HeroTab {api_client} {on_saved} on_content_changed={props.on_content_changed.clone()} />
        },
        AdminTab::About => html! {
            <AboutTab {api_client} {on_saved} on_content_changed={props.on_content_changed.clone()} />
        },
    };

    html! {
        <div class="admin-page">
            <div class="admin-header">
                <h1 class="page-title">{"Admin Command Center"}</h1>
                <button type="button" class="btn btn-link logout" onclick={on_logout_click}>{"Logout"}</button>
            </div>

            <div class="admin-tabs">
                { for AdminTab::ALL.into_iter().map(tab_button) }
            </div>

            {if let Some(message) = &*success {
                html! { <div class="success-banner">{message}</div> }
            } else {
                html! {}
            }}

            {content}
        </div>
    }
}
