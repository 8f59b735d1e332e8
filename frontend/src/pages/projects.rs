use shared::filter::PROJECTS_PAGE;
use shared::Project;
use yew::prelude::*;

use crate::components::category_tabs::CategoryTabs;
use crate::components::project_card::ProjectCard;
use crate::components::project_modal::ProjectModal;
use crate::hooks::use_projects::use_projects;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ProjectsPageProps {
    pub api_client: ApiClient,
}

#[function_component(ProjectsPage)]
pub fn projects_page(props: &ProjectsPageProps) -> Html {
    let projects = use_projects(&props.api_client);
    let selection = use_state(|| PROJECTS_PAGE.selection());
    let selected = use_state(|| None::<Project>);

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
        Callback::from(move |project: Project| selected.set(Some(project)))
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let visible = selection.apply(&projects.state.projects);

    html! {
        <div class="projects-page">
            <h1 class="page-title">{"All Projects"}</h1>
            <CategoryTabs selection={(*selection).clone()} {on_select} />

            <div class="project-grid">
                { for visible.iter().map(|project| html! {
                    <ProjectCard key={project.id.clone()} project={(*project).clone()} on_open={on_open.clone()} />
                }) }
            </div>

            {if visible.is_empty() && !projects.state.loading {
                html! { <div class="empty-state">{"No projects found in this category."}</div> }
            } else {
                html! {}
            }}

            {if let Some(project) = &*selected {
                html! { <ProjectModal key={project.id.clone()} project={project.clone()} {on_close} /> }
            } else {
                html! {}
            }}
        </div>
    }
}
