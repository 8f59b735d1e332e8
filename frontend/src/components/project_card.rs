use shared::Project;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    pub on_open: Callback<Project>,
    /// Square image tile with a hover caption, as on the home page
    #[prop_or_default]
    pub tile: bool,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    let onclick = {
        let on_open = props.on_open.clone();
        let project = project.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(project.clone()))
    };

    let image = match project.cover_image() {
        Some(src) => html! { <img src={src.to_string()} alt={project.title.clone()} /> },
        None => html! { <div class="project-image-placeholder"></div> },
    };
    let category = project.category.clone().unwrap_or_default();

    if props.tile {
        return html! {
            <div class="project-tile" {onclick}>
                {image}
                <div class="project-tile-caption">
                    <h3>{&project.title}</h3>
                    <p class="project-category">{category}</p>
                </div>
            </div>
        };
    }

    html! {
        <div class="project-card" {onclick}>
            <div class="project-card-image">{image}</div>
            <h3 class="project-card-title">{&project.title}</h3>
            <p class="project-card-meta">
                <span class="project-category">{category}</span>
                {" • "}
                {&project.date}
            </p>
        </div>
    }
}
