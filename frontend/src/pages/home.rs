use shared::filter::HOME_PROJECTS;
use shared::{ContentItem, Experience, HeroContent, Project, SiteInfo};
use yew::prelude::*;

use crate::components::category_tabs::CategoryTabs;
use crate::components::experience_card::ExperienceCard;
use crate::components::experience_modal::ExperienceModal;
use crate::components::hero::Hero;
use crate::components::project_card::ProjectCard;
use crate::components::project_modal::ProjectModal;
use crate::components::repo_card::RepoCard;
use crate::components::skill_grid::SkillGrid;
use crate::hooks::use_experience::use_experience;
use crate::hooks::use_github_repos::use_github_repos;
use crate::hooks::use_projects::use_projects;
use crate::hooks::use_skills::use_skills;
use crate::pages::Page;
use crate::services::api::ApiClient;

/// Experience cards previewed on the home page
pub const HOME_EXPERIENCE_COUNT: usize = 4;

/// Tab that lists GitHub repositories instead of stored projects
const REPOSITORY_TAB: &str = "development";

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub api_client: ApiClient,
    pub hero: HeroContent,
    pub site: SiteInfo,
    pub on_navigate: Callback<Page>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let projects = use_projects(&props.api_client);
    let experience = use_experience(&props.api_client);
    let skills = use_skills(&props.api_client);
    let repos = use_github_repos(&props.api_client, props.site.github_user.clone());

    let selection = use_state(|| HOME_PROJECTS.selection());
    let selected = use_state(|| None::<ContentItem>);

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |label: &'static str| {
            let mut next = (*selection).clone();
            if next.select(label) {
                selection.set(next);
            }
        })
    };

    let on_open_project = {
        let selected = selected.clone();
        Callback::from(move |project: Project| selected.set(Some(ContentItem::Project(project))))
    };

    let on_open_experience = {
        let selected = selected.clone();
        Callback::from(move |entry: Experience| selected.set(Some(ContentItem::Experience(entry))))
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let go_to = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(page);
        })
    };

    let project_grid = if selection.is_active(REPOSITORY_TAB) {
        if repos.repos.is_empty() && !repos.loading {
            html! { <div class="empty-state">{"No repositories to show yet."}</div> }
        } else {
            html! {
                <>
                    { for repos.repos.iter().map(|repo| html! {
                        <RepoCard key={repo.id.to_string()} repo={repo.clone()} />
                    }) }
                </>
            }
        }
    } else {
        let visible = selection.apply(&projects.state.projects);
        if visible.is_empty() && !projects.state.loading {
            html! { <div class="empty-state">{"No projects added in this category yet."}</div> }
        } else {
            html! {
                <>
                    { for visible.into_iter().map(|project| html! {
                        <ProjectCard
                            key={project.id.clone()}
                            project={project.clone()}
                            on_open={on_open_project.clone()}
                            tile=true
                        />
                    }) }
                </>
            }
        }
    };

    let modal = match &*selected {
        Some(ContentItem::Project(project)) => html! {
            <ProjectModal key={project.id.clone()} project={project.clone()} on_close={on_close.clone()} />
        },
        Some(ContentItem::Experience(entry)) => html! {
            <ExperienceModal experience={entry.clone()} on_close={on_close.clone()} />
        },
        None => html! {},
    };

    html! {
        <div class="home-page">
            <Hero hero={props.hero.clone()} contact_email={props.site.contact_email.clone()} />

            <section class="home-projects" id="projects">
                <h2 class="section-title">{"Projects"}</h2>
                <CategoryTabs selection={(*selection).clone()} {on_select} />
                <div class="project-grid">{project_grid}</div>
                <div class="section-more">
                    <a href="#" onclick={go_to(Page::Projects)}>{"View More Projects →"}</a>
                </div>
            </section>

            <section class="home-experience" id="experience">
                <div class="section-header">
                    <h2 class="section-title">{"Experience"}</h2>
                    <a href="#" onclick={go_to(Page::Experience)}>{"View All →"}</a>
                </div>
                <div class="experience-grid">
                    { for experience.state.entries.iter().take(HOME_EXPERIENCE_COUNT).map(|entry| html! {
                        <ExperienceCard
                            key={entry.id.clone()}
                            experience={entry.clone()}
                            on_open={on_open_experience.clone()}
                        />
                    }) }
                </div>
            </section>

            <SkillGrid skills={skills.state.skills.clone()} />

            {modal}
        </div>
    }
}
