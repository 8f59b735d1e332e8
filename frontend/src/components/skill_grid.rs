use shared::content::skills_of_kind;
use shared::{Skill, SkillKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SkillGridProps {
    /// Already sorted by score, highest first
    pub skills: Vec<Skill>,
}

/// Three columns of score bars, one per skill kind.
#[function_component(SkillGrid)]
pub fn skill_grid(props: &SkillGridProps) -> Html {
    let column = |kind: SkillKind| {
        let items = skills_of_kind(&props.skills, kind);
        html! {
            <div key={kind.title()} class={classes!("skill-column", kind.css_class())}>
                <h3 class="skill-column-title">{kind.title()}</h3>
                {if items.is_empty() {
                    html! { <p class="skill-empty">{"No skills added yet."}</p> }
                } else {
                    html! {
                        <div class="skill-list">
                            { for items.into_iter().map(|skill| html! {
                                <div key={skill.id.clone()} class="skill-row">
                                    <div class="skill-row-header">
                                        <span class="skill-name">{&skill.name}</span>
                                        <span class="skill-score">{format!("{}%", skill.score)}</span>
                                    </div>
                                    <div class="skill-bar">
                                        <div class="skill-bar-fill" style={format!("width: {}%", skill.score)}></div>
                                    </div>
                                </div>
                            }) }
                        </div>
                    }
                }}
            </div>
        }
    };

    html! {
        <section class="skills" id="skills">
            <h2 class="section-title">{"Technical Proficiency"}</h2>
            <div class="skill-grid">
                { for SkillKind::ALL.into_iter().map(column) }
            </div>
        </section>
    }
}
