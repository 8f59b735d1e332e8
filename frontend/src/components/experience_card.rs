use shared::Experience;
use yew::prelude::*;

/// Skill chips shown on a card before collapsing the rest into "+N"
pub const CARD_SKILL_LIMIT: usize = 3;

#[derive(Properties, PartialEq)]
pub struct ExperienceCardProps {
    pub experience: Experience,
    pub on_open: Callback<Experience>,
}

#[function_component(ExperienceCard)]
pub fn experience_card(props: &ExperienceCardProps) -> Html {
    let experience = &props.experience;
    let (shown, hidden) = experience.skill_preview(CARD_SKILL_LIMIT);

    let onclick = {
        let on_open = props.on_open.clone();
        let experience = experience.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(experience.clone()))
    };

    html! {
        <div class="experience-card" {onclick}>
            <div class="experience-card-badge">
                <span class={experience.badge_class()}>{experience.kind.clone().unwrap_or_default()}</span>
            </div>
            <h3 class="experience-title">{&experience.title}</h3>
            <p class="experience-company">{&experience.company}</p>
            <div class="experience-meta">
                <div class="experience-place">{&experience.place}</div>
                <div class="experience-period">{&experience.period}</div>
            </div>
            <p class="experience-summary">{&experience.description}</p>
            <div class="skill-chips">
                { for shown.iter().map(|skill| html! {
                    <span class="skill-chip">{skill}</span>
                }) }
                {if hidden > 0 {
                    html! { <span class="skill-chip-more">{format!("+{}", hidden)}</span> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
