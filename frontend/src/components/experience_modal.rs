use shared::Experience;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExperienceModalProps {
    pub experience: Experience,
    pub on_close: Callback<()>,
}

#[function_component(ExperienceModal)]
pub fn experience_modal(props: &ExperienceModalProps) -> Html {
    let experience = &props.experience;

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="experience-modal" onclick={on_modal_click}>
                <div class="experience-modal-header">
                    <div>
                        <div class="experience-modal-tags">
                            <span class={experience.badge_class()}>{experience.kind.clone().unwrap_or_default()}</span>
                            <span class="experience-period">{&experience.period}</span>
                        </div>
                        <h2 class="experience-modal-title">{&experience.title}</h2>
                        <div class="experience-modal-org">
                            <span class="experience-company">{&experience.company}</span>
                            <span class="experience-place">{&experience.place}</span>
                        </div>
                    </div>
                    <button type="button" class="modal-close" onclick={on_close_click}>{"✕"}</button>
                </div>
                <div class="experience-modal-body">
                    <div class="experience-description">{&experience.description}</div>
                    {if experience.skills.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <div class="experience-modal-skills">
                                <h4>{"Skills & Tech"}</h4>
                                <div class="skill-chips">
                                    { for experience.skills.iter().map(|skill| html! {
                                        <span class="skill-chip">{skill}</span>
                                    }) }
                                </div>
                            </div>
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
