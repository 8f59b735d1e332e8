use shared::{Carousel, Project, SwipeDirection, SwipeTracker};
use web_sys::TouchEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub project: Project,
    pub on_close: Callback<()>,
}

enum Navigation {
    Next,
    Previous,
    To(usize),
    Swipe(SwipeDirection),
}

fn first_touch_x(e: &TouchEvent) -> Option<f64> {
    e.touches().get(0).map(|touch| touch.client_x() as f64)
}

/// Project detail overlay with an image carousel.
///
/// The carousel follows the project id: opening a different project starts
/// at its first image. A project without images renders no image area.
#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let project = &props.project;
    let images = project.gallery();

    let carousel = use_state(|| Carousel::open(project.id.clone(), images.len()));
    let tracker = use_mut_ref(SwipeTracker::new);

    // Keep the carousel in step with the project and its gallery size
    {
        let carousel = carousel.clone();
        use_effect_with((project.id.clone(), images.len()), move |(id, len)| {
            match (*carousel).clone() {
                Some(mut current) => {
                    current.show(id, *len);
                    if Some(&current) != (*carousel).as_ref() {
                        carousel.set(Some(current));
                    }
                }
                None => {
                    if *len > 0 {
                        carousel.set(Carousel::open(id.clone(), *len));
                    }
                }
            }
            || ()
        });
    }

    let navigate = {
        let carousel = carousel.clone();
        Callback::from(move |navigation: Navigation| {
            let Some(mut current) = (*carousel).clone() else {
                return;
            };
            match navigation {
                Navigation::Next => current.next(),
                Navigation::Previous => current.previous(),
                Navigation::To(index) => current.go_to(index),
                Navigation::Swipe(direction) => current.apply_swipe(direction),
            }
            carousel.set(Some(current));
        })
    };

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

    // Touch and mouse drags share one tracker
    let on_touch_start = {
        let tracker = tracker.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                tracker.borrow_mut().begin(x);
            }
        })
    };

    let on_touch_move = {
        let tracker = tracker.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                tracker.borrow_mut().track(x);
            }
        })
    };

    let on_touch_end = {
        let tracker = tracker.clone();
        let navigate = navigate.clone();
        Callback::from(move |_: TouchEvent| {
            let swipe = tracker.borrow_mut().finish();
            if let Some(direction) = swipe {
                navigate.emit(Navigation::Swipe(direction));
            }
        })
    };

    let on_mouse_down = {
        let tracker = tracker.clone();
        Callback::from(move |e: MouseEvent| {
            tracker.borrow_mut().begin(e.client_x() as f64);
        })
    };

    let on_mouse_move = {
        let tracker = tracker.clone();
        Callback::from(move |e: MouseEvent| {
            tracker.borrow_mut().track(e.client_x() as f64);
        })
    };

    let on_mouse_up = {
        let tracker = tracker.clone();
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| {
            let swipe = tracker.borrow_mut().finish();
            if let Some(direction) = swipe {
                navigate.emit(Navigation::Swipe(direction));
            }
        })
    };

    let on_mouse_leave = {
        let tracker = tracker.clone();
        Callback::from(move |_: MouseEvent| tracker.borrow_mut().cancel())
    };

    let image_area = match &*carousel {
        Some(state) => match state.current(&images) {
            Some(src) => {
                let controls = if state.has_controls() {
                    let on_prev = {
                        let navigate = navigate.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.stop_propagation();
                            navigate.emit(Navigation::Previous);
                        })
                    };
                    let on_next = {
                        let navigate = navigate.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.stop_propagation();
                            navigate.emit(Navigation::Next);
                        })
                    };
                    html! {
                        <>
                            <button type="button" class="carousel-control carousel-prev" onclick={on_prev}>{"‹"}</button>
                            <button type="button" class="carousel-control carousel-next" onclick={on_next}>{"›"}</button>
                        </>
                    }
                } else {
                    html! {}
                };

                html! {
                    <div
                        class="carousel"
                        ontouchstart={on_touch_start}
                        ontouchmove={on_touch_move}
                        ontouchend={on_touch_end}
                        onmousedown={on_mouse_down}
                        onmousemove={on_mouse_move}
                        onmouseup={on_mouse_up}
                        onmouseleave={on_mouse_leave}
                    >
                        <img src={src.to_string()} alt={project.title.clone()} draggable="false" />
                        {controls}
                        <div class="carousel-dots">
                            { for state.dots().map(|(index, current)| {
                                let navigate = navigate.clone();
                                let onclick = Callback::from(move |e: MouseEvent| {
                                    e.stop_propagation();
                                    navigate.emit(Navigation::To(index));
                                });
                                html! {
                                    <span
                                        key={index}
                                        class={classes!("carousel-dot", current.then_some("active"))}
                                        {onclick}
                                    />
                                }
                            }) }
                        </div>
                    </div>
                }
            }
            None => html! {},
        },
        None => html! {},
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="project-modal" onclick={on_modal_click}>
                {image_area}
                <div class="project-modal-info">
                    <div class="project-modal-header">
                        <div>
                            <span class="project-category">{project.category.clone().unwrap_or_default()}</span>
                            <h3 class="project-modal-title">{&project.title}</h3>
                        </div>
                        <button type="button" class="modal-close" onclick={on_close_click}>{"✕"}</button>
                    </div>
                    <div class="project-modal-description">
                        <p>{&project.description}</p>
                    </div>
                    <div class="project-modal-footer">
                        <p class="project-date">{format!("Date: {}", project.date)}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
