use shared::HeroContent;
use yew::prelude::*;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400";

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: HeroContent,
    pub contact_email: String,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero = &props.hero;
    let image = if hero.image_url.is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        hero.image_url.clone()
    };

    html! {
        <section class="hero">
            <div class="hero-text">
                <span class="hero-title">{&hero.title}</span>
                <h1 class="hero-heading">
                    {"Hi, I'm "}
                    <span class="hero-name">{&hero.name}</span>
                </h1>
                <p class="hero-description">{&hero.description}</p>
                <div class="hero-actions">
                    <a href="#projects" class="btn btn-primary">{"View Work"}</a>
                    <a href={format!("mailto:{}", props.contact_email)} class="btn btn-secondary">{"Contact Me"}</a>
                </div>
            </div>
            <div class="hero-image">
                <img src={image} alt="Profile" />
            </div>
        </section>
    }
}
