use shared::{AboutContent, SiteInfo};
use yew::prelude::*;

const PLACEHOLDER_PORTRAIT: &str = "https://via.placeholder.com/600x800";

#[derive(Properties, PartialEq)]
pub struct AboutPageProps {
    pub about: AboutContent,
    pub site: SiteInfo,
}

#[function_component(AboutPage)]
pub fn about_page(props: &AboutPageProps) -> Html {
    let about = &props.about;
    let image = if about.image_url.is_empty() {
        PLACEHOLDER_PORTRAIT.to_string()
    } else {
        about.image_url.clone()
    };

    html! {
        <div class="about-page">
            <div class="about-text">
                <h1 class="page-title">{about.display_title()}</h1>
                <div class="about-description">{about.display_description()}</div>
                <div class="about-contact">
                    <p class="about-contact-label">{"Contact"}</p>
                    <a href={format!("mailto:{}", props.site.contact_email)}>{"Get in touch →"}</a>
                </div>
            </div>
            <div class="about-image">
                <img src={image} alt="Portrait" />
            </div>
        </div>
    }
}
