use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub contact_email: String,
    #[prop_or_default]
    pub github_user: Option<String>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="footer" id="footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <h2>{"Portfolio"}</h2>
                    <p class="footer-note">{"All rights reserved. Built with Rust & Yew."}</p>
                </div>
                <div class="footer-links">
                    {if let Some(user) = &props.github_user {
                        html! {
                            <a href={format!("https://github.com/{}", user)} target="_blank" rel="noreferrer">
                                {"GitHub"}
                            </a>
                        }
                    } else {
                        html! {}
                    }}
                    <a href={format!("mailto:{}", props.contact_email)}>{"Email"}</a>
                </div>
            </div>
        </footer>
    }
}
