use yew::prelude::*;

use crate::pages::Page;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current: Page,
    pub authenticated: bool,
    pub on_navigate: Callback<Page>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let link = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(page);
        });
        let class = if props.current == page { "nav-link active" } else { "nav-link" };
        html! {
            <a href="#" {class} {onclick}>{page.label()}</a>
        }
    };

    // Operators go straight to the dashboard once a session exists
    let operator_page = if props.authenticated { Page::Admin } else { Page::Login };

    let on_brand_click = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Home);
        })
    };

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <a href="#" class="navbar-brand" onclick={on_brand_click}>
                    {"Portfolio"}
                </a>
                <div class="navbar-links">
                    { for Page::PUBLIC.into_iter().map(&link) }
                    { link(operator_page) }
                </div>
            </div>
        </nav>
    }
}
