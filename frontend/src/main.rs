use yew::prelude::*;

mod components;
mod hooks;
mod pages;
mod services;

use components::footer::Footer;
use components::navbar::Navbar;
use hooks::use_session::use_session;
use hooks::use_site_content::use_site_content;
use pages::about::AboutPage;
use pages::admin::AdminPage;
use pages::experience::ExperiencePage;
use pages::home::HomePage;
use pages::login::LoginPage;
use pages::projects::ProjectsPage;
use pages::Page;
use services::api::ApiClient;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let api_client = ApiClient::new();
    let page = use_state(|| Page::Home);
    let session = use_session(&api_client);
    let site_content = use_site_content(&api_client);

    // A successful login lands on the dashboard
    {
        let page = page.clone();
        use_effect_with((session.state.authenticated, *page), move |(authenticated, current)| {
            if *authenticated && *current == Page::Login {
                page.set(Page::Admin);
            }
            || ()
        });
    }

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| {
            Logger::debug_with_component("app", &format!("Navigating to {}", next.label()));
            page.set(next);
        })
    };

    let on_logout = {
        let logout = session.actions.logout.clone();
        let page = page.clone();
        Callback::from(move |_: ()| {
            logout.emit(());
            page.set(Page::Home);
        })
    };

    let state = &site_content.state;
    let login_page = html! {
        <LoginPage session={session.state.clone()} on_login={session.actions.login.clone()} />
    };

    let content = match *page {
        Page::Home => html! {
            <HomePage
                api_client={api_client.clone()}
                hero={state.hero.clone()}
                site={state.site.clone()}
                on_navigate={on_navigate.clone()}
            />
        },
        Page::About => html! { <AboutPage about={state.about.clone()} site={state.site.clone()} /> },
        Page::Projects => html! { <ProjectsPage api_client={api_client.clone()} /> },
        Page::Experience => html! { <ExperiencePage api_client={api_client.clone()} /> },
        Page::Login => login_page,
        Page::Admin if session.state.checking => html! { <div class="loading">{"Loading..."}</div> },
        Page::Admin if session.state.authenticated => html! {
            <AdminPage
                api_client={api_client.clone()}
                {on_logout}
                on_content_changed={site_content.refresh.clone()}
            />
        },
        Page::Admin => login_page,
    };

    html! {
        <div class="app">
            <Navbar current={*page} authenticated={session.state.authenticated} {on_navigate} />
            <main class="page">{content}</main>
            <Footer contact_email={state.site.contact_email.clone()} github_user={state.site.github_user.clone()} />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
