use shared::LoginRequest;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session::SessionState;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub session: SessionState,
    pub on_login: Callback<LoginRequest>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_login.emit(LoginRequest {
                email: email.trim().to_string(),
                password: (*password).clone(),
            });
        })
    };

    html! {
        <div class="login-page">
            <div class="login-card">
                <h2 class="login-title">{"Admin Portal"}</h2>
                {if let Some(error) = &props.session.error {
                    html! { <p class="form-error">{error}</p> }
                } else {
                    html! {}
                }}
                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-field">
                        <label for="login-email">{"Email"}</label>
                        <input
                            id="login-email"
                            type="email"
                            value={(*email).clone()}
                            oninput={on_email_input}
                            required=true
                        />
                    </div>
                    <div class="form-field">
                        <label for="login-password">{"Password"}</label>
                        <input
                            id="login-password"
                            type="password"
                            value={(*password).clone()}
                            oninput={on_password_input}
                            required=true
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={props.session.logging_in}>
                        {if props.session.logging_in { "Signing in..." } else { "Enter Dashboard" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
