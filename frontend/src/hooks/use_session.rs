use shared::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::session::Session;

pub const LOGIN_FAILED_MESSAGE: &str = "Failed to log in. Check your email/password.";

#[derive(Clone, PartialEq)]
pub struct SessionState {
    pub authenticated: bool,
    /// The stored token is still being verified with the backend
    pub checking: bool,
    pub logging_in: bool,
    pub error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseSessionActions {
    pub login: Callback<LoginRequest>,
    pub logout: Callback<()>,
}

pub struct UseSessionResult {
    pub state: SessionState,
    pub actions: UseSessionActions,
}

#[hook]
pub fn use_session(api_client: &ApiClient) -> UseSessionResult {
    let authenticated = use_state(|| false);
    let checking = use_state(|| Session::token().is_some());
    let logging_in = use_state(|| false);
    let error = use_state(|| None::<String>);

    // Verify a token left over from an earlier visit
    {
        let api_client = api_client.clone();
        let authenticated = authenticated.clone();
        let checking = checking.clone();
        use_effect_with((), move |_| {
            if Session::token().is_some() {
                spawn_local(async move {
                    match api_client.session_status().await {
                        Ok(true) => authenticated.set(true),
                        Ok(false) => {
                            Session::clear();
                            authenticated.set(false);
                        }
                        Err(e) => Logger::warn_with_component("use_session", &format!("Session check failed: {}", e)),
                    }
                    checking.set(false);
                });
            }
            || ()
        });
    }

    let login = {
        let api_client = api_client.clone();
        let authenticated = authenticated.clone();
        let logging_in = logging_in.clone();
        let error = error.clone();

        use_callback((), move |request: LoginRequest, _| {
            let api_client = api_client.clone();
            let authenticated = authenticated.clone();
            let logging_in = logging_in.clone();
            let error = error.clone();

            spawn_local(async move {
                logging_in.set(true);
                error.set(None);

                match api_client.login(&request).await {
                    Ok(response) => {
                        Session::store(&response.token);
                        authenticated.set(true);
                        Logger::info_with_component("use_session", "Operator logged in");
                    }
                    Err(e) => {
                        Logger::warn_with_component("use_session", &format!("Login failed: {}", e));
                        error.set(Some(LOGIN_FAILED_MESSAGE.to_string()));
                    }
                }

                logging_in.set(false);
            });
        })
    };

    let logout = {
        let api_client = api_client.clone();
        let authenticated = authenticated.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let authenticated = authenticated.clone();

            spawn_local(async move {
                if let Err(e) = api_client.logout().await {
                    Logger::warn_with_component("use_session", &format!("Logout request failed: {}", e));
                }
                Session::clear();
                authenticated.set(false);
            });
        })
    };

    UseSessionResult {
        state: SessionState {
            authenticated: *authenticated,
            checking: *checking,
            logging_in: *logging_in,
            error: (*error).clone(),
        },
        actions: UseSessionActions { login, logout },
    }
}
