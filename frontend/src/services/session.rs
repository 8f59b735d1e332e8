use gloo::storage::{LocalStorage, Storage};

const TOKEN_KEY: &str = "portfolio.session_token";

/// Operator session token kept in local storage
pub struct Session;

impl Session {
    pub fn token() -> Option<String> {
        LocalStorage::get::<String>(TOKEN_KEY)
            .ok()
            .filter(|token| !token.is_empty())
    }

    pub fn store(token: &str) {
        if let Err(e) = LocalStorage::set(TOKEN_KEY, token) {
            gloo::console::error!(format!("Failed to store session token: {}", e));
        }
    }

    pub fn clear() {
        LocalStorage::delete(TOKEN_KEY);
    }
}
