use super::storage;
use crate::shared::config::config;
use leptos::prelude::*;
use mep_contracts::system::auth::LoginRequest;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// Logged-in admin, if any
    pub username: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore the session of this browser tab
    let (auth_state, set_auth_state) = signal(AuthState {
        username: storage::get_session_user(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Check the credentials and open the session
pub fn do_login(
    request: &LoginRequest,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    if !config().admin.verify(request) {
        log::warn!("rejected admin login for '{}'", request.username.trim());
        return Err("Invalid username or password".to_string());
    }

    let username = request.username.trim().to_string();
    storage::save_session_user(&username);
    log::info!("admin '{}' logged in", username);
    set_auth_state.set(AuthState {
        username: Some(username),
    });
    Ok(())
}

pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
