//! Admin session kept in `sessionStorage`, so a reload keeps the admin
//! logged in until the tab is closed.

use web_sys::window;

const SESSION_USER_KEY: &str = "mep_admin_user";

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

pub fn save_session_user(username: &str) {
    if let Some(storage) = get_session_storage() {
        let _ = storage.set_item(SESSION_USER_KEY, username);
    }
}

pub fn get_session_user() -> Option<String> {
    get_session_storage()?
        .get_item(SESSION_USER_KEY)
        .ok()?
        .filter(|u| !u.is_empty())
}

pub fn clear_session() {
    if let Some(storage) = get_session_storage() {
        let _ = storage.remove_item(SESSION_USER_KEY);
    }
}
