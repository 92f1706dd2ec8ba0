//! Build-time configuration.
//!
//! Values come from environment variables captured by `option_env!` when the
//! wasm bundle is built (e.g. `MEP_API_URL=https://api.example.lk/api trunk build`).

use mep_contracts::system::auth::AdminCredentials;
use once_cell::sync::Lazy;

const DEFAULT_API_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL every API path is appended to, without trailing slash
    pub api_url: String,
    pub admin: AdminCredentials,
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| AppConfig {
    api_url: option_env!("MEP_API_URL")
        .map(normalize_base)
        .filter(|url| !url.is_empty())
        .unwrap_or_else(location_default),
    admin: AdminCredentials::new(
        option_env!("MEP_ADMIN_USERNAME").unwrap_or("admin"),
        option_env!("MEP_ADMIN_PASSWORD").unwrap_or("admin"),
    ),
});

pub fn config() -> &'static AppConfig {
    &CONFIG
}

/// Same host as the page, API port, `/api` prefix
fn location_default() -> String {
    let Some(window) = web_sys::window() else {
        return format!("http://127.0.0.1:{}/api", DEFAULT_API_PORT);
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}/api", protocol, hostname, DEFAULT_API_PORT)
}

pub fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(" https://api.mephub.lk/api/ "), "https://api.mephub.lk/api");
        assert_eq!(normalize_base("http://localhost:5000"), "http://localhost:5000");
    }
}
