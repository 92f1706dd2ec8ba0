//! Login gate of the admin panel.
//!
//! The API exposes no auth endpoint, so the gate compares against
//! credentials baked into the build and only flips an in-memory flag.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin".to_string(),
        }
    }
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Username is compared trimmed, password exactly
    pub fn verify(&self, request: &LoginRequest) -> bool {
        request.username.trim() == self.username && request.password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_default_credentials() {
        let creds = AdminCredentials::default();
        assert!(creds.verify(&request("admin", "admin")));
        assert!(creds.verify(&request(" admin ", "admin")));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let creds = AdminCredentials {
            username: "ops".into(),
            password: "s3cret".into(),
        };
        assert!(!creds.verify(&request("ops", "s3cret ")));
        assert!(!creds.verify(&request("ops", "")));
        assert!(!creds.verify(&request("admin", "s3cret")));
        assert!(!creds.verify(&request("ops", "s3cre")));
        assert!(creds.verify(&request("ops", "s3cret")));
    }
}
