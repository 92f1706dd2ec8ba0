//! URL helpers for talking to the REST API

use super::config::config;

/// Base URL for API requests, e.g. `http://localhost:3000/api`
pub fn api_base() -> String {
    config().api_url.clone()
}

/// Build a full API URL from a path such as `/jobseekers/42`
pub fn api_url(path: &str) -> String {
    join_url(&config().api_url, path)
}

pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h:3000/api", "/projects"), "http://h:3000/api/projects");
        assert_eq!(join_url("http://h:3000/api/", "/projects"), "http://h:3000/api/projects");
        assert_eq!(join_url("http://h:3000/api", "projects/p1"), "http://h:3000/api/projects/p1");
        assert_eq!(join_url("http://h:3000/api", ""), "http://h:3000/api");
    }
}
