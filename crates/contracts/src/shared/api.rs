//! Description of the REST API this app is a client of.
//!
//! Calls are built here as plain values and executed by the frontend HTTP
//! module, so what a screen *would* send can be checked without a network.

use crate::domain::common::RecordId;
use crate::enums::ResourceKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// One request against the API, relative to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    pub method: HttpMethod,
    pub path: String,
    /// Already encoded query string without the leading `?`
    pub query: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiCall {
    fn new(method: HttpMethod, path: String) -> Self {
        Self {
            method,
            path,
            query: None,
            body: None,
        }
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_query(mut self, query: String) -> Self {
        self.query = if query.is_empty() { None } else { Some(query) };
        self
    }

    /// Path plus query string, e.g. `/jobseekers?minExperience=2`
    pub fn path_and_query(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{}", self.path, q),
            None => self.path.clone(),
        }
    }
}

/// Builders for every endpoint shape the app uses
pub struct Endpoint;

impl Endpoint {
    /// `GET /{resource}`
    pub fn list(kind: ResourceKind) -> ApiCall {
        ApiCall::new(HttpMethod::Get, collection_path(kind))
    }

    /// `GET /{resource}/:id`
    pub fn detail(kind: ResourceKind, id: &RecordId) -> ApiCall {
        ApiCall::new(HttpMethod::Get, item_path(kind, id))
    }

    /// `POST /{resource}`
    pub fn create(kind: ResourceKind, body: serde_json::Value) -> ApiCall {
        ApiCall::new(HttpMethod::Post, collection_path(kind)).with_body(body)
    }

    /// `PUT /{resource}/:id`
    pub fn update(kind: ResourceKind, id: &RecordId, body: serde_json::Value) -> ApiCall {
        ApiCall::new(HttpMethod::Put, item_path(kind, id)).with_body(body)
    }

    /// `DELETE /{resource}/:id`
    pub fn delete(kind: ResourceKind, id: &RecordId) -> ApiCall {
        ApiCall::new(HttpMethod::Delete, item_path(kind, id))
    }

    /// `PATCH /{resource}/:id/visibility`
    pub fn visibility(kind: ResourceKind, id: &RecordId) -> ApiCall {
        ApiCall::new(
            HttpMethod::Patch,
            format!("{}/visibility", item_path(kind, id)),
        )
    }
}

fn collection_path(kind: ResourceKind) -> String {
    format!("/{}", kind.path())
}

/// `/{resource}/{id}` with the id percent-encoded as one path segment
pub fn item_path(kind: ResourceKind, id: &RecordId) -> String {
    format!("/{}/{}", kind.path(), urlencoding::encode(id.as_str()))
}

/// Server-side filter parameters accepted by `GET /jobseekers`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSeekerQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_experience: Option<u32>,
}

impl JobSeekerQuery {
    pub fn is_empty(&self) -> bool {
        self.professional_type.is_none()
            && self.min_experience.is_none()
            && self.max_experience.is_none()
    }

    /// List call with the parameters attached
    pub fn to_call(&self) -> ApiCall {
        let call = Endpoint::list(ResourceKind::JobSeekers);
        if self.is_empty() {
            return call;
        }
        match serde_qs::to_string(self) {
            Ok(query) => call.with_query(query),
            Err(_) => call,
        }
    }
}

/// Optional error payload returned by the API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extract `message` from a raw response body, if it is JSON and has one
    pub fn parse_message(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
    }
}

/// Failures of a remote call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("not found")]
    NotFound,
    #[error("HTTP {status}")]
    Http {
        status: u16,
        message: Option<String>,
    },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-2xx status and its body
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 404 {
            return ApiError::NotFound;
        }
        ApiError::Http {
            status,
            message: ErrorBody::parse_message(body),
        }
    }

    /// Text for toasts and inline errors: the server message when the API
    /// supplied one, otherwise a generic sentence
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::NotFound => "The requested record was not found.".to_string(),
            ApiError::Http { .. } | ApiError::Decode(_) => {
                "Something went wrong. Please try again.".to_string()
            }
            ApiError::Network(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        let id = RecordId::new("x1");
        assert_eq!(Endpoint::list(ResourceKind::Consultants).path, "/consultants");
        assert_eq!(Endpoint::detail(ResourceKind::JobVacancies, &id).path, "/job-vacancies/x1");
        let delete = Endpoint::delete(ResourceKind::Agents, &id);
        assert_eq!(delete.method, HttpMethod::Delete);
        assert_eq!(delete.path, "/agents/x1");
        let patch = Endpoint::visibility(ResourceKind::JobSeekers, &id);
        assert_eq!(patch.method, HttpMethod::Patch);
        assert_eq!(patch.path, "/jobseekers/x1/visibility");
    }

    #[test]
    fn test_ids_are_percent_encoded() {
        let id = RecordId::new("a/b c");
        assert_eq!(Endpoint::detail(ResourceKind::Projects, &id).path, "/projects/a%2Fb%20c");
    }

    #[test]
    fn test_jobseeker_query_string() {
        let query = JobSeekerQuery {
            professional_type: Some("Engineer".into()),
            min_experience: Some(2),
            max_experience: None,
        };
        let call = query.to_call();
        assert_eq!(call.path, "/jobseekers");
        assert_eq!(
            call.path_and_query(),
            "/jobseekers?professionalType=Engineer&minExperience=2"
        );
        assert_eq!(JobSeekerQuery::default().to_call().query, None);
    }

    #[test]
    fn test_error_mapping() {
        assert_eq!(ApiError::from_status(404, ""), ApiError::NotFound);
        let err = ApiError::from_status(400, r#"{"message":"Email already registered"}"#);
        assert_eq!(err.user_message(), "Email already registered");
        let generic = ApiError::from_status(500, "<html>oops</html>");
        assert_eq!(
            generic,
            ApiError::Http {
                status: 500,
                message: None
            }
        );
        assert_eq!(generic.user_message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn test_blank_server_message_is_ignored() {
        assert_eq!(ErrorBody::parse_message(r#"{"message":"  "}"#), None);
        assert_eq!(ErrorBody::parse_message(r#"{"error":"x"}"#), None);
    }
}
