//! Loading states of a single-record page

use super::api::ApiError;
use crate::domain::common::Resource;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState<T> {
    #[default]
    Loading,
    /// The API answered 404 for this id
    NotFound,
    /// Any other failure, with the text to show
    Failed(String),
    Loaded(T),
}

impl<T> DetailState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(record) => DetailState::Loaded(record),
            Err(ApiError::NotFound) => DetailState::NotFound,
            Err(e) => DetailState::Failed(e.user_message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            DetailState::Loaded(record) => Some(record),
            _ => None,
        }
    }
}

impl<T: Resource> DetailState<T> {
    /// Like [`DetailState::from_result`], but a record the public site does
    /// not list is reported as not found
    pub fn public(result: Result<T, ApiError>) -> Self {
        Self::from_result(result.and_then(|record| {
            if record.is_visible() {
                Ok(record)
            } else {
                Err(ApiError::NotFound)
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a008_job_seeker::JobSeeker;

    #[test]
    fn test_initial_state_is_loading() {
        let state: DetailState<String> = DetailState::default();
        assert!(state.is_loading());
        assert_eq!(state.loaded(), None);
    }

    #[test]
    fn test_404_is_distinguished_from_other_errors() {
        let missing: DetailState<String> = DetailState::from_result(Err(ApiError::NotFound));
        assert_eq!(missing, DetailState::NotFound);

        let failed: DetailState<String> =
            DetailState::from_result(Err(ApiError::Network("offline".into())));
        assert!(matches!(failed, DetailState::Failed(_)));

        let server: DetailState<String> = DetailState::from_result(Err(ApiError::Http {
            status: 500,
            message: Some("Database unavailable".into()),
        }));
        assert_eq!(server, DetailState::Failed("Database unavailable".into()));
    }

    #[test]
    fn test_loaded_record() {
        let state = DetailState::from_result(Ok("Alpha Consult".to_string()));
        assert_eq!(state.loaded().map(String::as_str), Some("Alpha Consult"));
    }

    #[test]
    fn test_hidden_record_is_not_public() {
        let hidden: JobSeeker =
            serde_json::from_value(serde_json::json!({ "_id": "x1", "visible": false })).unwrap();
        assert_eq!(DetailState::public(Ok(hidden)), DetailState::NotFound);

        let shown: JobSeeker =
            serde_json::from_value(serde_json::json!({ "_id": "x2", "visible": true })).unwrap();
        assert!(DetailState::public(Ok(shown)).loaded().is_some());
    }
}
