use super::RecordId;
use crate::enums::ResourceKind;
use crate::shared::api::item_path;
use serde::de::DeserializeOwned;

/// A record of one of the API collections
///
/// Static metadata (collection path, titles) comes from [`ResourceKind`];
/// instance methods expose what every directory page needs.
pub trait Resource: Clone + DeserializeOwned {
    /// Collection this record belongs to
    const KIND: ResourceKind;

    /// The `_id` assigned by the API
    fn id(&self) -> &RecordId;

    /// Whether the record may appear in public listings.
    ///
    /// Display convention only, the API does not enforce it.
    fn is_visible(&self) -> bool;

    /// Title shown on cards and detail headers
    fn display_name(&self) -> String;

    /// Detail page route, e.g. `/consultants/65a1f0`
    fn detail_route(&self) -> String {
        item_path(Self::KIND, self.id())
    }
}

/// Keep only records that public pages may show
pub fn visible_only<T: Resource>(items: &[T]) -> Vec<T> {
    items.iter().filter(|r| r.is_visible()).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a008_job_seeker::JobSeeker;

    #[test]
    fn test_detail_route_encodes_id() {
        let plain: JobSeeker = serde_json::from_value(serde_json::json!({ "_id": "65a1f0" })).unwrap();
        assert_eq!(plain.detail_route(), "/jobseekers/65a1f0");

        let slashed: JobSeeker = serde_json::from_value(serde_json::json!({ "_id": "a/b c" })).unwrap();
        assert_eq!(slashed.detail_route(), "/jobseekers/a%2Fb%20c");
    }
}
