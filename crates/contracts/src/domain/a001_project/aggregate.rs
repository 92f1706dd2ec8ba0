use crate::domain::common::{lenient, RecordId, Resource};
use crate::enums::ResourceKind;
use crate::shared::listing::{compare_dates, compare_number, compare_text, FieldValue, Listable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// MEP project showcased on the site
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub contractor: String,
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(deserialize_with = "lenient::string")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub end_date: String,
    #[serde(deserialize_with = "lenient::number")]
    pub amount: Option<f64>,
    #[serde(deserialize_with = "lenient::flag")]
    pub visible: bool,
    #[serde(deserialize_with = "lenient::strings")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub team_members: Vec<String>,
}

impl Resource for Project {
    const KIND: ResourceKind = ResourceKind::Projects;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Description,
    Contractor,
    Status,
    Tags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSort {
    Title,
    StartDate,
    Amount,
}

impl Listable for Project {
    type Field = ProjectField;
    type SortKey = ProjectSort;

    fn search_fields() -> &'static [ProjectField] {
        &[
            ProjectField::Title,
            ProjectField::Description,
            ProjectField::Contractor,
            ProjectField::Tags,
        ]
    }

    fn field(&self, field: ProjectField) -> FieldValue<'_> {
        match field {
            ProjectField::Title => FieldValue::text(&self.title),
            ProjectField::Description => FieldValue::text(&self.description),
            ProjectField::Contractor => FieldValue::text(&self.contractor),
            ProjectField::Status => FieldValue::text(&self.status),
            ProjectField::Tags => FieldValue::List(&self.tags),
        }
    }

    fn compare(&self, other: &Self, key: ProjectSort) -> Ordering {
        match key {
            ProjectSort::Title => compare_text(&self.title, &other.title),
            ProjectSort::StartDate => compare_dates(&self.start_date, &other.start_date),
            ProjectSort::Amount => compare_number(self.amount, other.amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listing::{apply, featured, Filter, ListQuery, SortSpec, FEATURED_COUNT};
    use std::collections::BTreeSet;

    fn projects() -> Vec<Project> {
        serde_json::from_value(serde_json::json!([
            { "_id": "p1", "title": "Colombo Port City Tower", "status": "Ongoing",
              "startDate": "2023-06-01", "visible": true, "tags": ["HVAC", "Fire"], "amount": "1500000" },
            { "_id": "p2", "title": "Kandy Hospital Wing", "status": "Completed",
              "startDate": "2021-01-15T00:00:00Z", "visible": true, "tags": ["Plumbing"] },
            { "_id": "p3", "title": "Galle Hotel Retrofit", "status": "Ongoing",
              "startDate": "2024-02-10", "visible": false, "tags": ["HVAC"] },
            { "_id": "p4", "title": "Jaffna Water Works", "status": "Ongoing",
              "visible": true, "tags": ["Plumbing", "HVAC"], "amount": 250000 },
            { "_id": "p5", "title": "Negombo Mall", "visible": true }
        ]))
        .unwrap()
    }

    #[test]
    fn test_decodes_loose_payload() {
        let items = projects();
        assert_eq!(items[0].amount, Some(1_500_000.0));
        assert_eq!(items[3].amount, Some(250_000.0));
        assert_eq!(items[4].status, "");
        assert!(items[4].tags.is_empty());
    }

    #[test]
    fn test_newest_first() {
        let items = projects();
        let query = ListQuery::new().sort(SortSpec::desc(ProjectSort::StartDate));
        let ids: Vec<_> = apply(&items, &query).into_iter().map(|p| p.id.0).collect();
        // undated records sort last when newest comes first
        assert_eq!(ids, vec!["p3", "p1", "p2", "p4", "p5"]);
    }

    #[test]
    fn test_status_and_tags_together() {
        let items = projects();
        let tags: BTreeSet<String> = ["HVAC".to_string()].into();
        let query = ListQuery::new()
            .filter(Filter::Equals(ProjectField::Status, "Ongoing".into()))
            .filter(Filter::HasAllTags(ProjectField::Tags, tags));
        let ids: Vec<_> = apply(&items, &query).into_iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec!["p1", "p3", "p4"]);
    }

    #[test]
    fn test_featured_skips_hidden_and_takes_three() {
        let items = projects();
        let top = featured(&items);
        assert_eq!(top.len(), FEATURED_COUNT);
        assert!(top.iter().all(|p| p.visible));
        assert_eq!(top[1].id.as_str(), "p2");
        assert_eq!(top[2].id.as_str(), "p4");
    }

    #[test]
    fn test_detail_route() {
        let items = projects();
        assert_eq!(items[0].detail_route(), "/projects/p1");
    }
}
