use crate::domain::common::{lenient, RecordId, Resource};
use crate::enums::ResourceKind;
use crate::shared::listing::{compare_number, compare_text, FieldValue, Listable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectorStatus {
    Active,
    #[default]
    Inactive,
    #[serde(other)]
    Other,
}

impl DirectorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectorStatus::Active => "active",
            DirectorStatus::Inactive => "inactive",
            DirectorStatus::Other => "other",
        }
    }
}

/// Company director or senior MEP professional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Director {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub position: String,
    #[serde(deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(deserialize_with = "lenient::number")]
    pub years_of_experience: Option<f64>,
    #[serde(deserialize_with = "lenient::strings")]
    pub areas_of_expertise: Vec<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub qualifications: Vec<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub projects_managed: Vec<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub status: DirectorStatus,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub bio: String,
}

impl Resource for Director {
    const KIND: ResourceKind = ResourceKind::Directors;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn is_visible(&self) -> bool {
        self.status == DirectorStatus::Active
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorField {
    Name,
    Position,
    Company,
    Expertise,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorSort {
    Name,
    Experience,
}

impl Listable for Director {
    type Field = DirectorField;
    type SortKey = DirectorSort;

    fn search_fields() -> &'static [DirectorField] {
        &[
            DirectorField::Name,
            DirectorField::Position,
            DirectorField::Company,
            DirectorField::Expertise,
        ]
    }

    fn field(&self, field: DirectorField) -> FieldValue<'_> {
        match field {
            DirectorField::Name => FieldValue::text(&self.name),
            DirectorField::Position => FieldValue::text(&self.position),
            DirectorField::Company => FieldValue::text(&self.company),
            DirectorField::Expertise => FieldValue::List(&self.areas_of_expertise),
            DirectorField::Status => FieldValue::text(self.status.as_str()),
        }
    }

    fn compare(&self, other: &Self, key: DirectorSort) -> Ordering {
        match key {
            DirectorSort::Name => compare_text(&self.name, &other.name),
            DirectorSort::Experience => {
                compare_number(self.years_of_experience, other.years_of_experience)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::visible_only;
    use crate::shared::listing::{apply, Filter, ListQuery, SortSpec};
    use std::collections::BTreeSet;

    fn directors() -> Vec<Director> {
        serde_json::from_value(serde_json::json!([
            { "_id": "d1", "name": "Sunil Fernando", "company": "Alpha Consult",
              "areasOfExpertise": ["HVAC", "Energy Audits"], "yearsOfExperience": 25, "status": "active" },
            { "_id": "d2", "name": "Priya Ratnayake", "company": "Beta Mech",
              "areasOfExpertise": ["HVAC"], "yearsOfExperience": 18, "status": "inactive" },
            { "_id": "d3", "name": "Mahesh Gunawardena", "position": "CEO",
              "areasOfExpertise": ["Energy Audits", "HVAC", "BMS"], "yearsOfExperience": 30 }
        ]))
        .unwrap()
    }

    #[test]
    fn test_missing_status_is_not_public() {
        let items = directors();
        assert_eq!(items[2].status, DirectorStatus::Inactive);
        let public = visible_only(&items);
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].id.as_str(), "d1");
    }

    #[test]
    fn test_null_status_and_unknown_value() {
        let items: Vec<Director> = serde_json::from_value(serde_json::json!([
            { "_id": "d4", "name": "Ruwan", "status": null, "company": null },
            { "_id": "d5", "name": "Dilani", "status": "retired" }
        ]))
        .unwrap();
        assert_eq!(items[0].status, DirectorStatus::Inactive);
        assert_eq!(items[0].company, "");
        assert_eq!(items[1].status, DirectorStatus::Other);
    }

    #[test]
    fn test_expertise_and_experience() {
        let tags: BTreeSet<String> = ["HVAC".to_string(), "Energy Audits".to_string()].into();
        let query = ListQuery::new()
            .filter(Filter::HasAllTags(DirectorField::Expertise, tags))
            .sort(SortSpec::desc(DirectorSort::Experience));
        let ids: Vec<_> = apply(&directors(), &query).into_iter().map(|d| d.id.0).collect();
        assert_eq!(ids, vec!["d3", "d1"]);
    }
}
