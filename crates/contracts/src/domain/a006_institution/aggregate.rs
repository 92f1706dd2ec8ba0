use crate::domain::common::{lenient, RecordId, Resource};
use crate::enums::ResourceKind;
use crate::shared::listing::{compare_text, FieldValue, Listable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstitutionType {
    /// Universities and colleges
    #[default]
    Learning,
    /// Vocational and technical training centres
    Training,
    #[serde(other)]
    Other,
}

impl InstitutionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstitutionType::Learning => "LEARNING",
            InstitutionType::Training => "TRAINING",
            InstitutionType::Other => "OTHER",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InstitutionType::Learning => "Learning",
            InstitutionType::Training => "Training",
            InstitutionType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Institution {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "lenient::or_default")]
    pub institution_type: InstitutionType,
    #[serde(deserialize_with = "lenient::string")]
    pub contact_number: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub address: String,
    #[serde(deserialize_with = "lenient::string")]
    pub website: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::strings")]
    pub courses: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
}

impl Resource for Institution {
    const KIND: ResourceKind = ResourceKind::Institutions;

    fn id(&self) -> &RecordId {
        &self.id
    }

    /// Institutions carry no `visible` flag; only explicitly inactive ones are hidden
    fn is_visible(&self) -> bool {
        !self.status.eq_ignore_ascii_case("inactive")
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstitutionField {
    Name,
    Email,
    Address,
    Courses,
    InstitutionType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstitutionSort {
    Name,
}

impl Listable for Institution {
    type Field = InstitutionField;
    type SortKey = InstitutionSort;

    fn search_fields() -> &'static [InstitutionField] {
        &[
            InstitutionField::Name,
            InstitutionField::Email,
            InstitutionField::Address,
            InstitutionField::Courses,
        ]
    }

    fn field(&self, field: InstitutionField) -> FieldValue<'_> {
        match field {
            InstitutionField::Name => FieldValue::text(&self.name),
            InstitutionField::Email => FieldValue::text(&self.email),
            InstitutionField::Address => FieldValue::text(&self.address),
            InstitutionField::Courses => FieldValue::List(&self.courses),
            InstitutionField::InstitutionType => FieldValue::text(self.institution_type.as_str()),
        }
    }

    fn compare(&self, other: &Self, key: InstitutionSort) -> Ordering {
        match key {
            InstitutionSort::Name => compare_text(&self.name, &other.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::visible_only;
    use crate::shared::listing::{apply, Filter, ListQuery};

    fn institutions() -> Vec<Institution> {
        serde_json::from_value(serde_json::json!([
            { "_id": "i1", "name": "University of Moratuwa", "type": "LEARNING", "status": "active" },
            { "_id": "i2", "name": "NVQ Training Centre", "type": "TRAINING" },
            { "_id": "i3", "name": "Closed Academy", "type": "LEARNING", "status": "Inactive" }
        ]))
        .unwrap()
    }

    #[test]
    fn test_type_decoding() {
        let items = institutions();
        assert_eq!(items[0].institution_type, InstitutionType::Learning);
        assert_eq!(items[1].institution_type, InstitutionType::Training);
    }

    #[test]
    fn test_inactive_hidden() {
        let shown = visible_only(&institutions());
        assert_eq!(shown.len(), 2);
        assert!(shown.iter().all(|i| i.id.as_str() != "i3"));
    }

    #[test]
    fn test_filter_by_type() {
        let query =
            ListQuery::new().filter(Filter::Equals(InstitutionField::InstitutionType, "TRAINING".into()));
        let result = apply(&institutions(), &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "NVQ Training Centre");
    }
}
