use crate::domain::common::{lenient, RecordId, Resource};
use crate::enums::ResourceKind;
use crate::shared::listing::{compare_number, compare_text, FieldValue, Listable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Lecturer or trainer in MEP-related subjects.
///
/// Older records carry a single `name` and `type`, newer ones split the name
/// and use `lecturerType`; both shapes are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Lecturer {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub last_name: String,
    #[serde(alias = "type")]
    #[serde(deserialize_with = "lenient::string")]
    pub lecturer_type: String,
    #[serde(deserialize_with = "lenient::string")]
    pub institution: String,
    #[serde(deserialize_with = "lenient::strings")]
    pub qualifications: Vec<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub specialties: Vec<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub years_of_experience: Option<f64>,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub contact_number: String,
    #[serde(deserialize_with = "lenient::string")]
    pub bio: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub visible: bool,
}

impl Lecturer {
    pub fn full_name(&self) -> String {
        if !self.name.trim().is_empty() {
            return self.name.trim().to_string();
        }
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

impl Resource for Lecturer {
    const KIND: ResourceKind = ResourceKind::Lecturers;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn display_name(&self) -> String {
        self.full_name()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LecturerField {
    Name,
    Institution,
    Qualifications,
    Specialties,
    LecturerType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LecturerSort {
    Name,
    Experience,
}

impl Listable for Lecturer {
    type Field = LecturerField;
    type SortKey = LecturerSort;

    fn search_fields() -> &'static [LecturerField] {
        &[
            LecturerField::Name,
            LecturerField::Institution,
            LecturerField::Qualifications,
            LecturerField::Specialties,
        ]
    }

    fn field(&self, field: LecturerField) -> FieldValue<'_> {
        match field {
            LecturerField::Name => FieldValue::owned(self.full_name()),
            LecturerField::Institution => FieldValue::text(&self.institution),
            LecturerField::Qualifications => FieldValue::List(&self.qualifications),
            LecturerField::Specialties => FieldValue::List(&self.specialties),
            LecturerField::LecturerType => FieldValue::text(&self.lecturer_type),
        }
    }

    fn compare(&self, other: &Self, key: LecturerSort) -> Ordering {
        match key {
            LecturerSort::Name => compare_text(&self.full_name(), &other.full_name()),
            LecturerSort::Experience => {
                compare_number(self.years_of_experience, other.years_of_experience)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listing::{apply, search, ListQuery, SortSpec};

    fn lecturers() -> Vec<Lecturer> {
        serde_json::from_value(serde_json::json!([
            { "_id": "l1", "firstName": "Ruwan", "lastName": "Silva", "lecturerType": "Visiting",
              "institution": "University of Moratuwa", "yearsOfExperience": 15, "visible": true },
            { "_id": "l2", "name": "Dr. Anoma Jayasinghe", "type": "Permanent",
              "specialties": ["Building Services"], "yearsOfExperience": "22", "visible": true },
            { "_id": "l3", "firstName": "Chaminda", "visible": true }
        ]))
        .unwrap()
    }

    #[test]
    fn test_both_name_shapes() {
        let items = lecturers();
        assert_eq!(items[0].display_name(), "Ruwan Silva");
        assert_eq!(items[1].display_name(), "Dr. Anoma Jayasinghe");
        assert_eq!(items[2].display_name(), "Chaminda");
    }

    #[test]
    fn test_type_alias() {
        let items = lecturers();
        assert_eq!(items[0].lecturer_type, "Visiting");
        assert_eq!(items[1].lecturer_type, "Permanent");
    }

    #[test]
    fn test_search_composed_name() {
        let items = lecturers();
        assert_eq!(search(&items, "ruwan silva")[0].id.as_str(), "l1");
        assert_eq!(search(&items, "moratuwa")[0].id.as_str(), "l1");
    }

    #[test]
    fn test_most_experienced_first() {
        let items = lecturers();
        let query = ListQuery::new().sort(SortSpec::desc(LecturerSort::Experience));
        let ids: Vec<_> = apply(&items, &query).into_iter().map(|l| l.id.0).collect();
        assert_eq!(ids, vec!["l2", "l1", "l3"]);
    }
}
