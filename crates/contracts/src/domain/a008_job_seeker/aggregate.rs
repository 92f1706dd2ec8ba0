use crate::domain::common::{lenient, RecordId, Resource};
use crate::enums::ResourceKind;
use crate::shared::listing::{compare_number, compare_text, FieldValue, Listable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Professional types offered in the registration form and filters
pub const PROFESSIONAL_TYPES: [&str; 6] = [
    "Engineer",
    "Technician",
    "Draughtsman",
    "Project Manager",
    "Quantity Surveyor",
    "Supervisor",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkHistoryEntry {
    #[serde(deserialize_with = "lenient::string")]
    pub job_title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(deserialize_with = "lenient::string")]
    pub duration: String,
}

impl WorkHistoryEntry {
    pub fn is_blank(&self) -> bool {
        self.job_title.trim().is_empty()
            && self.company.trim().is_empty()
            && self.duration.trim().is_empty()
    }
}

/// Individual looking for MEP work
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSeeker {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(deserialize_with = "lenient::string")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub last_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub contact_number: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub professional_type: String,
    #[serde(deserialize_with = "lenient::number")]
    pub years_of_experience: Option<f64>,
    #[serde(deserialize_with = "lenient::flag")]
    pub currently_employed: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub current_company: String,
    #[serde(deserialize_with = "lenient::string")]
    pub highest_qualification: String,
    #[serde(deserialize_with = "lenient::list")]
    pub work_history: Vec<WorkHistoryEntry>,
    #[serde(deserialize_with = "lenient::flag")]
    pub visible: bool,
}

impl JobSeeker {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

impl Resource for JobSeeker {
    const KIND: ResourceKind = ResourceKind::JobSeekers;

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
pub enum JobSeekerField {
    Name,
    Email,
    ProfessionalType,
    CurrentCompany,
    Qualification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobSeekerSort {
    Name,
    Experience,
}

impl Listable for JobSeeker {
    type Field = JobSeekerField;
    type SortKey = JobSeekerSort;

    fn search_fields() -> &'static [JobSeekerField] {
        &[
            JobSeekerField::Name,
            JobSeekerField::Email,
            JobSeekerField::ProfessionalType,
            JobSeekerField::CurrentCompany,
            JobSeekerField::Qualification,
        ]
    }

    fn field(&self, field: JobSeekerField) -> FieldValue<'_> {
        match field {
            JobSeekerField::Name => FieldValue::owned(self.full_name()),
            JobSeekerField::Email => FieldValue::text(&self.email),
            JobSeekerField::ProfessionalType => FieldValue::text(&self.professional_type),
            JobSeekerField::CurrentCompany => FieldValue::text(&self.current_company),
            JobSeekerField::Qualification => FieldValue::text(&self.highest_qualification),
        }
    }

    fn compare(&self, other: &Self, key: JobSeekerSort) -> Ordering {
        match key {
            JobSeekerSort::Name => compare_text(&self.full_name(), &other.full_name()),
            JobSeekerSort::Experience => {
                compare_number(self.years_of_experience, other.years_of_experience)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listing::{apply, search, Filter, ListQuery, SortSpec};

    fn seekers() -> Vec<JobSeeker> {
        serde_json::from_value(serde_json::json!([
            { "_id": "s1", "firstName": "Kasun", "lastName": "Perera", "professionalType": "Engineer",
              "yearsOfExperience": 5, "currentlyEmployed": true, "currentCompany": "Beta Mech",
              "workHistory": [{ "jobTitle": "Site Engineer", "company": "Beta Mech", "duration": "3 years" }],
              "visible": true },
            { "_id": "s2", "firstName": "Nadeesha", "lastName": "Kumari", "professionalType": "Technician",
              "yearsOfExperience": "2", "visible": false },
            { "_id": "s3", "firstName": "amal", "lastName": "Bandara", "professionalType": "Engineer",
              "yearsOfExperience": 9, "visible": true }
        ]))
        .unwrap()
    }

    #[test]
    fn test_work_history_decodes() {
        let items = seekers();
        assert_eq!(items[0].work_history.len(), 1);
        assert_eq!(items[0].work_history[0].job_title, "Site Engineer");
        assert!(items[1].work_history.is_empty());
    }

    #[test]
    fn test_null_fields_do_not_fail_the_list() {
        let items: Vec<JobSeeker> = serde_json::from_value(serde_json::json!([
            { "_id": "s1", "firstName": "Kasun", "visible": true },
            { "_id": "s2", "firstName": "Amal", "currentCompany": null, "workHistory": null,
              "currentlyEmployed": null, "contactNumber": 771234567, "visible": true }
        ]))
        .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].current_company, "");
        assert!(items[1].work_history.is_empty());
        assert!(!items[1].currently_employed);
        assert_eq!(items[1].contact_number, "771234567");
    }

    #[test]
    fn test_search_full_name_and_company() {
        let items = seekers();
        assert_eq!(search(&items, "kasun perera")[0].id.as_str(), "s1");
        assert_eq!(search(&items, "beta")[0].id.as_str(), "s1");
    }

    #[test]
    fn test_engineers_by_name() {
        let query = ListQuery::new()
            .filter(Filter::Equals(JobSeekerField::ProfessionalType, "Engineer".into()))
            .sort(SortSpec::asc(JobSeekerSort::Name));
        let names: Vec<_> = apply(&seekers(), &query).into_iter().map(|s| s.full_name()).collect();
        assert_eq!(names, vec!["amal Bandara", "Kasun Perera"]);
    }
}
