use crate::domain::common::{lenient, RecordId, Resource};
use crate::enums::ResourceKind;
use crate::shared::listing::{compare_dates, compare_number, compare_text, FieldValue, Listable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VacancyStatus {
    #[default]
    Draft,
    Published,
    Filled,
    #[serde(other)]
    Other,
}

impl VacancyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VacancyStatus::Draft => "Draft",
            VacancyStatus::Published => "Published",
            VacancyStatus::Filled => "Filled",
            VacancyStatus::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyRef {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub logo: String,
}

/// Open position posted by a company
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobVacancy {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(deserialize_with = "lenient::string")]
    pub position_title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub job_type: String,
    #[serde(deserialize_with = "lenient::string")]
    pub employment_type: String,
    #[serde(deserialize_with = "lenient::string")]
    pub experience_level: String,
    #[serde(deserialize_with = "lenient::number")]
    pub years_of_experience: Option<f64>,
    #[serde(deserialize_with = "lenient::string")]
    pub city: String,
    #[serde(deserialize_with = "lenient::string")]
    pub country: String,
    #[serde(deserialize_with = "lenient::string")]
    pub contact_email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub company_website: String,
    #[serde(deserialize_with = "lenient::strings")]
    pub qualifications: Vec<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub status: VacancyStatus,
    #[serde(deserialize_with = "lenient::or_default")]
    pub company: CompanyRef,
    #[serde(deserialize_with = "lenient::string")]
    pub created_at: String,
    #[serde(deserialize_with = "lenient::string")]
    pub application_deadline: String,
}

impl JobVacancy {
    /// "City, Country" with empty parts left out
    pub fn location(&self) -> String {
        [self.city.trim(), self.country.trim()]
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Resource for JobVacancy {
    const KIND: ResourceKind = ResourceKind::JobVacancies;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn is_visible(&self) -> bool {
        self.status == VacancyStatus::Published
    }

    fn display_name(&self) -> String {
        self.position_title.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobVacancyField {
    Title,
    Company,
    City,
    JobType,
    EmploymentType,
    ExperienceLevel,
    Qualifications,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobVacancySort {
    Title,
    Experience,
    /// Posting date; pair with descending for newest first
    Posted,
}

impl Listable for JobVacancy {
    type Field = JobVacancyField;
    type SortKey = JobVacancySort;

    fn search_fields() -> &'static [JobVacancyField] {
        &[
            JobVacancyField::Title,
            JobVacancyField::Company,
            JobVacancyField::City,
            JobVacancyField::Qualifications,
        ]
    }

    fn field(&self, field: JobVacancyField) -> FieldValue<'_> {
        match field {
            JobVacancyField::Title => FieldValue::text(&self.position_title),
            JobVacancyField::Company => FieldValue::text(&self.company.name),
            JobVacancyField::City => FieldValue::text(&self.city),
            JobVacancyField::JobType => FieldValue::text(&self.job_type),
            JobVacancyField::EmploymentType => FieldValue::text(&self.employment_type),
            JobVacancyField::ExperienceLevel => FieldValue::text(&self.experience_level),
            JobVacancyField::Qualifications => FieldValue::List(&self.qualifications),
        }
    }

    fn compare(&self, other: &Self, key: JobVacancySort) -> Ordering {
        match key {
            JobVacancySort::Title => compare_text(&self.position_title, &other.position_title),
            JobVacancySort::Experience => {
                compare_number(self.years_of_experience, other.years_of_experience)
            }
            JobVacancySort::Posted => compare_dates(&self.created_at, &other.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::visible_only;
    use crate::shared::listing::{apply, distinct_values, Filter, ListQuery, SortSpec};

    fn vacancies() -> Vec<JobVacancy> {
        serde_json::from_value(serde_json::json!([
            { "_id": "v1", "positionTitle": "HVAC Engineer", "city": "Colombo", "country": "Sri Lanka",
              "jobType": "Engineering", "status": "Published", "company": { "name": "Alpha Consult" },
              "createdAt": "2024-03-01T08:00:00Z" },
            { "_id": "v2", "positionTitle": "Electrician", "city": "Kandy", "jobType": "Technical",
              "status": "Draft", "createdAt": "2024-04-10" },
            { "_id": "v3", "positionTitle": "Plumbing Supervisor", "city": "Colombo",
              "jobType": "Technical", "status": "Archived", "createdAt": "2024-05-20T10:30:00Z" }
        ]))
        .unwrap()
    }

    #[test]
    fn test_unknown_status_decodes_as_other() {
        let items = vacancies();
        assert_eq!(items[2].status, VacancyStatus::Other);
        assert_eq!(items[1].company, CompanyRef::default());
    }

    #[test]
    fn test_only_published_is_public() {
        let public = visible_only(&vacancies());
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].id.as_str(), "v1");
    }

    #[test]
    fn test_newest_first() {
        let query = ListQuery::new().sort(SortSpec::desc(JobVacancySort::Posted));
        let ids: Vec<_> = apply(&vacancies(), &query).into_iter().map(|v| v.id.0).collect();
        assert_eq!(ids, vec!["v3", "v2", "v1"]);
    }

    #[test]
    fn test_search_company_and_city_filter() {
        let query = ListQuery::new()
            .search("alpha")
            .filter(Filter::Equals(JobVacancyField::City, "Colombo".into()));
        let found = apply(&vacancies(), &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].location(), "Colombo, Sri Lanka");
        assert_eq!(
            distinct_values(&vacancies(), JobVacancyField::JobType),
            vec!["Engineering", "Technical"]
        );
    }
}
