use super::aggregate::{JobSeeker, WorkHistoryEntry};
use crate::domain::common::lenient::format_number;
use crate::shared::admin_crud::FormModel;
use crate::shared::validation::FieldErrors;
use serde::Serialize;

/// Admin form for a job seeker; inputs are kept as typed
#[derive(Debug, Clone, PartialEq)]
pub struct JobSeekerForm {
    pub first_name: String,
    pub last_name: String,
    pub contact_number: String,
    pub email: String,
    pub professional_type: String,
    pub years_of_experience: String,
    pub currently_employed: bool,
    pub current_company: String,
    pub highest_qualification: String,
    pub work_history: Vec<WorkHistoryEntry>,
    pub visible: bool,
}

impl Default for JobSeekerForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            contact_number: String::new(),
            email: String::new(),
            professional_type: String::new(),
            years_of_experience: String::new(),
            currently_employed: false,
            current_company: String::new(),
            highest_qualification: String::new(),
            work_history: Vec::new(),
            visible: true,
        }
    }
}

/// Body of `POST /jobseekers` and `PUT /jobseekers/:id`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSeekerPayload {
    pub first_name: String,
    pub last_name: String,
    pub contact_number: String,
    pub email: String,
    pub professional_type: String,
    pub years_of_experience: f64,
    pub currently_employed: bool,
    pub current_company: String,
    pub highest_qualification: String,
    pub work_history: Vec<WorkHistoryEntry>,
    pub visible: bool,
}

impl FormModel for JobSeekerForm {
    type Record = JobSeeker;
    type Payload = JobSeekerPayload;

    fn from_record(record: &JobSeeker) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            contact_number: record.contact_number.clone(),
            email: record.email.clone(),
            professional_type: record.professional_type.clone(),
            years_of_experience: record
                .years_of_experience
                .map(format_number)
                .unwrap_or_default(),
            currently_employed: record.currently_employed,
            current_company: record.current_company.clone(),
            highest_qualification: record.highest_qualification.clone(),
            work_history: record.work_history.clone(),
            visible: record.visible,
        }
    }

    fn validate(&self) -> Result<JobSeekerPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("firstName", "First name", &self.first_name);
        errors.require("lastName", "Last name", &self.last_name);
        errors.require("contactNumber", "Contact number", &self.contact_number);
        errors.require_email("email", &self.email);
        errors.require("professionalType", "Professional type", &self.professional_type);
        let years = errors.require_number("yearsOfExperience", "Years of experience", &self.years_of_experience);
        errors.require(
            "highestQualification",
            "Highest qualification",
            &self.highest_qualification,
        );
        if self.currently_employed {
            errors.require("currentCompany", "Current company", &self.current_company);
        }

        errors.into_result()?;

        Ok(JobSeekerPayload {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            contact_number: self.contact_number.trim().to_string(),
            email: self.email.trim().to_string(),
            professional_type: self.professional_type.trim().to_string(),
            years_of_experience: years.unwrap_or_default(),
            currently_employed: self.currently_employed,
            current_company: if self.currently_employed {
                self.current_company.trim().to_string()
            } else {
                String::new()
            },
            highest_qualification: self.highest_qualification.trim().to_string(),
            work_history: self
                .work_history
                .iter()
                .filter(|w| !w.is_blank())
                .cloned()
                .collect(),
            visible: self.visible,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> JobSeekerForm {
        JobSeekerForm {
            first_name: " Kasun ".into(),
            last_name: "Perera".into(),
            contact_number: "0771234567".into(),
            email: "kasun@example.lk".into(),
            professional_type: "Engineer".into(),
            years_of_experience: "5".into(),
            highest_qualification: "BSc".into(),
            work_history: vec![
                WorkHistoryEntry {
                    job_title: "Site Engineer".into(),
                    company: "Beta Mech".into(),
                    duration: "2 years".into(),
                },
                WorkHistoryEntry::default(),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = JobSeekerForm::default().validate().unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        for field in [
            "firstName",
            "lastName",
            "contactNumber",
            "email",
            "professionalType",
            "yearsOfExperience",
            "highestQualification",
        ] {
            assert!(fields.contains(&field), "missing error for {}", field);
        }
        assert!(!fields.contains(&"currentCompany"));
    }

    #[test]
    fn test_each_required_field_alone_blocks_submit() {
        let blanks: [fn(&mut JobSeekerForm); 7] = [
            |f| f.first_name.clear(),
            |f| f.last_name.clear(),
            |f| f.contact_number.clear(),
            |f| f.email.clear(),
            |f| f.professional_type.clear(),
            |f| f.years_of_experience.clear(),
            |f| f.highest_qualification.clear(),
        ];
        for blank in blanks {
            let mut form = valid();
            blank(&mut form);
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn test_years_must_be_numeric() {
        let mut form = valid();
        form.years_of_experience = "five".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("yearsOfExperience"),
            Some("Years of experience must be a number")
        );
    }

    #[test]
    fn test_employed_requires_company() {
        let mut form = valid();
        form.currently_employed = true;
        assert!(form.validate().unwrap_err().get("currentCompany").is_some());
        form.current_company = "Beta Mech".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_payload_is_trimmed_and_skips_blank_history() {
        let payload = valid().validate().unwrap();
        assert_eq!(payload.first_name, "Kasun");
        assert_eq!(payload.years_of_experience, 5.0);
        assert_eq!(payload.work_history.len(), 1);
        assert!(payload.visible);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["yearsOfExperience"], 5.0);
        assert_eq!(json["workHistory"][0]["jobTitle"], "Site Engineer");
    }
}
