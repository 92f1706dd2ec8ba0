//! Messages sent from the public contact page. Write-only: the app posts
//! them and never lists them.

use crate::domain::common::{RecordId, Resource};
use crate::enums::ResourceKind;
use crate::shared::admin_crud::FormModel;
use crate::shared::validation::FieldErrors;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactMessage {
    #[serde(rename = "_id", skip_serializing_if = "RecordId::is_empty")]
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subject: String,
    pub message: String,
}

impl Resource for ContactMessage {
    const KIND: ResourceKind = ResourceKind::Contact;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn is_visible(&self) -> bool {
        false
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl FormModel for ContactForm {
    type Record = ContactMessage;
    type Payload = ContactMessage;

    fn from_record(record: &ContactMessage) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            subject: record.subject.clone(),
            message: record.message.clone(),
        }
    }

    fn validate(&self) -> Result<ContactMessage, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", "Name", &self.name);
        errors.require_email("email", &self.email);
        errors.require("message", "Message", &self.message);
        errors.into_result()?;

        Ok(ContactMessage {
            id: RecordId::default(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::admin_crud::AdminCrud;
    use crate::shared::api::HttpMethod;

    #[test]
    fn test_requires_name_email_message() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("message"), Some("Message is required"));
        assert_eq!(errors.get("phone"), None);
    }

    #[test]
    fn test_bad_email() {
        let form = ContactForm {
            name: "Ruwan".into(),
            email: "ruwan@".into(),
            message: "Hello".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate().unwrap_err().get("email"),
            Some("Enter a valid email address")
        );
    }

    #[test]
    fn test_posts_to_contact_without_empty_optionals() {
        let mut crud: AdminCrud<ContactForm> = AdminCrud::new();
        crud.open_create();
        crud.edit_form(|f| {
            f.name = "Ruwan".into();
            f.email = "ruwan@example.lk".into();
            f.message = " Need a quote ".into();
        });
        let call = crud.submit().unwrap();
        assert_eq!(call.method, HttpMethod::Post);
        assert_eq!(call.path, "/contact");
        let body = call.body.unwrap();
        assert_eq!(body["message"], "Need a quote");
        assert!(body.get("phone").is_none());
        assert!(body.get("_id").is_none());
    }
}
