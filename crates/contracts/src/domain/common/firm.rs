use super::{lenient, RecordId};
use serde::{Deserialize, Serialize};

/// Fields shared by company-level records (consultants, contractors)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FirmProfile {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub company_email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub company_website: String,
    #[serde(deserialize_with = "lenient::string")]
    pub company_address: String,
    #[serde(deserialize_with = "lenient::string")]
    pub contact_number: String,
    #[serde(deserialize_with = "lenient::strings")]
    pub specialties: Vec<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub visible: bool,
}
