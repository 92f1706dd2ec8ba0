use crate::domain::common::{lenient, FirmProfile, RecordId, Resource};
use crate::enums::ResourceKind;
use crate::shared::listing::{compare_text, FieldValue, Listable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Contracting firm carrying out MEP installation work
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contractor {
    #[serde(flatten)]
    pub firm: FirmProfile,
    #[serde(deserialize_with = "lenient::string")]
    pub contractor_type: String,
}

impl Resource for Contractor {
    const KIND: ResourceKind = ResourceKind::Contractors;

    fn id(&self) -> &RecordId {
        &self.firm.id
    }

    fn is_visible(&self) -> bool {
        self.firm.visible
    }

    fn display_name(&self) -> String {
        self.firm.name.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractorField {
    Name,
    Email,
    Address,
    Specialties,
    ContractorType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractorSort {
    Name,
}

impl Listable for Contractor {
    type Field = ContractorField;
    type SortKey = ContractorSort;

    fn search_fields() -> &'static [ContractorField] {
        &[
            ContractorField::Name,
            ContractorField::Email,
            ContractorField::Address,
            ContractorField::Specialties,
        ]
    }

    fn field(&self, field: ContractorField) -> FieldValue<'_> {
        match field {
            ContractorField::Name => FieldValue::text(&self.firm.name),
            ContractorField::Email => FieldValue::text(&self.firm.company_email),
            ContractorField::Address => FieldValue::text(&self.firm.company_address),
            ContractorField::Specialties => FieldValue::List(&self.firm.specialties),
            ContractorField::ContractorType => FieldValue::text(&self.contractor_type),
        }
    }

    fn compare(&self, other: &Self, key: ContractorSort) -> Ordering {
        match key {
            ContractorSort::Name => compare_text(&self.firm.name, &other.firm.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listing::{apply, distinct_values, Filter, ListQuery};
    use std::collections::BTreeSet;

    fn contractors() -> Vec<Contractor> {
        serde_json::from_value(serde_json::json!([
            { "_id": "k1", "name": "Lanka Electro Works", "contractorType": "Electrical",
              "specialties": ["Low Voltage", "Solar PV"], "visible": true },
            { "_id": "k2", "name": "Island Aircon", "contractorType": "HVAC",
              "specialties": ["Chillers", "VRF"], "visible": true },
            { "_id": "k3", "name": "Metro Fire & Plumbing", "contractorType": "Plumbing",
              "specialties": ["Solar PV", "Fire Sprinklers", "Low Voltage"], "visible": true }
        ]))
        .unwrap()
    }

    #[test]
    fn test_contractor_type_on_the_wire() {
        let items = contractors();
        assert_eq!(items[1].contractor_type, "HVAC");
        assert_eq!(items[1].display_name(), "Island Aircon");
    }

    #[test]
    fn test_specialty_tags_require_all() {
        let items = contractors();
        let tags: BTreeSet<String> = ["Low Voltage".to_string(), "Solar PV".to_string()].into();
        let query = ListQuery::new().filter(Filter::HasAllTags(ContractorField::Specialties, tags));
        let ids: Vec<_> = apply(&items, &query).into_iter().map(|c| c.firm.id.0).collect();
        assert_eq!(ids, vec!["k1", "k3"]);
    }

    #[test]
    fn test_type_options() {
        assert_eq!(
            distinct_values(&contractors(), ContractorField::ContractorType),
            vec!["Electrical", "HVAC", "Plumbing"]
        );
    }
}
