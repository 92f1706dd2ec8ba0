use crate::domain::common::{lenient, FirmProfile, RecordId, Resource};
use crate::enums::ResourceKind;
use crate::shared::listing::{compare_text, FieldValue, Listable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Consulting firm (design, supervision, MEP engineering)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Consultant {
    #[serde(flatten)]
    pub firm: FirmProfile,
    #[serde(deserialize_with = "lenient::string")]
    pub consultant_type: String,
}

impl Resource for Consultant {
    const KIND: ResourceKind = ResourceKind::Consultants;

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
pub enum ConsultantField {
    Name,
    Email,
    Address,
    Specialties,
    ConsultantType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsultantSort {
    Name,
}

impl Listable for Consultant {
    type Field = ConsultantField;
    type SortKey = ConsultantSort;

    fn search_fields() -> &'static [ConsultantField] {
        &[
            ConsultantField::Name,
            ConsultantField::Email,
            ConsultantField::Address,
            ConsultantField::Specialties,
        ]
    }

    fn field(&self, field: ConsultantField) -> FieldValue<'_> {
        match field {
            ConsultantField::Name => FieldValue::text(&self.firm.name),
            ConsultantField::Email => FieldValue::text(&self.firm.company_email),
            ConsultantField::Address => FieldValue::text(&self.firm.company_address),
            ConsultantField::Specialties => FieldValue::List(&self.firm.specialties),
            ConsultantField::ConsultantType => FieldValue::text(&self.consultant_type),
        }
    }

    fn compare(&self, other: &Self, key: ConsultantSort) -> Ordering {
        match key {
            ConsultantSort::Name => compare_text(&self.firm.name, &other.firm.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::visible_only;
    use crate::shared::listing::{apply, search, Filter, ListQuery, SortSpec};

    fn consultants() -> Vec<Consultant> {
        serde_json::from_value(serde_json::json!([
            { "_id": "c1", "name": "Alpha Consult", "specialties": ["HVAC"],
              "companyEmail": "info@alpha.lk", "consultantType": "MEP", "visible": true },
            { "_id": "c2", "name": "Beta Mech", "specialties": ["Electrical"],
              "companyAddress": "12 Galle Road, Colombo 03", "consultantType": "Electrical", "visible": true },
            { "_id": "c3", "name": "Ceylon Plumb Design", "specialties": ["Plumbing", "HVAC"],
              "consultantType": "MEP", "visible": false }
        ]))
        .unwrap()
    }

    #[test]
    fn test_flattened_firm_fields() {
        let items = consultants();
        assert_eq!(items[0].firm.company_email, "info@alpha.lk");
        assert_eq!(items[0].consultant_type, "MEP");
        let json = serde_json::to_value(&items[0]).unwrap();
        assert_eq!(json["_id"], "c1");
        assert_eq!(json["consultantType"], "MEP");
    }

    #[test]
    fn test_numeric_phone_and_null_specialties() {
        let items: Vec<Consultant> = serde_json::from_value(serde_json::json!([
            { "_id": "c9", "name": "Delta MEP", "contactNumber": 771234567,
              "specialties": null, "companyEmail": null, "visible": true }
        ]))
        .unwrap();
        assert_eq!(items[0].firm.contact_number, "771234567");
        assert!(items[0].firm.specialties.is_empty());
        assert_eq!(items[0].firm.company_email, "");
        assert!(items[0].firm.visible);
    }

    #[test]
    fn test_search_alpha_example() {
        let items: Vec<Consultant> = consultants().into_iter().take(2).collect();
        let result = search(&items, "alpha");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].firm.name, "Alpha Consult");
        assert_eq!(result[0].firm.specialties, vec!["HVAC"]);
    }

    #[test]
    fn test_search_covers_address_and_email() {
        let items = consultants();
        assert_eq!(search(&items, "galle road")[0].firm.id.as_str(), "c2");
        assert_eq!(search(&items, "@ALPHA")[0].firm.id.as_str(), "c1");
        // consultant type is filterable but not searchable
        assert!(search(&items, "mep").is_empty());
    }

    #[test]
    fn test_visible_only_is_idempotent() {
        let items = consultants();
        let once = visible_only(&items);
        assert_eq!(once.len(), 2);
        assert!(once.iter().all(|c| c.firm.visible));
        assert_eq!(visible_only(&once), once);
    }

    #[test]
    fn test_type_filter_with_name_sort() {
        let items = consultants();
        let query = ListQuery::new()
            .filter(Filter::Equals(ConsultantField::ConsultantType, "MEP".into()))
            .sort(SortSpec::desc(ConsultantSort::Name));
        let names: Vec<_> = apply(&items, &query).into_iter().map(|c| c.firm.name).collect();
        assert_eq!(names, vec!["Ceylon Plumb Design", "Alpha Consult"]);
    }
}
