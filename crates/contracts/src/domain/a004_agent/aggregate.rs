use crate::domain::common::{lenient, RecordId, Resource};
use crate::enums::ResourceKind;
use crate::shared::listing::{compare_text, FieldValue, Listable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How an equipment company relates to the brands it sells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentRole {
    #[default]
    Agent,
    Supplier,
    Dealer,
    #[serde(other)]
    Other,
}

impl AgentRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRole::Agent => "agent",
            AgentRole::Supplier => "supplier",
            AgentRole::Dealer => "dealer",
            AgentRole::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AgentRole::Agent => "Agent",
            AgentRole::Supplier => "Supplier",
            AgentRole::Dealer => "Dealer",
            AgentRole::Other => "Other",
        }
    }

    pub fn all() -> [AgentRole; 3] {
        [AgentRole::Agent, AgentRole::Supplier, AgentRole::Dealer]
    }
}

/// Local agent, supplier or dealer of MEP equipment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Agent {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub role: AgentRole,
    #[serde(deserialize_with = "lenient::strings")]
    pub equipment_type: Vec<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub brands: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub company_email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub company_website: String,
    #[serde(deserialize_with = "lenient::string")]
    pub contact_number: String,
    #[serde(deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub visible: bool,
}

impl Resource for Agent {
    const KIND: ResourceKind = ResourceKind::Agents;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentField {
    Name,
    Email,
    Location,
    EquipmentType,
    Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentSort {
    Name,
    Location,
}

impl Listable for Agent {
    type Field = AgentField;
    type SortKey = AgentSort;

    fn search_fields() -> &'static [AgentField] {
        &[
            AgentField::Name,
            AgentField::Email,
            AgentField::Location,
            AgentField::EquipmentType,
        ]
    }

    fn field(&self, field: AgentField) -> FieldValue<'_> {
        match field {
            AgentField::Name => FieldValue::text(&self.name),
            AgentField::Email => FieldValue::text(&self.company_email),
            AgentField::Location => FieldValue::text(&self.location),
            AgentField::EquipmentType => FieldValue::List(&self.equipment_type),
            AgentField::Role => FieldValue::text(self.role.as_str()),
        }
    }

    fn compare(&self, other: &Self, key: AgentSort) -> Ordering {
        match key {
            AgentSort::Name => compare_text(&self.name, &other.name),
            AgentSort::Location => compare_text(&self.location, &other.location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listing::{apply, search, Filter, ListQuery};

    fn agents() -> Vec<Agent> {
        serde_json::from_value(serde_json::json!([
            { "_id": "g1", "name": "Daikin Lanka", "role": "agent",
              "equipmentType": ["Chillers", "VRF"], "location": "Colombo", "visible": true },
            { "_id": "g2", "name": "Pump House", "role": "dealer",
              "equipmentType": ["Pumps"], "location": "Kurunegala", "visible": true },
            { "_id": "g3", "name": "Cable World", "role": "wholesaler",
              "equipmentType": ["Cables"], "location": "Colombo", "visible": true }
        ]))
        .unwrap()
    }

    #[test]
    fn test_unknown_role_does_not_break_the_list() {
        let items = agents();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].role, AgentRole::Other);
        assert_eq!(items[1].role, AgentRole::Dealer);
    }

    #[test]
    fn test_role_filter() {
        let items = agents();
        let query = ListQuery::new().filter(Filter::Equals(AgentField::Role, "dealer".into()));
        let result = apply(&items, &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Pump House");
    }

    #[test]
    fn test_search_equipment() {
        let items = agents();
        assert_eq!(search(&items, "vrf")[0].id.as_str(), "g1");
        assert_eq!(search(&items, "colombo").len(), 2);
    }
}
