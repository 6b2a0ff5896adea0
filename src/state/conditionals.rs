//! Conditional group definitions and their state holder

use crate::state::FormDocument;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Configuration block of a conditional group.
///
/// `applies_to` is the ordered list of field ids the group governs; the rule
/// rows themselves are opaque to this client and carried as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionalConfig {
    #[serde(rename = "appliesTo", default, skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<Vec<String>>,
    #[serde(flatten)]
    pub rules: Map<String, Value>,
}

/// A single conditional group definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalDefinition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default = "default_behavior")]
    pub behavior: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ConditionalConfig>,
}

fn default_behavior() -> String {
    "show".to_string()
}

impl ConditionalDefinition {
    /// Create a new group with a client-generated id
    #[allow(dead_code)]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: format!("con_{}", Uuid::new_v4().simple()),
            name: name.into(),
            behavior: default_behavior(),
            config: None,
        }
    }

    /// Field ids this group applies to (empty when none are set)
    pub fn applies_to(&self) -> &[String] {
        self.config
            .as_ref()
            .and_then(|config| config.applies_to.as_deref())
            .unwrap_or(&[])
    }
}

/// Holder for the ordered conditional group list.
///
/// The list order is significant: when two groups claim the same field, the
/// later one in this list wins the field assignment at save time.
#[derive(Debug, Default)]
pub struct ConditionalsState {
    groups: Vec<ConditionalDefinition>,
    has_conditionals: bool,
}

impl ConditionalsState {
    #[allow(dead_code)]
    pub fn new(groups: Vec<ConditionalDefinition>, has_conditionals: bool) -> Self {
        Self {
            groups,
            has_conditionals,
        }
    }

    /// Populate from a saved document's `conditional_groups.conditions` list
    pub fn from_document(document: &FormDocument) -> Self {
        let groups: Vec<ConditionalDefinition> = document
            .config
            .conditional_groups
            .conditions
            .as_ref()
            .and_then(|conditions| {
                serde_json::from_value(conditions.clone())
                    .map_err(|e| {
                        tracing::warn!("discarding unreadable conditional groups: {e}");
                        e
                    })
                    .ok()
            })
            .unwrap_or_default();
        let has_conditionals = !groups.is_empty();
        Self {
            groups,
            has_conditionals,
        }
    }

    pub fn groups(&self) -> &[ConditionalDefinition] {
        &self.groups
    }

    pub fn has_conditionals(&self) -> bool {
        self.has_conditionals
    }

    /// Append a group to the end of the list
    #[allow(dead_code)]
    pub fn add_group(&mut self, group: ConditionalDefinition) {
        tracing::debug!(group_id = %group.id, name = %group.name, "conditional group added");
        self.groups.push(group);
        self.has_conditionals = true;
    }

    /// Remove a group by id; unknown ids are ignored
    #[allow(dead_code)]
    pub fn remove_group(&mut self, group_id: &str) {
        self.groups.retain(|group| group.id != group_id);
        self.has_conditionals = !self.groups.is_empty();
    }

    /// Replace the applies-to list of a group; unknown ids are ignored
    #[allow(dead_code)]
    pub fn set_applies_to(&mut self, group_id: &str, field_ids: Vec<String>) {
        if let Some(group) = self.groups.iter_mut().find(|group| group.id == group_id) {
            tracing::debug!(group_id = %group.id, targets = field_ids.len(), "applies-to updated");
            group.config.get_or_insert_with(ConditionalConfig::default).applies_to =
                Some(field_ids);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_group(id: &str, applies_to: &[&str]) -> ConditionalDefinition {
        ConditionalDefinition {
            id: id.to_string(),
            name: format!("Group {id}"),
            behavior: "show".to_string(),
            config: Some(ConditionalConfig {
                applies_to: Some(applies_to.iter().map(|s| s.to_string()).collect()),
                rules: Map::new(),
            }),
        }
    }

    mod definition {
        use super::*;

        #[test]
        fn test_new_generates_prefixed_id() {
            let group = ConditionalDefinition::new("Show email");
            assert!(group.id.starts_with("con_"));
            assert_eq!(group.name, "Show email");
            assert_eq!(group.behavior, "show");
        }

        #[test]
        fn test_new_ids_are_unique() {
            let a = ConditionalDefinition::new("a");
            let b = ConditionalDefinition::new("b");
            assert_ne!(a.id, b.id);
        }

        #[test]
        fn test_applies_to_empty_without_config() {
            let group = ConditionalDefinition::new("bare");
            assert!(group.applies_to().is_empty());
        }

        #[test]
        fn test_applies_to_returns_targets_in_order() {
            let group = create_test_group("con_1", &["fld_2", "fld_1"]);
            assert_eq!(group.applies_to(), ["fld_2", "fld_1"]);
        }

        #[test]
        fn test_deserializes_applies_to_camel_case() {
            let group: ConditionalDefinition = serde_json::from_value(json!({
                "id": "con_1",
                "name": "g",
                "config": { "appliesTo": ["fld_1"] }
            }))
            .unwrap();
            assert_eq!(group.applies_to(), ["fld_1"]);
        }

        #[test]
        fn test_missing_behavior_defaults_to_show() {
            let group: ConditionalDefinition =
                serde_json::from_value(json!({ "id": "con_1" })).unwrap();
            assert_eq!(group.behavior, "show");
        }

        #[test]
        fn test_opaque_rule_keys_survive_round_trip() {
            let raw = json!({
                "id": "con_1",
                "name": "g",
                "type": "hide",
                "config": { "appliesTo": [], "group": { "rw1": [] } }
            });
            let group: ConditionalDefinition = serde_json::from_value(raw.clone()).unwrap();
            assert_eq!(serde_json::to_value(&group).unwrap(), raw);
        }
    }

    mod state {
        use super::*;

        #[test]
        fn test_default_is_empty_and_gated_off() {
            let state = ConditionalsState::default();
            assert!(state.groups().is_empty());
            assert!(!state.has_conditionals());
        }

        #[test]
        fn test_from_document_populates_groups() {
            let document = FormDocument::from_host_value(json!({
                "ID": "CF1",
                "config": {
                    "conditional_groups": {
                        "conditions": [
                            { "id": "con_1", "name": "a" },
                            { "id": "con_2", "name": "b" }
                        ]
                    }
                }
            }))
            .unwrap();
            let state = ConditionalsState::from_document(&document);
            assert_eq!(state.groups().len(), 2);
            assert_eq!(state.groups()[0].id, "con_1");
            assert!(state.has_conditionals());
        }

        #[test]
        fn test_from_document_without_section_is_gated_off() {
            let document =
                FormDocument::from_host_value(json!({ "ID": "CF1", "config": {} })).unwrap();
            let state = ConditionalsState::from_document(&document);
            assert!(state.groups().is_empty());
            assert!(!state.has_conditionals());
        }

        #[test]
        fn test_add_group_turns_gate_on() {
            let mut state = ConditionalsState::default();
            state.add_group(ConditionalDefinition::new("first"));
            assert!(state.has_conditionals());
            assert_eq!(state.groups().len(), 1);
        }

        #[test]
        fn test_remove_last_group_turns_gate_off() {
            let mut state = ConditionalsState::default();
            let group = create_test_group("con_1", &[]);
            state.add_group(group);
            state.remove_group("con_1");
            assert!(!state.has_conditionals());
        }

        #[test]
        fn test_remove_unknown_group_is_noop() {
            let mut state = ConditionalsState::default();
            state.add_group(create_test_group("con_1", &[]));
            state.remove_group("con_404");
            assert_eq!(state.groups().len(), 1);
        }

        #[test]
        fn test_set_applies_to_creates_config_when_missing() {
            let mut state = ConditionalsState::default();
            state.add_group(ConditionalDefinition::new("bare"));
            let id = state.groups()[0].id.clone();
            state.set_applies_to(&id, vec!["fld_1".to_string()]);
            assert_eq!(state.groups()[0].applies_to(), ["fld_1"]);
        }
    }
}
