//! Transforms from editing state to the persisted document shapes

use crate::state::{ConditionalDefinition, ProcessorDefinition};
use serde_json::{Map, Value};

/// Produce the persisted conditional list.
///
/// The output order follows the input order; downstream consumers rely on it
/// when resolving which group owns a contested field.
pub fn prepare_conditionals_for_save(groups: &[ConditionalDefinition]) -> Value {
    Value::Array(groups.iter().map(conditional_to_persisted).collect())
}

fn conditional_to_persisted(group: &ConditionalDefinition) -> Value {
    let mut persisted = Map::new();
    persisted.insert("id".to_string(), Value::String(group.id.clone()));
    persisted.insert("name".to_string(), Value::String(group.name.clone()));
    persisted.insert("type".to_string(), Value::String(group.behavior.clone()));
    if let Some(config) = &group.config {
        let mut persisted_config = Map::new();
        if let Some(applies_to) = &config.applies_to {
            persisted_config.insert(
                "appliesTo".to_string(),
                Value::Array(applies_to.iter().cloned().map(Value::String).collect()),
            );
        }
        for (key, value) in &config.rules {
            persisted_config.insert(key.clone(), value.clone());
        }
        persisted.insert("config".to_string(), Value::Object(persisted_config));
    }
    Value::Object(persisted)
}

/// Produce the persisted processor map, keyed by processor id
pub fn prepare_processors_for_save(processors: &[ProcessorDefinition]) -> Map<String, Value> {
    let mut persisted = Map::new();
    for processor in processors {
        let mut entry = Map::new();
        entry.insert("ID".to_string(), Value::String(processor.id.clone()));
        entry.insert(
            "type".to_string(),
            Value::String(processor.processor_type.clone()),
        );
        entry.insert("config".to_string(), Value::Object(processor.config.clone()));
        persisted.insert(processor.id.clone(), Value::Object(entry));
    }
    persisted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConditionalConfig;
    use pretty_assertions::assert_eq;
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

    #[test]
    fn test_conditionals_preserve_order() {
        let groups = vec![
            create_test_group("con_b", &[]),
            create_test_group("con_a", &[]),
        ];
        let prepared = prepare_conditionals_for_save(&groups);
        let list = prepared.as_array().unwrap();
        assert_eq!(list[0]["id"], json!("con_b"));
        assert_eq!(list[1]["id"], json!("con_a"));
    }

    #[test]
    fn test_conditional_shape() {
        let prepared = prepare_conditionals_for_save(&[create_test_group("con_1", &["fld_1"])]);
        assert_eq!(
            prepared,
            json!([{
                "id": "con_1",
                "name": "Group con_1",
                "type": "show",
                "config": { "appliesTo": ["fld_1"] }
            }])
        );
    }

    #[test]
    fn test_conditional_without_config_omits_config_key() {
        let group = ConditionalDefinition {
            id: "con_1".to_string(),
            name: "bare".to_string(),
            behavior: "show".to_string(),
            config: None,
        };
        let prepared = prepare_conditionals_for_save(&[group]);
        assert!(prepared[0].get("config").is_none());
    }

    #[test]
    fn test_conditional_rule_keys_carried_through() {
        let mut group = create_test_group("con_1", &[]);
        if let Some(config) = &mut group.config {
            config.rules.insert("group".to_string(), json!({ "rw1": [] }));
        }
        let prepared = prepare_conditionals_for_save(&[group]);
        assert_eq!(prepared[0]["config"]["group"], json!({ "rw1": [] }));
    }

    #[test]
    fn test_empty_conditional_list() {
        assert_eq!(prepare_conditionals_for_save(&[]), json!([]));
    }

    #[test]
    fn test_processors_keyed_by_id() {
        let processors = vec![
            ProcessorDefinition {
                id: "fp_1".to_string(),
                processor_type: "auto_responder".to_string(),
                config: Map::new(),
            },
            ProcessorDefinition {
                id: "fp_2".to_string(),
                processor_type: "mailer".to_string(),
                config: Map::new(),
            },
        ];
        let persisted = prepare_processors_for_save(&processors);
        assert_eq!(persisted.len(), 2);
        assert_eq!(persisted["fp_1"]["type"], json!("auto_responder"));
        assert_eq!(persisted["fp_2"]["ID"], json!("fp_2"));
    }

    #[test]
    fn test_processor_config_carried_through() {
        let mut config = Map::new();
        config.insert("recipients".to_string(), json!(["a@b.c"]));
        let processors = vec![ProcessorDefinition {
            id: "fp_1".to_string(),
            processor_type: "mailer".to_string(),
            config,
        }];
        let persisted = prepare_processors_for_save(&processors);
        assert_eq!(persisted["fp_1"]["config"]["recipients"], json!(["a@b.c"]));
    }

    #[test]
    fn test_empty_processor_list() {
        assert!(prepare_processors_for_save(&[]).is_empty());
    }
}
