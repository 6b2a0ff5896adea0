//! Persisted form configuration document

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Assignment of a field to at most one conditional group.
///
/// An empty `type` means the field is not governed by any conditional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConditions {
    #[serde(rename = "type", default)]
    pub group: String,
}

impl FieldConditions {
    /// Assignment pointing at no conditional group
    pub fn cleared() -> Self {
        Self {
            group: String::new(),
        }
    }

    /// Assignment pointing at the given conditional group
    pub fn assigned(group_id: &str) -> Self {
        Self {
            group: group_id.to_string(),
        }
    }
}

/// A single field definition inside the form configuration.
///
/// Only the conditional assignment is interpreted here; everything else the
/// editing surface put on the field is carried through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldDefinition {
    #[serde(default)]
    pub conditions: FieldConditions,
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

/// The `conditional_groups` section of the configuration.
///
/// Serializes to `{}` when no conditions list is present, which is the
/// persisted shape for a form without conditionals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionalGroups {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Value>,
}

/// The `config` section of a form document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub fields: HashMap<String, FieldDefinition>,
    #[serde(default)]
    pub conditional_groups: ConditionalGroups,
    #[serde(default)]
    pub processors: Map<String, Value>,
    #[serde(flatten)]
    pub legacy: Map<String, Value>,
}

/// The complete persisted configuration for one form.
///
/// The top-level `conditions` entry duplicates
/// `config.conditional_groups.conditions`; consumers that predate the nested
/// location still read it from the root, so both placements are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormDocument {
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(default)]
    pub config: FormConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Value>,
    #[serde(flatten)]
    pub legacy: Map<String, Value>,
}

impl FormDocument {
    /// Build a document from the host-provided initial state.
    ///
    /// A document without a `fields` entry gets an empty field map, so every
    /// later pass over `config.fields` can assume the map exists.
    pub fn from_host_value(value: Value) -> Result<Self> {
        let document: FormDocument = serde_json::from_value(value)?;
        Ok(document)
    }

    /// Look up a field definition by id
    #[allow(dead_code)]
    pub fn field(&self, field_id: &str) -> Option<&FieldDefinition> {
        self.config.fields.get(field_id)
    }
}
