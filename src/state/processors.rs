//! Processor definitions and their state holder

use crate::state::FormDocument;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A post-submission processor attached to the form.
///
/// The processor configuration is owned by whichever integration defines it;
/// this client only keys it and passes it through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessorDefinition {
    #[serde(rename = "ID", alias = "id")]
    pub id: String,
    #[serde(rename = "type")]
    pub processor_type: String,
    #[serde(default)]
    pub config: Map<String, Value>,
}

/// Holder for the ordered processor list
#[derive(Debug, Default)]
pub struct ProcessorsState {
    processors: Vec<ProcessorDefinition>,
    has_processors: bool,
}

impl ProcessorsState {
    #[allow(dead_code)]
    pub fn new(processors: Vec<ProcessorDefinition>, has_processors: bool) -> Self {
        Self {
            processors,
            has_processors,
        }
    }

    /// Populate from a saved document's `processors` map.
    ///
    /// A document saved without processors carries an empty map there, which
    /// leaves the gate off.
    pub fn from_document(document: &FormDocument) -> Self {
        let mut processors = Vec::new();
        for (processor_id, raw) in &document.config.processors {
            match serde_json::from_value::<ProcessorDefinition>(raw.clone()) {
                Ok(processor) => processors.push(processor),
                Err(e) => {
                    tracing::warn!(%processor_id, "discarding unreadable processor: {e}");
                }
            }
        }
        let has_processors = !processors.is_empty();
        Self {
            processors,
            has_processors,
        }
    }

    pub fn processors(&self) -> &[ProcessorDefinition] {
        &self.processors
    }

    pub fn has_processors(&self) -> bool {
        self.has_processors
    }

    /// Append a processor to the end of the list
    #[allow(dead_code)]
    pub fn add_processor(&mut self, processor: ProcessorDefinition) {
        tracing::debug!(processor_id = %processor.id, kind = %processor.processor_type, "processor added");
        self.processors.push(processor);
        self.has_processors = true;
    }

    /// Remove a processor by id; unknown ids are ignored
    #[allow(dead_code)]
    pub fn remove_processor(&mut self, processor_id: &str) {
        self.processors.retain(|processor| processor.id != processor_id);
        self.has_processors = !self.processors.is_empty();
    }
}
