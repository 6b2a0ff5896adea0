//! Draft editing surface for the loaded form

use crate::state::FormDocument;
use anyhow::Result;
use serde_json::Value;
use std::collections::HashMap;

/// Working copy of the form under edit.
///
/// Rich-text edits arrive asynchronously from the content editor and are
/// buffered here until flushed; a snapshot always flushes first so an
/// in-progress edit is never dropped from a save.
#[derive(Debug, Default)]
pub struct FormEditor {
    document: FormDocument,
    pending_rich_text: HashMap<String, String>,
}

impl FormEditor {
    pub fn new(document: FormDocument) -> Self {
        Self {
            document,
            pending_rich_text: HashMap::new(),
        }
    }

    /// Build the editor from host-provided initial state
    #[allow(dead_code)]
    pub fn from_host_value(value: Value) -> Result<Self> {
        Ok(Self::new(FormDocument::from_host_value(value)?))
    }

    pub fn document(&self) -> &FormDocument {
        &self.document
    }

    #[allow(dead_code)]
    pub fn document_mut(&mut self) -> &mut FormDocument {
        &mut self.document
    }

    /// Number of rich-text edits not yet folded into the document
    pub fn pending_edit_count(&self) -> usize {
        self.pending_rich_text.len()
    }

    /// Buffer a rich-text edit for a field; replaces any earlier pending edit
    #[allow(dead_code)]
    pub fn stage_rich_text(&mut self, field_id: impl Into<String>, content: impl Into<String>) {
        self.pending_rich_text.insert(field_id.into(), content.into());
    }

    /// Fold every pending rich-text edit into its field's configuration.
    ///
    /// Edits targeting fields that no longer exist are dropped silently.
    pub fn flush_pending_edits(&mut self) {
        for (field_id, content) in self.pending_rich_text.drain() {
            if let Some(field) = self.document.config.fields.get_mut(&field_id) {
                field
                    .settings
                    .insert("content".to_string(), Value::String(content));
            }
        }
    }

    /// Flushed clone of the document, used as the raw save input
    pub fn snapshot(&mut self) -> FormDocument {
        self.flush_pending_edits();
        self.document.clone()
    }
}
