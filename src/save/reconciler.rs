//! Save payload reconciliation
//!
//! Merges the draft document with the conditional and processor state into
//! the single document the forms API persists. Field-to-conditional
//! assignments are derived state: they are wiped and rebuilt from the
//! conditional list on every save rather than patched incrementally.

use crate::save::hooks::PreSaveHooks;
use crate::save::normalize::{prepare_conditionals_for_save, prepare_processors_for_save};
use crate::state::{
    ConditionalDefinition, ConditionalGroups, ConditionalsState, FieldConditions, FormConfig,
    FormDocument, ProcessorsState,
};
use serde_json::Map;

/// Build the complete save payload from the raw draft snapshot.
///
/// Pure apart from whatever the registered hooks do; the caller submits the
/// returned document unchanged.
pub fn build_save_payload(
    mut document: FormDocument,
    conditionals: &ConditionalsState,
    processors: &ProcessorsState,
    hooks: &mut PreSaveHooks,
) -> FormDocument {
    hooks.run(&mut document);

    if conditionals.has_conditionals() {
        let prepared = prepare_conditionals_for_save(conditionals.groups());
        // Written in both places: nested for current consumers, root for the
        // ones that predate the nested location.
        document.conditions = Some(prepared.clone());
        document.config.conditional_groups = ConditionalGroups {
            conditions: Some(prepared),
        };
    } else {
        document.config.conditional_groups = ConditionalGroups::default();
    }

    if processors.has_processors() {
        document.config.processors = prepare_processors_for_save(processors.processors());
    } else {
        document.config.processors = Map::new();
    }

    clear_field_assignments(&mut document.config);
    apply_conditional_assignments(&mut document.config, conditionals.groups());

    document
}

/// Wipe every field's conditional assignment
pub fn clear_field_assignments(config: &mut FormConfig) {
    for field in config.fields.values_mut() {
        field.conditions = FieldConditions::cleared();
    }
}

/// Reassign fields to the groups that claim them.
///
/// Groups are walked in list order and each assignment overwrites the
/// previous one, so a field claimed by several groups ends up owned by the
/// last claimant in the list. Targets naming unknown fields are skipped.
pub fn apply_conditional_assignments(config: &mut FormConfig, groups: &[ConditionalDefinition]) {
    for group in groups {
        for field_id in group.applies_to() {
            if let Some(field) = config.fields.get_mut(field_id) {
                field.conditions = FieldConditions::assigned(&group.id);
            }
        }
    }
}
