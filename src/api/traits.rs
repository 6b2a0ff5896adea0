//! Trait abstraction for the forms API client to enable mocking in tests

use crate::api::client::SavedForm;
use crate::state::FormDocument;
use anyhow::Result;
use async_trait::async_trait;

/// Trait for forms API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormsApi: Send + Sync {
    /// Fetch a form's persisted configuration document
    async fn fetch_form(&self, form_id: &str) -> Result<FormDocument>;

    /// Replace a form's stored configuration with the given document
    async fn update_form(&self, form_id: &str, document: &FormDocument) -> Result<SavedForm>;
}
