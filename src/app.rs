//! Application state and core logic

use crate::api::{FormsApi, FormsClient};
use crate::config::BuilderConfig;
use crate::save::{build_save_payload, PreSaveHooks};
use crate::state::{AppState, ConditionalsState, FormDocument, FormEditor, ProcessorsState};
use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};

/// Form opened when neither config nor environment names one
const DEFAULT_FORM_ID: &str = "CF1";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Draft editing surface for the loaded form
    pub editor: FormEditor,
    /// Conditional group state
    pub conditionals: ConditionalsState,
    /// Processor state
    pub processors: ProcessorsState,
    /// Pre-save hooks, run against the draft before reconciliation
    pub hooks: PreSaveHooks,
    /// Forms API client
    api: Box<dyn FormsApi>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub async fn new(config: BuilderConfig) -> Result<Self> {
        let form_id = config
            .form_id
            .clone()
            .or_else(|| std::env::var("FORMBUILDER_FORM_ID").ok())
            .unwrap_or_else(|| DEFAULT_FORM_ID.to_string());
        let api = FormsClient::new(config.api_base.clone())?;
        Self::with_api(Box::new(api), form_id).await
    }

    /// Create an App against any API implementation
    pub async fn with_api(api: Box<dyn FormsApi>, form_id: String) -> Result<Self> {
        let mut state = AppState {
            form_id: form_id.clone(),
            ..Default::default()
        };

        let document = match api.fetch_form(&form_id).await {
            Ok(document) => {
                state.connected = true;
                document
            }
            Err(e) => {
                tracing::warn!("could not fetch form {form_id}: {e:#}");
                state.status_message =
                    Some("Working offline: form could not be fetched".to_string());
                FormDocument {
                    id: form_id,
                    ..Default::default()
                }
            }
        };

        let conditionals = ConditionalsState::from_document(&document);
        let processors = ProcessorsState::from_document(&document);

        Ok(Self {
            state,
            editor: FormEditor::new(document),
            conditionals,
            processors,
            hooks: PreSaveHooks::default(),
            api,
            quit: false,
        })
    }

    /// Build the save payload from the current state sources and submit it.
    ///
    /// The busy flag goes up immediately and comes down on its fixed timer
    /// after the request completes. A failed request is logged and otherwise
    /// dropped; there is no retry and no separate error state.
    pub async fn trigger_save(&mut self) {
        self.state.save_indicator.begin();

        let draft = self.editor.snapshot();
        let payload =
            build_save_payload(draft, &self.conditionals, &self.processors, &mut self.hooks);

        let succeeded = match self.api.update_form(&self.state.form_id, &payload).await {
            Ok(saved) => {
                tracing::debug!(form_id = %saved.form_id, "form saved");
                self.state.last_saved_at = Some(Utc::now());
                true
            }
            Err(e) => {
                tracing::error!("failed to save form: {e:#}");
                false
            }
        };
        self.state.save_indicator.finish(succeeded);
    }

    /// Expire UI timers; called once per event-loop iteration
    pub fn tick(&mut self) {
        self.state.save_indicator.tick();
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') | KeyCode::Enter => self.trigger_save().await,
            _ => {}
        }
        Ok(())
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
