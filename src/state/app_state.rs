//! Application state definitions

use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

/// Delay before the busy indicator clears after a save attempt completes
pub const BUSY_CLEAR_DELAY: Duration = Duration::from_millis(2000);

/// How long the saved notice stays visible
pub const NOTICE_DURATION: Duration = Duration::from_millis(1700);

/// Save control state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
}

/// Busy/notice state for the save control.
///
/// The busy flag is advisory only: it drives rendering, nothing in the save
/// path refuses to run while it is set. It clears on a fixed timer after the
/// request completes, not on the response itself.
#[derive(Debug, Default)]
pub struct SaveIndicator {
    status: SaveStatus,
    clear_at: Option<Instant>,
    notice_until: Option<Instant>,
}

impl SaveIndicator {
    /// Mark the control busy; called when a save is dispatched
    pub fn begin(&mut self) {
        self.status = SaveStatus::Saving;
        self.clear_at = None;
    }

    /// Schedule the busy flag to clear after the fixed delay.
    /// A successful save also raises the transient notice.
    pub fn finish(&mut self, succeeded: bool) {
        self.clear_at = Some(Instant::now() + BUSY_CLEAR_DELAY);
        if succeeded {
            self.notice_until = Some(Instant::now() + NOTICE_DURATION);
        }
    }

    /// Expire timers; called once per event-loop iteration
    pub fn tick(&mut self) {
        if let Some(clear_at) = self.clear_at {
            if Instant::now() >= clear_at {
                self.status = SaveStatus::Idle;
                self.clear_at = None;
            }
        }
        if let Some(notice_until) = self.notice_until {
            if Instant::now() >= notice_until {
                self.notice_until = None;
            }
        }
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.status, SaveStatus::Saving)
    }

    pub fn notice_visible(&self) -> bool {
        self.notice_until.is_some()
    }

    /// Label for the save control
    pub fn label(&self) -> &'static str {
        match self.status {
            SaveStatus::Idle => "Save Form",
            SaveStatus::Saving => "Saving",
        }
    }
}

/// Top-level application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Identifier of the form under edit
    pub form_id: String,
    /// Whether the forms API answered the initial fetch
    pub connected: bool,
    /// Save control busy/notice state
    pub save_indicator: SaveIndicator,
    /// When the last successful save completed
    pub last_saved_at: Option<DateTime<Utc>>,
    /// One-line message shown in the status bar
    pub status_message: Option<String>,
}
