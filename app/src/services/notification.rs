//! Advisory notifications
//!
//! In-process stream of non-fatal notices the UI surfaces as toasts. Auto-fill
//! failures land here instead of propagating: the form stays usable and the
//! user types the missing values by hand.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Severity of an advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryLevel {
    Info,
    Warning,
    Error,
}

/// A non-fatal notice for the user
#[derive(Debug, Clone, Serialize)]
pub struct Advisory {
    pub id: Uuid,
    pub level: AdvisoryLevel,
    pub title: String,
    pub detail: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Sending half of the advisory stream
#[derive(Clone)]
pub struct AdvisoryChannel {
    tx: mpsc::UnboundedSender<Advisory>,
}

impl AdvisoryChannel {
    /// Create a channel plus the receiver the UI drains
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Advisory>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn info(&self, title: &str, detail: &str) {
        self.send(AdvisoryLevel::Info, title, detail);
    }

    pub fn warn(&self, title: &str, detail: &str) {
        self.send(AdvisoryLevel::Warning, title, detail);
    }

    pub fn error(&self, title: &str, detail: &str) {
        self.send(AdvisoryLevel::Error, title, detail);
    }

    fn send(&self, level: AdvisoryLevel, title: &str, detail: &str) {
        let advisory = Advisory {
            id: Uuid::new_v4(),
            level,
            title: title.to_string(),
            detail: if detail.is_empty() {
                None
            } else {
                Some(detail.to_string())
            },
            created_at: Utc::now(),
        };

        // A closed receiver means nothing is listening anymore; drop quietly.
        if self.tx.send(advisory).is_err() {
            tracing::debug!("advisory dropped: no subscriber");
        }
    }
}
