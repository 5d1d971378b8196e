//! User-facing outcome notifications.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational outcome (successful operations).
    Info,
    /// Failed or rejected operation.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A recorded user-facing notification.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Notification severity.
    pub severity: Severity,
    /// The literal user-facing message.
    pub message: String,
    /// When the notification was emitted.
    pub at: DateTime<Utc>,
}

/// Trait for delivering user-facing operation outcomes.
///
/// The cart store reports every outcome here; how the message reaches the
/// user (toast, log line, test assertion) is up to the implementation.
pub trait Notifier: Send + Sync {
    /// Delivers a notification.
    fn notify(&self, severity: Severity, message: &str);

    /// Delivers an informational notification.
    fn info(&self, message: &str) {
        self.notify(Severity::Info, message);
    }

    /// Delivers an error notification.
    fn error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }
}

/// Notifier that forwards messages to the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!(target: "cart::notification", "{message}"),
            Severity::Error => tracing::error!(target: "cart::notification", "{message}"),
        }
    }
}

/// Notifier that records every message, for testing.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Creates a new recording notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded notifications in emission order.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    /// Returns the recorded messages in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    /// Returns the most recent notification.
    pub fn last(&self) -> Option<Notification> {
        self.notifications.lock().unwrap().last().cloned()
    }

    /// Returns the number of recorded notifications.
    pub fn count(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }

    /// Clears the recorded notifications.
    pub fn clear(&self) {
        self.notifications.lock().unwrap().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.notifications.lock().unwrap().push(Notification {
            severity,
            message: message.to_string(),
            at: Utc::now(),
        });
    }
}
