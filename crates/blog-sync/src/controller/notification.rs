//! Notification Slot
//!
//! `Idle` or `Showing(message, severity)`. Each show bumps a generation;
//! a dismissal only lands if it carries the current generation.

use crate::domain::RequestFailed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl From<&RequestFailed> for Notification {
    fn from(failure: &RequestFailed) -> Self {
        Notification::error(failure.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSlot {
    current: Option<Notification>,
    generation: u64,
}

impl NotificationSlot {
    /// Show `notification`, replacing whatever is showing.
    /// Returns the generation a dismiss timer must present.
    pub fn show(&mut self, notification: Notification) -> u64 {
        self.generation += 1;
        self.current = Some(notification);
        self.generation
    }

    /// Back to idle if `generation` is still current
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_showing(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClientError, Operation};

    #[test]
    fn test_expire_current_generation() {
        let mut slot = NotificationSlot::default();
        let generation = slot.show(Notification::info("A blog added"));
        assert!(slot.is_showing());
        assert!(slot.expire(generation));
        assert!(!slot.is_showing());
    }

    #[test]
    fn test_stale_expire_keeps_newer_message() {
        let mut slot = NotificationSlot::default();
        let first = slot.show(Notification::info("first"));
        let second = slot.show(Notification::info("second"));

        assert!(!slot.expire(first));
        assert_eq!(slot.current().map(|n| n.message.as_str()), Some("second"));
        assert!(slot.expire(second));
        assert!(!slot.expire(second));
    }

    #[test]
    fn test_request_failed_message() {
        let failure = RequestFailed::new(Operation::Update, ClientError::Network("offline".into()));
        let notification = Notification::from(&failure);
        assert!(notification.is_error());
        assert_eq!(notification.message, "update failed: network error: offline");
    }
}
