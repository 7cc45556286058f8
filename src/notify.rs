use std::time::{Duration, Instant};

pub const AUTO_DISMISS: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

/// Single-slot message surface. A new notification replaces whatever is
/// showing; the slot empties on dismissal or once the deadline passes.
#[derive(Debug)]
pub struct Notifier {
    slot: Option<(Notification, Instant)>,
    ttl: Duration,
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_ttl(AUTO_DISMISS)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self { slot: None, ttl }
    }

    pub fn notify(&mut self, severity: Severity, message: impl Into<String>) {
        let notification = Notification {
            severity,
            message: message.into(),
        };
        self.slot = Some((notification, Instant::now() + self.ttl));
    }

    pub fn current(&mut self) -> Option<&Notification> {
        if let Some((_, deadline)) = &self.slot {
            if Instant::now() >= *deadline {
                self.slot = None;
            }
        }
        self.slot.as_ref().map(|(notification, _)| notification)
    }

    pub fn dismiss(&mut self) {
        self.slot = None;
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
