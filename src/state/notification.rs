//! Transient status banner (success/error) with auto-dismiss.
//!
//! Last write wins: a new notification replaces the current one and bumps
//! the generation, so a dismissal scheduled for an older notification can
//! never hide a newer one.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// CSS class of the banner.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PendingNotification {
    pub text: String,
    pub kind: NotificationKind,
    /// Milliseconds since the Unix epoch after which the banner is hidden.
    pub expires_at_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotificationState {
    current: Option<PendingNotification>,
    generation: u64,
    ttl_ms: u32,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new(crate::config::NOTIFICATION_TTL_MS)
    }
}

impl NotificationState {
    #[must_use]
    pub fn new(ttl_ms: u32) -> Self {
        Self { current: None, generation: 0, ttl_ms }
    }

    /// Show `text`, replacing whatever is displayed. Returns the generation
    /// whose dismissal timer the caller should arm.
    pub fn notify(&mut self, text: impl Into<String>, kind: NotificationKind, now_ms: f64) -> u64 {
        self.generation += 1;
        self.current = Some(PendingNotification {
            text: text.into(),
            kind,
            expires_at_ms: now_ms + f64::from(self.ttl_ms),
        });
        self.generation
    }

    /// Hide the notification if `generation` is still the current one.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    /// The notification visible at `now_ms`, if any.
    #[must_use]
    pub fn visible_at(&self, now_ms: f64) -> Option<&PendingNotification> {
        self.current.as_ref().filter(|n| now_ms < n.expires_at_ms)
    }

    /// The notification currently held, ignoring expiry.
    #[must_use]
    pub fn current(&self) -> Option<&PendingNotification> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn ttl_ms(&self) -> u32 {
        self.ttl_ms
    }
}
