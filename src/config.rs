//! Client configuration.
//!
//! There is no environment or persisted configuration: every endpoint is
//! relative to the page origin, so the defaults below are the whole story.
//! `SyncConfig` exists so tests (and an embedding page) can pick the sync
//! mode and shorten timers without touching the state machine code.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Snapshot endpoint, relative to the page origin.
pub const ACTIVITIES_PATH: &str = "/activities";

/// Push channel path, relative to the page host.
pub const PUSH_PATH: &str = "/ws";

/// Fixed delay before reconnecting a closed push channel.
pub const RECONNECT_BACKOFF_MS: u32 = 5_000;

/// Lifetime of a notification before it auto-dismisses.
pub const NOTIFICATION_TTL_MS: u32 = 5_000;

/// How the roster converges after a successful signup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncMode {
    /// A push channel delivers every roster change.
    #[default]
    Push,
    /// No push channel; re-fetch the snapshot after each successful signup.
    FetchAfterSignup,
}

/// Tunables for the dispatcher and browser runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncConfig {
    pub mode: SyncMode,
    pub reconnect_backoff_ms: u32,
    pub notification_ttl_ms: u32,
    pub push_path: String,
    /// Ask the server for a full update right after the channel opens.
    pub resync_on_connect: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            mode: SyncMode::Push,
            reconnect_backoff_ms: RECONNECT_BACKOFF_MS,
            notification_ttl_ms: NOTIFICATION_TTL_MS,
            push_path: PUSH_PATH.to_owned(),
            resync_on_connect: true,
        }
    }
}

impl SyncConfig {
    /// Configuration for pages served without a push endpoint.
    #[must_use]
    pub fn fetch_after_signup() -> Self {
        Self { mode: SyncMode::FetchAfterSignup, ..Self::default() }
    }

    /// Whether the dispatcher should run the push channel at all.
    #[must_use]
    pub fn uses_push_channel(&self) -> bool {
        self.mode == SyncMode::Push
    }
}
