//! Error taxonomy for roster synchronization.
//!
//! ERROR HANDLING
//! ==============
//! No variant is fatal. Snapshot-load failures degrade the roster body to an
//! inline message, push-frame failures are logged and dropped, and
//! application rejections surface through the notification banner.

/// Failure raised while loading or applying roster state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// Network/connection failure or a non-2xx status.
    #[error("transport error: {0}")]
    Transport(String),
    /// Malformed JSON or a payload that is not a roster mapping.
    #[error("decode error: {0}")]
    Decode(String),
    /// Server-reported rejection (e.g. already signed up).
    #[error("{0}")]
    Application(String),
}

impl SyncError {
    /// Build a decode error from a `serde_json` failure.
    #[must_use]
    pub fn decode(err: &serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
