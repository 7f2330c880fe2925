//! Wire-protocol DTOs for the roster endpoints and push frames.
//!
//! DESIGN
//! ======
//! A roster always travels whole: the `/activities` body and the `data` of an
//! `activities_update` frame share one shape, so both decode into the same
//! [`RosterSnapshot`]. Server key order is kept so cards render in the order
//! the server lists them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::SyncError;

/// Push frame `type` that carries a full roster snapshot.
pub const ROSTER_UPDATE_TYPE: &str = "activities_update";

/// Sign-up state of a single activity.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ActivityRecord {
    #[serde(default)]
    pub description: String,
    /// Human-readable meeting time, when the server provides one.
    #[serde(default)]
    pub schedule: Option<String>,
    pub max_participants: u32,
    /// Participant emails in sign-up order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivityRecord {
    /// Remaining capacity. Negative when the activity is oversubscribed;
    /// the server is the authority on capacity, so this is never clamped.
    #[must_use]
    pub fn spots_left(&self) -> i64 {
        let taken = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        i64::from(self.max_participants) - taken
    }
}

/// Immutable, complete roster as received from the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RosterSnapshot {
    activities: IndexMap<String, ActivityRecord>,
}

impl RosterSnapshot {
    /// Decode a snapshot from a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Decode`] if the body is not a JSON object mapping
    /// activity names to activity records.
    pub fn from_json(body: &str) -> Result<Self, SyncError> {
        serde_json::from_str(body).map_err(|e| SyncError::decode(&e))
    }

    /// Decode a snapshot from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Decode`] if the value does not have roster shape.
    pub fn from_value(value: serde_json::Value) -> Result<Self, SyncError> {
        serde_json::from_value(value).map_err(|e| SyncError::decode(&e))
    }

    /// Number of activities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ActivityRecord> {
        self.activities.get(name)
    }

    /// Activities in server order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActivityRecord)> {
        self.activities.iter().map(|(name, record)| (name.as_str(), record))
    }
}

impl FromIterator<(String, ActivityRecord)> for RosterSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, ActivityRecord)>>(iter: I) -> Self {
        Self { activities: iter.into_iter().collect() }
    }
}

/// Envelope of every inbound push frame.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PushMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl PushMessage {
    /// Decode a text frame into a roster snapshot.
    ///
    /// Returns `Ok(None)` for frame types other than [`ROSTER_UPDATE_TYPE`]
    /// so new server message types never break an older client.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Decode`] if the frame is not a `{type, data}`
    /// envelope, or if a roster update carries a malformed roster.
    pub fn decode_snapshot(text: &str) -> Result<Option<RosterSnapshot>, SyncError> {
        let message: Self = serde_json::from_str(text).map_err(|e| SyncError::decode(&e))?;
        if message.kind != ROSTER_UPDATE_TYPE {
            return Ok(None);
        }
        RosterSnapshot::from_value(message.data).map(Some)
    }
}

/// Successful signup response body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SignupAccepted {
    pub message: String,
}

/// Rejected signup response body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SignupRejected {
    #[serde(default)]
    pub detail: Option<String>,
}
