//! REST helpers for the roster endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs that report a transport failure, since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! The fetch returns `Result<_, SyncError>` so startup can degrade to an
//! inline message. Submission never fails outward: every path collapses into
//! a [`SignupOutcome`] that the dispatcher turns into a notification.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{RosterSnapshot, SignupAccepted, SignupRejected};
use crate::config::ACTIVITIES_PATH;
use crate::error::SyncError;

/// Shown when the server rejects a signup without a `detail`.
pub const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";

/// Shown when the signup request never produced a usable response.
pub const SUBMISSION_FAILED_MESSAGE: &str = "submission failed, try again";

/// Shown when the form is submitted without choosing an activity.
pub const SELECT_ACTIVITY_MESSAGE: &str = "Please select an activity.";

/// Result of a signup attempt, as presented to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    Success(String),
    Failure(String),
}

impl SignupOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Text to show in the notification banner.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(m) | Self::Failure(m) => m,
        }
    }
}

/// Signup endpoint with percent-encoded path and query components.
#[must_use]
pub fn signup_endpoint(activity: &str, email: &str) -> String {
    format!(
        "{ACTIVITIES_PATH}/{}/signup?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

/// Trim the submitted pair and require an activity.
///
/// The email format is the form's business; only the activity selection is
/// guarded here.
///
/// # Errors
///
/// Returns [`SELECT_ACTIVITY_MESSAGE`] when no activity is selected.
pub fn validate_signup(email: &str, activity: &str) -> Result<(String, String), &'static str> {
    let activity = activity.trim();
    if activity.is_empty() {
        return Err(SELECT_ACTIVITY_MESSAGE);
    }
    Ok((email.trim().to_owned(), activity.to_owned()))
}

fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

fn activities_request_failed_message(status: u16) -> String {
    format!("activities request failed: {status}")
}

/// Interpret a `/activities` response.
///
/// # Errors
///
/// [`SyncError::Transport`] for non-2xx statuses, [`SyncError::Decode`] for a
/// body that is not a roster mapping.
pub fn snapshot_from_response(status: u16, body: &str) -> Result<RosterSnapshot, SyncError> {
    if !is_success_status(status) {
        return Err(SyncError::Transport(activities_request_failed_message(status)));
    }
    RosterSnapshot::from_json(body)
}

/// Interpret a signup response.
#[must_use]
pub fn signup_outcome(status: u16, body: &str) -> SignupOutcome {
    if is_success_status(status) {
        return match serde_json::from_str::<SignupAccepted>(body) {
            Ok(accepted) => SignupOutcome::Success(accepted.message),
            Err(e) => {
                log::warn!("signup accepted with unreadable body: {e}");
                SignupOutcome::Failure(SUBMISSION_FAILED_MESSAGE.to_owned())
            }
        };
    }
    let detail = serde_json::from_str::<SignupRejected>(body)
        .map(|rejected| rejected.detail)
        .unwrap_or_default()
        .filter(|d| !d.trim().is_empty());
    SignupOutcome::Failure(detail.unwrap_or_else(|| SIGNUP_REJECTED_FALLBACK.to_owned()))
}

/// Fetch the full roster from `GET /activities`.
///
/// # Errors
///
/// [`SyncError::Transport`] on network failure or non-2xx status,
/// [`SyncError::Decode`] on a malformed body.
pub async fn fetch_snapshot() -> Result<RosterSnapshot, SyncError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(ACTIVITIES_PATH)
            .send()
            .await
            .map_err(|e| SyncError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| SyncError::Transport(e.to_string()))?;
        snapshot_from_response(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(SyncError::Transport("not available outside the browser".to_owned()))
    }
}

/// Register `email` for `activity` via `POST /activities/{activity}/signup`.
///
/// Never touches the roster view; the change arrives through the push
/// channel or a follow-up fetch.
pub async fn submit_signup(email: &str, activity: &str) -> SignupOutcome {
    let (email, activity) = match validate_signup(email, activity) {
        Ok(pair) => pair,
        Err(msg) => return SignupOutcome::Failure(msg.to_owned()),
    };
    let url = signup_endpoint(&activity, &email);

    #[cfg(feature = "csr")]
    {
        let resp = match gloo_net::http::Request::post(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("signup request failed: {e}");
                return SignupOutcome::Failure(SUBMISSION_FAILED_MESSAGE.to_owned());
            }
        };
        let status = resp.status();
        match resp.text().await {
            Ok(body) => signup_outcome(status, &body),
            Err(e) => {
                log::warn!("signup response unreadable: {e}");
                SignupOutcome::Failure(SUBMISSION_FAILED_MESSAGE.to_owned())
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("signup skipped outside the browser: {url}");
        SignupOutcome::Failure(SUBMISSION_FAILED_MESSAGE.to_owned())
    }
}
