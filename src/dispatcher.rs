//! Single-writer event dispatcher.
//!
//! Every external happening (fetch resolved, push frame, timer fired, user
//! action) arrives as an [`AppEvent`]. [`Dispatcher::handle`] applies it to
//! the owned state and returns the [`Effect`]s the browser runtime must carry
//! out. Events are handled one at a time in queue order, which is the whole
//! concurrency story: nothing else writes this state.

#[cfg(test)]
#[path = "dispatcher_test.rs"]
mod dispatcher_test;

use crate::config::{SyncConfig, SyncMode};
use crate::error::SyncError;
use crate::net::api::{SignupOutcome, validate_signup};
use crate::net::push_channel::{ConnectionState, PushChannel, PushCommand, TimerId};
use crate::net::types::{PushMessage, RosterSnapshot};
use crate::state::notification::{NotificationKind, NotificationState};
use crate::state::roster_view::RosterViewState;
use crate::state::signup_form::SignupFormState;

/// Input to the dispatcher.
#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    /// Page loaded.
    Started,
    SnapshotFetched(Result<RosterSnapshot, SyncError>),
    ChannelOpened,
    ChannelMessage(String),
    ChannelClosed,
    ReconnectDue(TimerId),
    /// "Sign up" on an activity card.
    CardSelected(String),
    /// The selection control changed.
    SelectionChanged(String),
    EmailChanged(String),
    SignupSubmitted,
    SignupFinished(SignupOutcome),
    NotificationExpired(u64),
}

/// Work for the browser runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    FetchSnapshot,
    OpenPushChannel,
    /// Ask the server for a full roster over the open channel.
    RequestResync,
    ScheduleReconnect { timer: TimerId, delay_ms: u32 },
    /// Arm the one dismissal timer, replacing any previous one.
    ScheduleDismiss { generation: u64, delay_ms: u32 },
    SubmitSignup { email: String, activity: String },
    FocusEmail,
}

/// Owner of all roster-client state.
#[derive(Clone, Debug, PartialEq)]
pub struct Dispatcher {
    config: SyncConfig,
    roster: RosterViewState,
    form: SignupFormState,
    notification: NotificationState,
    channel: PushChannel,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(SyncConfig::default())
    }
}

impl Dispatcher {
    #[must_use]
    pub fn new(config: SyncConfig) -> Self {
        Self {
            roster: RosterViewState::default(),
            form: SignupFormState::default(),
            notification: NotificationState::new(config.notification_ttl_ms),
            channel: PushChannel::new(config.reconnect_backoff_ms),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    #[must_use]
    pub fn roster(&self) -> &RosterViewState {
        &self.roster
    }

    #[must_use]
    pub fn form(&self) -> &SignupFormState {
        &self.form
    }

    #[must_use]
    pub fn notification(&self) -> &NotificationState {
        &self.notification
    }

    #[must_use]
    pub fn connection_state(&self) -> ConnectionState {
        self.channel.state()
    }

    #[must_use]
    pub fn channel(&self) -> &PushChannel {
        &self.channel
    }

    /// Apply one event at time `now_ms` and return the resulting effects.
    pub fn handle(&mut self, event: AppEvent, now_ms: f64) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event {
            AppEvent::Started => {
                effects.push(Effect::FetchSnapshot);
                if self.config.uses_push_channel() {
                    effects.extend(self.channel.start().map(push_effect));
                }
            }
            AppEvent::SnapshotFetched(Ok(snapshot)) => self.roster.render(&snapshot),
            AppEvent::SnapshotFetched(Err(e)) => {
                log::warn!("failed to load activities: {e}");
                self.roster.render_load_error();
            }
            AppEvent::ChannelOpened => {
                if self.channel.opened() && self.config.resync_on_connect {
                    effects.push(Effect::RequestResync);
                }
            }
            AppEvent::ChannelMessage(text) => self.apply_push_frame(&text),
            AppEvent::ChannelClosed => {
                effects.extend(self.channel.closed(now_ms).map(push_effect));
            }
            AppEvent::ReconnectDue(timer) => {
                effects.extend(self.channel.backoff_elapsed(timer, now_ms).map(push_effect));
            }
            AppEvent::CardSelected(name) => {
                self.form.select_activity(&name);
                effects.push(Effect::FocusEmail);
            }
            AppEvent::SelectionChanged(name) => self.form.select_activity(&name),
            AppEvent::EmailChanged(email) => self.form.email = email,
            AppEvent::SignupSubmitted => self.submit(now_ms, &mut effects),
            AppEvent::SignupFinished(outcome) => self.finish_signup(outcome, now_ms, &mut effects),
            AppEvent::NotificationExpired(generation) => {
                self.notification.dismiss(generation);
            }
        }
        effects
    }

    fn apply_push_frame(&mut self, text: &str) {
        if !self.channel.accepts_frames() {
            log::debug!("dropping push frame received while {:?}", self.channel.state());
            return;
        }
        match PushMessage::decode_snapshot(text) {
            Ok(Some(snapshot)) => self.roster.render(&snapshot),
            Ok(None) => log::debug!("ignoring push frame of unrecognized type"),
            Err(e) => log::warn!("dropping malformed push frame: {e}"),
        }
    }

    fn submit(&mut self, now_ms: f64, effects: &mut Vec<Effect>) {
        if self.form.submitting {
            log::debug!("signup already in flight");
            return;
        }
        match validate_signup(&self.form.email, &self.form.activity) {
            Ok((email, activity)) => {
                self.form.submitting = true;
                effects.push(Effect::SubmitSignup { email, activity });
            }
            Err(msg) => self.raise(msg, NotificationKind::Error, now_ms, effects),
        }
    }

    fn finish_signup(&mut self, outcome: SignupOutcome, now_ms: f64, effects: &mut Vec<Effect>) {
        self.form.submitting = false;
        match outcome {
            SignupOutcome::Success(message) => {
                self.form.clear();
                self.raise(message, NotificationKind::Success, now_ms, effects);
                if self.config.mode == SyncMode::FetchAfterSignup {
                    effects.push(Effect::FetchSnapshot);
                }
            }
            SignupOutcome::Failure(reason) => self.raise(reason, NotificationKind::Error, now_ms, effects),
        }
    }

    fn raise(&mut self, text: impl Into<String>, kind: NotificationKind, now_ms: f64, effects: &mut Vec<Effect>) {
        let generation = self.notification.notify(text, kind, now_ms);
        effects.push(Effect::ScheduleDismiss { generation, delay_ms: self.notification.ttl_ms() });
    }
}

fn push_effect(cmd: PushCommand) -> Effect {
    match cmd {
        PushCommand::Open => Effect::OpenPushChannel,
        PushCommand::ScheduleReconnect { timer, delay_ms } => Effect::ScheduleReconnect { timer, delay_ms },
    }
}
