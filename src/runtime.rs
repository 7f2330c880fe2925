//! Browser runtime: the event queue feeding the [`Dispatcher`].
//!
//! One `spawn_local` task drains an unbounded channel of [`AppEvent`]s,
//! hands each to the dispatcher, mirrors the resulting state into Leptos
//! signals, and performs the returned [`Effect`]s. Fetches, sockets, and
//! timers report back by queueing new events, so the dispatcher only ever
//! sees one event at a time and in arrival order.

use leptos::prelude::*;

use crate::dispatcher::{AppEvent, Dispatcher};
use crate::net::push_channel::ConnectionState;
use crate::state::notification::NotificationState;
use crate::state::roster_view::RosterViewState;
use crate::state::signup_form::SignupFormState;

#[cfg(feature = "csr")]
use crate::config::SyncConfig;
#[cfg(feature = "csr")]
use crate::dispatcher::Effect;

/// Read-only mirrors of dispatcher state for components.
#[derive(Clone, Copy)]
pub struct ViewSignals {
    pub roster: RwSignal<RosterViewState>,
    pub form: RwSignal<SignupFormState>,
    pub notification: RwSignal<NotificationState>,
    pub connection: RwSignal<ConnectionState>,
}

impl ViewSignals {
    #[must_use]
    pub fn new(dispatcher: &Dispatcher) -> Self {
        Self {
            roster: RwSignal::new(dispatcher.roster().clone()),
            form: RwSignal::new(dispatcher.form().clone()),
            notification: RwSignal::new(dispatcher.notification().clone()),
            connection: RwSignal::new(dispatcher.connection_state()),
        }
    }

    /// Copy dispatcher state into the signals whose value changed.
    pub fn publish(&self, dispatcher: &Dispatcher) {
        publish_if_changed(self.roster, dispatcher.roster());
        publish_if_changed(self.form, dispatcher.form());
        publish_if_changed(self.notification, dispatcher.notification());
        publish_if_changed(self.connection, &dispatcher.connection_state());
    }
}

fn publish_if_changed<T>(signal: RwSignal<T>, value: &T)
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    if signal.with_untracked(|current| current != value) {
        signal.set(value.clone());
    }
}

/// Handle for queueing events to the dispatcher.
#[derive(Clone)]
pub struct Dispatch {
    #[cfg(feature = "csr")]
    tx: futures::channel::mpsc::UnboundedSender<AppEvent>,
}

impl Dispatch {
    /// Queue `event`. Events sent after the runtime stopped are logged and
    /// dropped.
    pub fn send(&self, event: AppEvent) {
        #[cfg(feature = "csr")]
        {
            if let Err(e) = self.tx.unbounded_send(event) {
                log::warn!("dispatcher stopped; dropped {:?}", e.into_inner());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("no runtime outside the browser; dropped {event:?}");
        }
    }

    /// A handle with no runtime behind it, for server-less renders.
    #[cfg(not(feature = "csr"))]
    #[must_use]
    pub fn detached() -> Self {
        Self {}
    }
}

/// Start the runtime task and queue [`AppEvent::Started`].
#[cfg(feature = "csr")]
pub fn spawn_runtime(dispatcher: Dispatcher, signals: ViewSignals) -> Dispatch {
    let (tx, rx) = futures::channel::mpsc::unbounded::<AppEvent>();
    let dispatch = Dispatch { tx };
    let runtime = BrowserRuntime::new(dispatch.clone(), dispatcher.config());
    leptos::task::spawn_local(run(dispatcher, rx, runtime, signals));
    dispatch.send(AppEvent::Started);
    dispatch
}

#[cfg(feature = "csr")]
async fn run(
    mut dispatcher: Dispatcher,
    mut rx: futures::channel::mpsc::UnboundedReceiver<AppEvent>,
    mut runtime: BrowserRuntime,
    signals: ViewSignals,
) {
    use futures::StreamExt;

    while let Some(event) = rx.next().await {
        let effects = dispatcher.handle(event, crate::util::browser::now_ms());
        signals.publish(&dispatcher);
        for effect in effects {
            runtime.perform(effect);
        }
    }
}

/// Owner of the live browser resources: the socket's outbound queue and the
/// two timer handles. Replacing a `Timeout` drops, and so cancels, the old one.
#[cfg(feature = "csr")]
struct BrowserRuntime {
    dispatch: Dispatch,
    push_path: String,
    socket: Option<futures::channel::mpsc::UnboundedSender<String>>,
    reconnect_timer: Option<gloo_timers::callback::Timeout>,
    dismiss_timer: Option<gloo_timers::callback::Timeout>,
}

#[cfg(feature = "csr")]
impl BrowserRuntime {
    fn new(dispatch: Dispatch, config: &SyncConfig) -> Self {
        Self {
            dispatch,
            push_path: config.push_path.clone(),
            socket: None,
            reconnect_timer: None,
            dismiss_timer: None,
        }
    }

    fn perform(&mut self, effect: Effect) {
        use crate::net::api;
        use crate::util::browser::{EMAIL_INPUT_ID, focus_element};
        use gloo_timers::callback::Timeout;

        match effect {
            Effect::FetchSnapshot => {
                let dispatch = self.dispatch.clone();
                leptos::task::spawn_local(async move {
                    let result = api::fetch_snapshot().await;
                    dispatch.send(AppEvent::SnapshotFetched(result));
                });
            }
            Effect::OpenPushChannel => self.open_channel(),
            Effect::RequestResync => self.send_text(crate::net::push_channel::RESYNC_REQUEST),
            Effect::ScheduleReconnect { timer, delay_ms } => {
                self.socket = None;
                let dispatch = self.dispatch.clone();
                self.reconnect_timer = Some(Timeout::new(delay_ms, move || {
                    dispatch.send(AppEvent::ReconnectDue(timer));
                }));
            }
            Effect::ScheduleDismiss { generation, delay_ms } => {
                let dispatch = self.dispatch.clone();
                self.dismiss_timer = Some(Timeout::new(delay_ms, move || {
                    dispatch.send(AppEvent::NotificationExpired(generation));
                }));
            }
            Effect::SubmitSignup { email, activity } => {
                let dispatch = self.dispatch.clone();
                leptos::task::spawn_local(async move {
                    let outcome = api::submit_signup(&email, &activity).await;
                    dispatch.send(AppEvent::SignupFinished(outcome));
                });
            }
            Effect::FocusEmail => focus_element(EMAIL_INPUT_ID),
        }
    }

    fn open_channel(&mut self) {
        use crate::net::push_channel::{TransportEvent, run_connection};

        let (outbound_tx, outbound_rx) = futures::channel::mpsc::unbounded::<String>();
        self.socket = Some(outbound_tx);
        let url = crate::util::browser::page_push_endpoint(&self.push_path);
        log::debug!("opening push channel {url}");
        let dispatch = self.dispatch.clone();
        leptos::task::spawn_local(run_connection(url, outbound_rx, move |event| {
            dispatch.send(match event {
                TransportEvent::Opened => AppEvent::ChannelOpened,
                TransportEvent::Text(text) => AppEvent::ChannelMessage(text),
                TransportEvent::Closed => AppEvent::ChannelClosed,
            });
        }));
    }

    fn send_text(&self, text: &str) {
        let Some(socket) = &self.socket else {
            log::debug!("no open push channel; not sending {text:?}");
            return;
        };
        if socket.unbounded_send(text.to_owned()).is_err() {
            log::debug!("push channel closed before {text:?} was sent");
        }
    }
}
