//! Push channel: reconnect state machine plus the browser WebSocket task.
//!
//! The [`PushChannel`] machine is plain data driven by the dispatcher. It
//! decides when to open a connection and when to arm the single reconnect
//! timer; the browser side ([`run_connection`], csr only) just performs the
//! opens and reports transport events back as dispatcher events.
//!
//! ```text
//! Disconnected --start--> Connecting --opened--> Connected
//!      ^                      |                      |
//!      |                    closed                 closed
//!      |                      v                      v
//!      +------ backoff ---- Disconnected <-----------+
//! ```
//!
//! ERROR HANDLING
//! ==============
//! Transport failures only ever move the machine to `Disconnected`; there is
//! no terminal state. Frame decode failures never reach the machine at all.

#[cfg(test)]
#[path = "push_channel_test.rs"]
mod push_channel_test;

/// Connection state of the push channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl ConnectionState {
    /// Short label for the status badge.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Disconnected => "Disconnected",
            Self::Connecting => "Connecting...",
            Self::Connected => "Live",
        }
    }
}

/// Identifier of an armed reconnect timer.
pub type TimerId = u64;

/// What the runtime must do after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushCommand {
    /// Open a new connection to the push endpoint.
    Open,
    /// Arm the reconnect timer; fire `backoff_elapsed(timer, ..)` after `delay_ms`.
    ScheduleReconnect { timer: TimerId, delay_ms: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingReconnect {
    timer: TimerId,
    due_at_ms: f64,
}

/// Reconnect state machine with a single owned timer handle.
///
/// Invariant: `pending` is `Some` only while `Disconnected`, so a connect
/// attempt and a backoff wait are never outstanding together.
#[derive(Clone, Debug, PartialEq)]
pub struct PushChannel {
    state: ConnectionState,
    backoff_ms: u32,
    started: bool,
    pending: Option<PendingReconnect>,
    next_timer: TimerId,
    connect_attempts: u64,
}

impl PushChannel {
    #[must_use]
    pub fn new(backoff_ms: u32) -> Self {
        Self {
            state: ConnectionState::Disconnected,
            backoff_ms,
            started: false,
            pending: None,
            next_timer: 0,
            connect_attempts: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Number of opens requested since construction.
    #[must_use]
    pub fn connect_attempts(&self) -> u64 {
        self.connect_attempts
    }

    /// Whether a reconnect timer is armed.
    #[must_use]
    pub fn reconnect_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Inbound frames are only applied on a live connection.
    #[must_use]
    pub fn accepts_frames(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    /// Begin the lifecycle. Only the first call opens a connection.
    pub fn start(&mut self) -> Option<PushCommand> {
        if self.started {
            return None;
        }
        self.started = true;
        Some(self.begin_connect())
    }

    /// The transport reported a successful open.
    ///
    /// Returns `false` (and changes nothing) unless an open was in progress.
    pub fn opened(&mut self) -> bool {
        if self.state != ConnectionState::Connecting {
            log::debug!("push channel: ignoring open event in {:?}", self.state);
            return false;
        }
        self.state = ConnectionState::Connected;
        true
    }

    /// The transport closed or failed. Arms the reconnect timer.
    ///
    /// A close while already disconnected (browsers report error then close)
    /// does not arm a second timer.
    pub fn closed(&mut self, now_ms: f64) -> Option<PushCommand> {
        if self.state == ConnectionState::Disconnected {
            return None;
        }
        self.state = ConnectionState::Disconnected;
        self.next_timer += 1;
        let timer = self.next_timer;
        self.pending = Some(PendingReconnect { timer, due_at_ms: now_ms + f64::from(self.backoff_ms) });
        Some(PushCommand::ScheduleReconnect { timer, delay_ms: self.backoff_ms })
    }

    /// A reconnect timer fired.
    ///
    /// Only the outstanding timer starts a new connection; other ids are
    /// stale and ignored. A fire before the due time re-arms the same timer
    /// for the remainder, so the wait always ends in a connect attempt.
    pub fn backoff_elapsed(&mut self, timer: TimerId, now_ms: f64) -> Option<PushCommand> {
        let pending = self.pending?;
        if pending.timer != timer {
            log::debug!("push channel: stale reconnect timer {timer}");
            return None;
        }
        if now_ms < pending.due_at_ms {
            let delay_ms = remaining_ms(pending.due_at_ms - now_ms, self.backoff_ms);
            log::debug!("push channel: reconnect timer {timer} fired early, re-arming for {delay_ms}ms");
            return Some(PushCommand::ScheduleReconnect { timer, delay_ms });
        }
        self.pending = None;
        Some(self.begin_connect())
    }

    fn begin_connect(&mut self) -> PushCommand {
        self.state = ConnectionState::Connecting;
        self.connect_attempts += 1;
        PushCommand::Open
    }
}

/// Whole milliseconds left in a wait, clamped to `1..=backoff_ms`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn remaining_ms(left_ms: f64, backoff_ms: u32) -> u32 {
    let left = left_ms.ceil().clamp(1.0, f64::from(backoff_ms.max(1)));
    left as u32
}

/// Push endpoint for a page served from `protocol` + `host`.
///
/// Secure pages get `wss://`; everything else gets `ws://`.
#[must_use]
pub fn push_endpoint(protocol: &str, host: &str, path: &str) -> String {
    let scheme = if protocol.trim_end_matches(':').eq_ignore_ascii_case("https") {
        "wss"
    } else {
        "ws"
    };
    format!("{scheme}://{host}{path}")
}

/// Text sent after opening to ask the server for a full roster update.
pub const RESYNC_REQUEST: &str = "sync";

/// Events reported by a connection task.
#[cfg(feature = "csr")]
#[derive(Debug)]
pub enum TransportEvent {
    Opened,
    Text(String),
    Closed,
}

/// Open `url` and pump frames until the socket closes.
///
/// `Opened` is reported only after the socket's own open event; a socket
/// that errors or closes while still connecting reports just `Closed`.
/// Every inbound text frame is reported in arrival order through `report`.
/// Outbound text queued on `outbound` is written to the socket. Exactly one
/// `Closed` is reported when the connection ends, including when the open
/// itself fails.
#[cfg(feature = "csr")]
pub async fn run_connection(
    url: String,
    outbound: futures::channel::mpsc::UnboundedReceiver<String>,
    report: impl Fn(TransportEvent),
) {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let mut ws = match WebSocket::open(&url) {
        Ok(ws) => ws,
        Err(e) => {
            log::warn!("push channel open failed: {e}");
            report(TransportEvent::Closed);
            return;
        }
    };
    if !wait_for_open(&mut ws).await {
        log::warn!("push channel: {url} closed before opening");
        report(TransportEvent::Closed);
        return;
    }
    report(TransportEvent::Opened);
    let (mut ws_write, mut ws_read) = ws.split();

    let send_task = async {
        let mut outbound = outbound;
        while let Some(text) = outbound.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => report(TransportEvent::Text(text)),
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    log::warn!("push channel recv error: {e}");
                    break;
                }
            }
        }
    };

    // Either side finishing ends the connection.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    report(TransportEvent::Closed);
}

/// Resolve once a fresh socket leaves CONNECTING.
///
/// The sink turns ready on the open or error event; a close before that
/// shows up on the stream first. Returns whether the socket is now open.
#[cfg(feature = "csr")]
async fn wait_for_open(ws: &mut gloo_net::websocket::futures::WebSocket) -> bool {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::{Message, State};
    use std::task::Poll;

    let ready = futures::future::poll_fn(|cx| {
        if let Poll::Ready(result) = SinkExt::<Message>::poll_ready_unpin(&mut *ws, cx) {
            return Poll::Ready(result.is_ok());
        }
        match ws.poll_next_unpin(cx) {
            Poll::Ready(Some(Err(e))) => {
                log::warn!("push channel connect error: {e}");
                Poll::Ready(false)
            }
            Poll::Ready(_) => Poll::Ready(false),
            Poll::Pending => Poll::Pending,
        }
    })
    .await;
    ready && matches!(ws.state(), State::Open)
}
