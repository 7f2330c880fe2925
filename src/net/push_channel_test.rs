use super::*;

const BACKOFF: u32 = 5_000;

fn reconnect_timer(cmd: Option<PushCommand>) -> TimerId {
    match cmd {
        Some(PushCommand::ScheduleReconnect { timer, delay_ms }) => {
            assert_eq!(delay_ms, BACKOFF);
            timer
        }
        other => panic!("expected ScheduleReconnect, got {other:?}"),
    }
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn new_channel_is_disconnected_and_idle() {
    let channel = PushChannel::new(BACKOFF);
    assert_eq!(channel.state(), ConnectionState::Disconnected);
    assert_eq!(channel.connect_attempts(), 0);
    assert!(!channel.reconnect_pending());
    assert!(!channel.accepts_frames());
}

#[test]
fn start_opens_once() {
    let mut channel = PushChannel::new(BACKOFF);
    assert_eq!(channel.start(), Some(PushCommand::Open));
    assert_eq!(channel.state(), ConnectionState::Connecting);
    assert_eq!(channel.start(), None);
    assert_eq!(channel.connect_attempts(), 1);
}

#[test]
fn connect_close_wait_connect_visits_states_in_order() {
    let mut channel = PushChannel::new(BACKOFF);
    let mut visited = vec![channel.state()];

    channel.start();
    visited.push(channel.state());
    assert!(channel.opened());
    visited.push(channel.state());

    let timer = reconnect_timer(channel.closed(10_000.0));
    visited.push(channel.state());

    // Nothing may open inside the backoff window.
    assert_eq!(
        channel.backoff_elapsed(timer, 10_001.0),
        Some(PushCommand::ScheduleReconnect { timer, delay_ms: 4_999 })
    );
    assert_eq!(
        channel.backoff_elapsed(timer, 14_999.0),
        Some(PushCommand::ScheduleReconnect { timer, delay_ms: 1 })
    );
    assert_eq!(channel.connect_attempts(), 1);
    assert_eq!(channel.state(), ConnectionState::Disconnected);

    assert_eq!(channel.backoff_elapsed(timer, 15_000.0), Some(PushCommand::Open));
    visited.push(channel.state());
    assert!(channel.opened());
    visited.push(channel.state());

    assert_eq!(
        visited,
        vec![
            ConnectionState::Disconnected,
            ConnectionState::Connecting,
            ConnectionState::Connected,
            ConnectionState::Disconnected,
            ConnectionState::Connecting,
            ConnectionState::Connected,
        ]
    );
    assert_eq!(channel.connect_attempts(), 2);
}

#[test]
fn early_timer_fire_rearms_then_connects() {
    let mut channel = PushChannel::new(BACKOFF);
    channel.start();
    channel.opened();
    let timer = reconnect_timer(channel.closed(1_000.0));

    // Timer precision fired it a millisecond short of the due time.
    assert_eq!(
        channel.backoff_elapsed(timer, 5_999.0),
        Some(PushCommand::ScheduleReconnect { timer, delay_ms: 1 })
    );
    assert!(channel.reconnect_pending());
    assert_eq!(channel.state(), ConnectionState::Disconnected);

    assert_eq!(channel.backoff_elapsed(timer, 6_000.0), Some(PushCommand::Open));
    assert!(!channel.reconnect_pending());
    assert_eq!(channel.state(), ConnectionState::Connecting);
}

#[test]
fn early_fire_after_clock_jump_rearms_at_most_one_backoff() {
    let mut channel = PushChannel::new(BACKOFF);
    channel.start();
    let timer = reconnect_timer(channel.closed(50_000.0));

    assert_eq!(
        channel.backoff_elapsed(timer, 0.0),
        Some(PushCommand::ScheduleReconnect { timer, delay_ms: BACKOFF })
    );
    assert_eq!(
        channel.backoff_elapsed(timer, 54_999.4),
        Some(PushCommand::ScheduleReconnect { timer, delay_ms: 1 })
    );
}

#[test]
fn failed_open_also_backs_off() {
    let mut channel = PushChannel::new(BACKOFF);
    channel.start();
    let timer = reconnect_timer(channel.closed(0.0));
    assert_eq!(channel.state(), ConnectionState::Disconnected);
    assert_eq!(channel.backoff_elapsed(timer, 5_000.0), Some(PushCommand::Open));
}

#[test]
fn duplicate_close_arms_only_one_timer() {
    let mut channel = PushChannel::new(BACKOFF);
    channel.start();
    channel.opened();
    let timer = reconnect_timer(channel.closed(0.0));
    assert_eq!(channel.closed(100.0), None);
    assert_eq!(channel.backoff_elapsed(timer, 5_000.0), Some(PushCommand::Open));
}

#[test]
fn stale_timer_is_ignored() {
    let mut channel = PushChannel::new(BACKOFF);
    channel.start();
    channel.opened();
    let first = reconnect_timer(channel.closed(0.0));
    channel.backoff_elapsed(first, 5_000.0);
    channel.opened();
    let second = reconnect_timer(channel.closed(6_000.0));
    assert_ne!(first, second);

    assert_eq!(channel.backoff_elapsed(first, 20_000.0), None);
    assert_eq!(channel.backoff_elapsed(second, 20_000.0), Some(PushCommand::Open));
    // A timer is consumed by the open it triggers.
    assert_eq!(channel.backoff_elapsed(second, 30_000.0), None);
}

#[test]
fn timer_before_any_close_is_ignored() {
    let mut channel = PushChannel::new(BACKOFF);
    channel.start();
    assert_eq!(channel.backoff_elapsed(1, 99_999.0), None);
    assert_eq!(channel.state(), ConnectionState::Connecting);
}

#[test]
fn open_event_outside_connecting_is_ignored() {
    let mut channel = PushChannel::new(BACKOFF);
    assert!(!channel.opened());
    channel.start();
    channel.opened();
    assert!(!channel.opened());
    assert_eq!(channel.state(), ConnectionState::Connected);
}

#[test]
fn frames_accepted_only_while_connected() {
    let mut channel = PushChannel::new(BACKOFF);
    channel.start();
    assert!(!channel.accepts_frames());
    channel.opened();
    assert!(channel.accepts_frames());
    channel.closed(0.0);
    assert!(!channel.accepts_frames());
}

// =============================================================
// push_endpoint
// =============================================================

#[test]
fn push_endpoint_uses_ws_for_plain_pages() {
    assert_eq!(push_endpoint("http:", "localhost:8000", "/ws"), "ws://localhost:8000/ws");
}

#[test]
fn push_endpoint_upgrades_secure_pages() {
    assert_eq!(push_endpoint("https:", "school.example", "/ws"), "wss://school.example/ws");
    assert_eq!(push_endpoint("HTTPS", "school.example", "/ws"), "wss://school.example/ws");
}

#[test]
fn connection_state_labels() {
    assert_eq!(ConnectionState::default(), ConnectionState::Disconnected);
    assert_eq!(ConnectionState::Connected.label(), "Live");
    assert_eq!(ConnectionState::Connecting.label(), "Connecting...");
}
