//! Push-channel status indicator shown in the page header.

#[cfg(test)]
#[path = "connection_badge_test.rs"]
mod connection_badge_test;

use leptos::prelude::*;

use crate::net::push_channel::ConnectionState;
use crate::runtime::ViewSignals;

fn dot_class(state: ConnectionState) -> &'static str {
    match state {
        ConnectionState::Connected => "connection-badge__dot connection-badge__dot--connected",
        ConnectionState::Connecting => "connection-badge__dot connection-badge__dot--connecting",
        ConnectionState::Disconnected => "connection-badge__dot connection-badge__dot--disconnected",
    }
}

#[component]
pub fn ConnectionBadge() -> impl IntoView {
    let connection = expect_context::<ViewSignals>().connection;

    view! {
        <span class="connection-badge">
            <span class=move || dot_class(connection.get())></span>
            {move || connection.get().label()}
        </span>
    }
}
