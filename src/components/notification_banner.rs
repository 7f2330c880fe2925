//! Status banner for signup results.

#[cfg(test)]
#[path = "notification_banner_test.rs"]
mod notification_banner_test;

use leptos::prelude::*;

use crate::runtime::ViewSignals;
use crate::state::notification::NotificationState;
use crate::util::browser::now_ms;

/// CSS class and text for the banner at `now_ms`; hidden once expired.
fn banner_at(state: &NotificationState, now_ms: f64) -> (&'static str, String) {
    state
        .visible_at(now_ms)
        .map_or(("hidden", String::new()), |p| (p.kind.css_class(), p.text.clone()))
}

/// Shows the live notification, or stays hidden when there is none.
#[component]
pub fn NotificationBanner() -> impl IntoView {
    let notification = expect_context::<ViewSignals>().notification;

    let banner = Memo::new(move |_| notification.with(|n| banner_at(n, now_ms())));
    let class = move || banner.with(|(class, _)| *class);
    let text = move || banner.with(|(_, text)| text.clone());

    view! {
        <div id="message" class=class role="status">
            {text}
        </div>
    }
}
