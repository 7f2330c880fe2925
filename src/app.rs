//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    connection_badge::ConnectionBadge, notification_banner::NotificationBanner, roster_list::RosterList,
    signup_form::SignupForm,
};
use crate::config::SyncConfig;
use crate::dispatcher::Dispatcher;
use crate::runtime::{Dispatch, ViewSignals};

/// Root application component.
///
/// Builds the dispatcher, mirrors its state into signals, and (in the
/// browser) starts the runtime that loads the roster and opens the push
/// channel.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let dispatcher = Dispatcher::new(SyncConfig::default());
    let signals = ViewSignals::new(&dispatcher);
    let dispatch = start_dispatch(dispatcher, signals);

    provide_context(signals);
    provide_context(dispatch);

    view! {
        <Title text="Mergington High School Activities"/>

        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
            <ConnectionBadge/>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <RosterList/>
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm/>
                <NotificationBanner/>
            </section>
        </main>
    }
}

#[cfg(feature = "csr")]
fn start_dispatch(dispatcher: Dispatcher, signals: ViewSignals) -> Dispatch {
    crate::runtime::spawn_runtime(dispatcher, signals)
}

#[cfg(not(feature = "csr"))]
fn start_dispatch(_dispatcher: Dispatcher, _signals: ViewSignals) -> Dispatch {
    Dispatch::detached()
}
