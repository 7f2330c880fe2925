//! Activity list: the cards, or one inline placeholder when there are none.

use leptos::prelude::*;

use crate::components::activity_card::ActivityCard;
use crate::runtime::ViewSignals;
use crate::state::roster_view::RosterBody;

#[component]
pub fn RosterList() -> impl IntoView {
    let roster = expect_context::<ViewSignals>().roster;

    view! {
        <div id="activities-list">
            {move || {
                roster
                    .with(|state| match state.body() {
                        RosterBody::Activities(cards) => cards
                            .iter()
                            .cloned()
                            .map(|card| view! { <ActivityCard card=card/> })
                            .collect::<Vec<_>>()
                            .into_any(),
                        body @ RosterBody::LoadFailed => {
                            view! { <p class="roster-error">{body_text(body)}</p> }.into_any()
                        }
                        body => view! { <p class="roster-placeholder">{body_text(body)}</p> }.into_any(),
                    })
            }}
        </div>
    }
}

fn body_text(body: &RosterBody) -> &'static str {
    body.placeholder().unwrap_or_default()
}
