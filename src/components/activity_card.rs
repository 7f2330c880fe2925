//! Card for a single activity with its participant list and join action.

#[cfg(test)]
#[path = "activity_card_test.rs"]
mod activity_card_test;

use leptos::prelude::*;

use crate::dispatcher::AppEvent;
use crate::runtime::Dispatch;
use crate::state::roster_view::ActivityCardView;

fn spots_class(card: &ActivityCardView) -> &'static str {
    if card.is_oversubscribed() {
        "activity-card__spots activity-card__spots--over"
    } else {
        "activity-card__spots"
    }
}

fn spots_label(card: &ActivityCardView) -> String {
    format!("{} spots left", card.spots_left)
}

/// One activity card. "Sign up" pre-selects the activity in the form.
#[component]
pub fn ActivityCard(card: ActivityCardView) -> impl IntoView {
    let dispatch = expect_context::<Dispatch>();
    let name = card.name.clone();
    let on_join = move |_: leptos::ev::MouseEvent| dispatch.send(AppEvent::CardSelected(name.clone()));

    let participants = match card.participants_placeholder() {
        Some(text) => view! { <li class="no-participants">{text}</li> }.into_any(),
        None => card
            .participants
            .iter()
            .cloned()
            .map(|email| view! { <li>{email}</li> })
            .collect::<Vec<_>>()
            .into_any(),
    };
    let schedule = card.schedule.clone().map(|schedule| {
        view! {
            <p class="activity-schedule">
                <strong>"Schedule: "</strong>
                {schedule}
            </p>
        }
    });

    view! {
        <div class="activity-card" data-activity=card.name.clone()>
            <h4 class="activity-title">{card.name.clone()}</h4>
            <p class="activity-description">{card.description.clone()}</p>
            {schedule}
            <p class="activity-capacity">
                <span class="participants-count">{card.participant_count()}</span>
                " / "
                <span class="slots-count">{card.max_participants}</span>
                " participants "
                <span class=spots_class(&card)>{spots_label(&card)}</span>
            </p>
            <ul class="participants-list">{participants}</ul>
            <button class="join-btn" type="button" on:click=on_join>
                "Sign up"
            </button>
        </div>
    }
}
