//! Signup form: email input, activity selection control, submit button.

use leptos::prelude::*;

use crate::dispatcher::AppEvent;
use crate::runtime::{Dispatch, ViewSignals};
use crate::util::browser::EMAIL_INPUT_ID;

#[component]
pub fn SignupForm() -> impl IntoView {
    let signals = expect_context::<ViewSignals>();
    let dispatch = expect_context::<Dispatch>();
    let form = signals.form;
    let roster = signals.roster;

    let on_submit = {
        let dispatch = dispatch.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            dispatch.send(AppEvent::SignupSubmitted);
        }
    };
    let on_email = {
        let dispatch = dispatch.clone();
        move |ev: leptos::ev::Event| dispatch.send(AppEvent::EmailChanged(event_target_value(&ev)))
    };
    let on_select = move |ev: leptos::ev::Event| dispatch.send(AppEvent::SelectionChanged(event_target_value(&ev)));

    let options = move || {
        roster.with(|state| {
            state
                .options()
                .iter()
                .cloned()
                .map(|option| {
                    let value = option.value.clone();
                    let selected = move || form.with(|f| f.activity == value);
                    view! {
                        <option value=option.value selected=selected>
                            {option.label}
                        </option>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for=EMAIL_INPUT_ID>"Student Email:"</label>
                <input
                    type="email"
                    id=EMAIL_INPUT_ID
                    required=true
                    placeholder="your-email@mergington.edu"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=on_email
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required=true
                    prop:value=move || form.with(|f| f.activity.clone())
                    on:change=on_select
                >
                    <option value="">"-- Select an activity --"</option>
                    {options}
                </select>
            </div>
            <button type="submit" disabled=move || form.with(|f| f.submitting)>
                "Sign Up"
            </button>
        </form>
    }
}
