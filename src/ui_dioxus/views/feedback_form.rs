use dioxus::prelude::*;
use crate::services::BoardSession;
use crate::ui_dioxus::state::SharedClock;
use tracing::debug;

#[component]
pub fn FeedbackForm(session: Signal<BoardSession>) -> Element {
    let clock = try_use_context::<SharedClock>().unwrap_or_default();
    let draft = session.read().draft().to_string();

    let mut session = session;
    let click_clock = clock.clone();

    rsx! {
        div {
            class: "feedback-form",

            h2 { "💬 Live Feedback" }

            input {
                r#type: "text",
                value: "{draft}",
                placeholder: "How's the vibe?",
                style: "padding: 10px; width: 80%; margin-right: 10px; border-radius: 4px; border: 1px solid #ccc;",
                oninput: move |evt| input_draft(session, evt.value()),
                onkeydown: move |evt| key_pressed(session, &clock, &evt.key()),
            }

            button {
                style: "padding: 10px; cursor: pointer; background: #007bff; color: white;
                       border: none; border-radius: 4px;",
                onclick: move |_| submit_draft(session, &click_clock),
                "SUBMIT"
            }
        }
    }
}

/// Keys in the input that act like the SUBMIT button
pub fn submits_on(key: &Key) -> bool {
    *key == Key::Enter
}

pub(crate) fn input_draft(mut session: Signal<BoardSession>, value: String) {
    session.write().update_draft(value);
}

pub(crate) fn key_pressed(session: Signal<BoardSession>, clock: &SharedClock, key: &Key) {
    if submits_on(key) {
        submit_draft(session, clock);
    }
}

pub(crate) fn submit_draft(mut session: Signal<BoardSession>, clock: &SharedClock) {
    if let Err(e) = session.write().submit(clock.0.as_ref()) {
        debug!("Feedback not added: {}", e);
    }
}
