use dioxus::prelude::*;
use crate::domain::feedback::FeedbackEntry;

pub const EMPTY_FEEDBACK_MESSAGE: &str = "No feedback yet. Be the first!";

/// Entries in the order given, which the session keeps newest first
#[component]
pub fn FeedbackList(entries: Vec<FeedbackEntry>) -> Element {
    rsx! {
        div {
            class: "feedback-list",

            h3 { "📝 Recent Feedback" }

            if entries.is_empty() {
                p { class: "feedback-empty", "{EMPTY_FEEDBACK_MESSAGE}" }
            } else {
                ul {
                    style: "list-style: none; padding: 0;",
                    for entry in entries.iter() {
                        li {
                            key: "{entry.id}",
                            class: "feedback-entry",
                            style: "padding: 5px; border-bottom: 1px solid #ddd;",
                            "{entry.text} "
                            small { "({entry.submitted_at_label})" }
                        }
                    }
                }
            }
        }
    }
}
