use dioxus::prelude::*;
use crate::domain::place::Friend;

#[component]
pub fn FriendsPanel(friends: Vec<Friend>) -> Element {
    rsx! {
        div {
            class: "friends-panel",

            h3 { "🕺 Friends Out & About" }

            for friend in friends.iter() {
                div {
                    key: "{friend.name}",
                    class: "friend-card",
                    style: "padding: 10px; border-bottom: 1px solid #ddd; background: #e3f2fd;
                           border-radius: 4px; margin-bottom: 5px;",
                    strong { "{friend.name}" }
                    " - {friend.status}"
                }
            }
        }
    }
}
