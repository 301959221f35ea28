use dioxus::prelude::*;
use crate::config::BoardConfig;
use crate::domain::place::{markers_for, FRIENDS, VENUES};
use crate::services::BoardSession;
use crate::ui_dioxus::state::SharedClock;
use crate::ui_dioxus::views::*;

/// Root component handed to the desktop/web launcher
#[component]
pub fn App() -> Element {
    let config = use_hook(BoardConfig::load_or_default);
    use_context_provider(SharedClock::system);

    rsx! {
        ActivityBoard { config: config }
    }
}

/// Map, feedback form and list, then the trending and friends panels,
/// stacked in one column. Feedback lives only as long as this component.
#[component]
pub fn ActivityBoard(config: BoardConfig) -> Element {
    let session = use_signal(BoardSession::new);

    rsx! {
        BoardLayout { config: config, session: session }
    }
}

#[component]
pub fn BoardLayout(config: BoardConfig, session: Signal<BoardSession>) -> Element {
    let entries = session.read().entries().to_vec();

    rsx! {
        div {
            class: "activity-board",
            style: "font-family: Arial, sans-serif; padding: 20px;",

            MapView {
                config: config.map.clone(),
                markers: markers_for(&VENUES, &FRIENDS),
            }

            FeedbackForm { session: session }

            FeedbackList { entries: entries }

            TrendingPanel { venues: VENUES.to_vec() }

            FriendsPanel { friends: FRIENDS.to_vec() }
        }
    }
}
