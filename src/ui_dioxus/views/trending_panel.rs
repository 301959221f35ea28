use dioxus::prelude::*;
use crate::domain::place::Venue;

#[component]
pub fn TrendingPanel(venues: Vec<Venue>) -> Element {
    rsx! {
        div {
            class: "trending-panel",

            h3 { "🔥 Trending Now" }

            for venue in venues.iter() {
                div {
                    key: "{venue.name}",
                    class: "venue-card",
                    style: "padding: 10px; border-bottom: 1px solid #ddd; background: #f9f9f9;
                           border-radius: 4px; margin-bottom: 5px;",
                    strong { "{venue.name}" }
                    br {}
                    "{venue.vibe}"
                }
            }
        }
    }
}
