// Dioxus UI: the activity board and its sub-views
pub mod app;
pub mod views;
pub mod state;


pub use app::{ActivityBoard, App, BoardLayout};
