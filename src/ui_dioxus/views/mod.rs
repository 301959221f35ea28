pub mod map_view;
pub mod feedback_form;
pub mod feedback_list;
pub mod trending_panel;
pub mod friends_panel;

pub use map_view::{MapState, MapView};
pub use feedback_form::FeedbackForm;
pub use feedback_list::{FeedbackList, EMPTY_FEEDBACK_MESSAGE};
pub use trending_panel::TrendingPanel;
pub use friends_panel::FriendsPanel;
