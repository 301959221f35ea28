pub mod clock;
mod board_session;

pub use board_session::BoardSession;
pub use clock::{Clock, FixedClock, SystemClock};
