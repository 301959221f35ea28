use crate::services::{Clock, FixedClock, SystemClock};
use std::rc::Rc;

/// Clock shared through the component tree via context.
/// Components fall back to the system clock when none is provided.
#[derive(Clone)]
pub struct SharedClock(pub Rc<dyn Clock>);

impl SharedClock {
    pub fn system() -> Self {
        Self(Rc::new(SystemClock))
    }

    pub fn fixed(label: impl Into<String>) -> Self {
        Self(Rc::new(FixedClock::new(label)))
    }
}

impl Default for SharedClock {
    fn default() -> Self {
        Self::system()
    }
}
