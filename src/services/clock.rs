use chrono::Local;

/// Source of the wall-clock label stamped on feedback entries
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now_label(&self) -> String;
}

/// Local time of day, `HH:MM:SS`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_label(&self) -> String {
        Local::now().format("%H:%M:%S").to_string()
    }
}

/// Always reports the same label. Handy for rendering snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }
}

impl Clock for FixedClock {
    fn now_label(&self) -> String {
        self.0.clone()
    }
}
