use chrono::{DateTime, FixedOffset};

/// Source of the current time for naming sweep folders.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}
