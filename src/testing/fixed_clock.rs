use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::ports::Clock;

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// 2026-10-17 09:30:05.123 UTC.
    pub fn sample() -> Self {
        let at = NaiveDate::from_ymd_opt(2026, 10, 17)
            .and_then(|d| d.and_hms_milli_opt(9, 30, 5, 123))
            .expect("valid sample time")
            .and_utc()
            .fixed_offset();
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
