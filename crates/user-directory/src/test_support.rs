//! Shared helpers for unit tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a fixed instant.
pub(crate) struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl FixtureClock {
    /// Pins the clock to noon UTC on the given date.
    pub(crate) fn at_noon_utc(year: i32, month: u32, day: u32) -> Self {
        let utc_now = Utc
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp");
        Self { utc_now }
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}
