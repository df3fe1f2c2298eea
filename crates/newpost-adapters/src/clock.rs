//! Clock adapters.

use chrono::Local;
use newpost_core::{application::ports::Clock, domain::PostDate};

/// Today's date in the machine's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> PostDate {
        PostDate::new(Local::now().date_naive())
    }
}

/// Always the same day. Backs `--date` and deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(PostDate);

impl FixedClock {
    pub fn new(date: PostDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> PostDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_date() {
        let date: PostDate = "2024-01-01".parse().unwrap();
        assert_eq!(FixedClock::new(date).today(), date);
    }

    #[test]
    fn system_clock_formats_as_iso_date() {
        let date = SystemClock.today();
        let today = date.to_string();
        assert_eq!(today.len(), 10);
        assert_eq!(today.as_bytes()[4], b'-');
        assert_eq!(today.as_bytes()[7], b'-');
        assert_eq!(today.parse::<PostDate>().unwrap(), date);
    }
}
