//! # Clock Module
//!
//! The single source of "today" for the whole system.
//!
//! Pricing, expiry pruning and the near-expiry discount all hinge on the
//! current date, so the date is injected rather than read ambiently: code
//! under test runs against a [`FixedClock`], a host application passes
//! [`SystemClock`].

use chrono::{NaiveDate, Utc};

/// Supplies the current date.
pub trait Clock {
    /// The current date.
    fn today(&self) -> NaiveDate;
}

/// Production clock backed by the system time (UTC).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock pinned to one date, for deterministic tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let clock = FixedClock(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.today(), date);
    }
}
