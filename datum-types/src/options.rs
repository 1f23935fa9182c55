//! Tunables for DATE literal acceptance.

use crate::calendar::date_to_day_count;

/// Calendar band accepted when turning text into a DATE.
///
/// The registry's DATE strategy parses with [`DateOptions::default`]; callers
/// that need a narrower band (for example an ingestion path that only expects
/// post-epoch dates) pass their own options to
/// [`DateType::parse_with`](crate::strategy::DateType::parse_with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateOptions {
    /// Smallest accepted year, inclusive.
    pub min_year: i32,
    /// Largest accepted year, inclusive.
    pub max_year: i32,
    /// Whether dates before `1970-01-01` (negative day-counts) are accepted.
    pub allow_pre_epoch: bool,
}

impl Default for DateOptions {
    fn default() -> Self {
        Self {
            min_year: 1,
            max_year: 9999,
            allow_pre_epoch: true,
        }
    }
}

impl DateOptions {
    /// Options that only accept dates on or after the epoch.
    pub fn post_epoch() -> Self {
        Self {
            min_year: 1970,
            allow_pre_epoch: false,
            ..Self::default()
        }
    }

    /// Checks an already-validated date against the configured band.
    pub(crate) fn check(&self, year: i32, day_count: i32) -> Result<(), &'static str> {
        if year < self.min_year || year > self.max_year {
            return Err("year outside the accepted range");
        }
        if !self.allow_pre_epoch && day_count < 0 {
            return Err("dates before 1970-01-01 are not accepted");
        }
        Ok(())
    }

    /// Returns `true` if `(year, month, day)` is legal and inside the band.
    pub fn accepts(&self, year: i32, month: u32, day: u32) -> bool {
        let days = date_to_day_count(year, month, day);
        days != crate::calendar::INVALID_DAY_COUNT && self.check(year, days).is_ok()
    }
}
