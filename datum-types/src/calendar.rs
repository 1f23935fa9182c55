//! Proleptic Gregorian calendar arithmetic for DATE day-counts.
//!
//! A DATE is stored as a signed 32-bit count of days since the Unix epoch
//! (`1970-01-01` is day 0). The conversions in both directions are closed-form
//! Julian-day-number polynomials, so `date -> day-count -> date` is an exact
//! identity for every legal date and neither direction loops over years or
//! months.
//!
//! Everything here is a pure function: no I/O, no shared state, safe to call
//! from any thread.

use std::sync::OnceLock;

use datum_result::{Error, Result};
use regex::Regex;

use crate::options::DateOptions;

/// Julian day number of `1970-01-01`, the day-count epoch.
pub const EPOCH_JULIAN_DAY: i64 = 2_440_588;

/// Reserved day-count meaning "no valid date". Never a legal date.
pub const INVALID_DAY_COUNT: i32 = i32::MIN;

/// Day-count of `0001-01-01`, the earliest legal date.
pub const MIN_DAY_COUNT: i32 = -719_162;

const DAYS_PER_MONTH: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule, applied uniformly with no calendar reform.
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `year`.
#[inline]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Number of days in `month` of `year`, or `0` when `month` is not in `1..=12`.
#[inline]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    if month < 1 || month > 12 {
        return 0;
    }
    if month == 2 && is_leap_year(year) {
        return 29;
    }
    DAYS_PER_MONTH[month as usize]
}

/// Returns `true` when `(year, month, day)` names a real calendar day.
#[inline]
pub const fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    year >= 1 && day >= 1 && day <= days_in_month(year, month)
}

/// Julian day number of a proleptic Gregorian date.
///
/// January and February are treated as months 13 and 14 of the previous year
/// so the leap day falls at the end of the shifted year.
fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let a = i64::from(month <= 2);
    let y = i64::from(year) + 4800 - a;
    let m = i64::from(month) + 12 * a - 3;
    i64::from(day) + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

/// Convert a calendar date into its day-count.
///
/// Returns [`INVALID_DAY_COUNT`] when the date is not legal or its day-count
/// does not fit. Use [`try_date_to_day_count`] to learn which.
pub fn date_to_day_count(year: i32, month: u32, day: u32) -> i32 {
    try_date_to_day_count(year, month, day).unwrap_or(INVALID_DAY_COUNT)
}

/// Convert a calendar date into its day-count, reporting why it failed.
///
/// # Errors
///
/// - [`Error::InvalidArgumentError`] if `is_valid_date` rejects the date.
/// - [`Error::Overflow`] if the day-count is outside `[i32::MIN + 1, i32::MAX]`.
pub fn try_date_to_day_count(year: i32, month: u32, day: u32) -> Result<i32> {
    if !is_valid_date(year, month, day) {
        return Err(Error::InvalidArgumentError(format!(
            "invalid calendar date {year:04}-{month:02}-{day:02}"
        )));
    }

    let days = julian_day_number(year, month, day) - EPOCH_JULIAN_DAY;
    if days <= i64::from(INVALID_DAY_COUNT) || days > i64::from(i32::MAX) {
        return Err(Error::overflow(format_args!(
            "date {year:04}-{month:02}-{day:02} is outside the DATE day-count range"
        )));
    }
    Ok(days as i32)
}

/// Convert a day-count back into `(year, month, day)`.
///
/// This is the algebraic inverse of [`date_to_day_count`]. It uses floor
/// division throughout, so it is total over every `i32`; day-counts before
/// [`MIN_DAY_COUNT`] produce years below 1 which [`is_valid_date`] rejects.
pub fn day_count_to_date(day_count: i32) -> (i32, u32, u32) {
    let a = i64::from(day_count) + EPOCH_JULIAN_DAY + 32_044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1_461);
    let e = c - (1_461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);
    (year as i32, month as u32, day as u32)
}

/// 1-based ordinal of the day within its year.
pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<u32> {
    let days = try_date_to_day_count(year, month, day)?;
    let first = try_date_to_day_count(year, 1, 1)?;
    Ok((days - first + 1) as u32)
}

fn date_pattern() -> &'static Regex {
    static DATE_RE: OnceLock<Regex> = OnceLock::new();
    DATE_RE.get_or_init(|| {
        Regex::new(r"^\s*([0-9]{1,4})-([0-9]{1,2})-([0-9]{1,2})\s*$")
            .expect("DATE literal pattern is valid")
    })
}

/// Split `YYYY-MM-DD` text into numeric components.
///
/// Accepts a 1-4 digit year and 1-2 digit month and day, with optional
/// surrounding whitespace, so `2020-1-1` and `2020-01-01` are the same date.
/// Calendar legality is *not* checked here: `2021-02-30` parses and is left
/// for [`is_valid_date`] to reject.
pub fn parse_date_text(text: &str) -> Result<(i32, u32, u32)> {
    let caps = date_pattern().captures(text).ok_or_else(|| {
        Error::InvalidArgumentError(format!(
            "invalid DATE literal '{text}' (expected YYYY-MM-DD)"
        ))
    })?;

    let year = caps[1].parse::<i32>().map_err(|_| {
        Error::InvalidArgumentError(format!("invalid year in DATE literal '{text}'"))
    })?;
    let month = caps[2].parse::<u32>().map_err(|_| {
        Error::InvalidArgumentError(format!("invalid month in DATE literal '{text}'"))
    })?;
    let day = caps[3].parse::<u32>().map_err(|_| {
        Error::InvalidArgumentError(format!("invalid day in DATE literal '{text}'"))
    })?;
    Ok((year, month, day))
}

/// Parse, validate and encode a DATE literal with the default [`DateOptions`].
pub fn parse_day_count(text: &str) -> Result<i32> {
    parse_day_count_with(text, &DateOptions::default())
}

/// Parse, validate and encode a DATE literal inside the band `options` allows.
pub fn parse_day_count_with(text: &str, options: &DateOptions) -> Result<i32> {
    let (year, month, day) = parse_date_text(text)?;
    if !is_valid_date(year, month, day) {
        tracing::debug!(literal = text, "rejecting calendar-illegal DATE literal");
        return Err(Error::InvalidArgumentError(format!(
            "invalid DATE literal '{text}': no such calendar day"
        )));
    }
    let days = try_date_to_day_count(year, month, day)?;
    options.check(year, days).map_err(|reason| {
        tracing::debug!(literal = text, reason, "DATE literal outside configured band");
        Error::InvalidArgumentError(format!("invalid DATE literal '{text}': {reason}"))
    })?;
    tracing::trace!(literal = text, days, "parsed DATE literal");
    Ok(days)
}

/// Render a day-count as zero-padded `YYYY-MM-DD`.
///
/// # Errors
///
/// [`Error::InvalidArgumentError`] for [`INVALID_DAY_COUNT`] and for any
/// day-count that maps before `0001-01-01`.
pub fn format_day_count(day_count: i32) -> Result<String> {
    if day_count == INVALID_DAY_COUNT {
        return Err(Error::InvalidArgumentError(
            "DATE value holds no valid date".into(),
        ));
    }
    let (year, month, day) = day_count_to_date(day_count);
    if !is_valid_date(year, month, day) {
        return Err(Error::InvalidArgumentError(format!(
            "day-count {day_count} is before 0001-01-01"
        )));
    }
    Ok(format!("{year:04}-{month:02}-{day:02}"))
}

/// Returns `true` if `day_count` decodes to a legal date.
#[inline]
pub fn is_valid_day_count(day_count: i32) -> bool {
    day_count != INVALID_DAY_COUNT && day_count >= MIN_DAY_COUNT
}
