//! Due date parsing.
//!
//! Converts the date text a user types (`tomorrow`, `+3d`, `2026-12-25`,
//! `12/25/2026`, ...) into an absolute local timestamp. Parsing is a pure
//! function of the input and a reference "now".
//!
//! ## Grammar
//!
//! Rules are tried in order and the first match wins:
//!
//! 1. `today`, `tomorrow`, `yesterday`: that calendar day at 23:59:59
//! 2. `+<N>d`, `+<N>w`: the reference instant plus N days or weeks
//! 3. weekday names (`friday`, `fri`): the next such day after the reference date
//! 4. ISO dates `YYYY-MM-DD` (end of day) and ISO date-times `YYYY-MM-DD HH:MM[:SS]`
//!    or `YYYY-MM-DDTHH:MM[:SS]` (exact instant)
//! 5. `YYYY/MM/DD`, `MM/DD/YYYY`, `DD-MM-YYYY` (end of day)
//!
//! Slash dates with a trailing year are always month-first and dash dates with a
//! trailing year are always day-first, so `01/02/2026` is January 2nd and
//! `01-02-2026` is February 1st. There is no day-of-month guessing.
//!
//! Anything else is a [`TodoError::DateParse`]; there is no fallback date.

use super::error::{Result, TodoError};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Time of day given to due dates entered without a time, so that a task due
/// "today" is not overdue until the day is over.
pub const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 59) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

// Order matters: ISO first, then year-first slashes, US month-first, European day-first.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

/// Parses `text` relative to `reference_now`.
pub fn parse(text: &str, reference_now: NaiveDateTime) -> Result<NaiveDateTime> {
    let trimmed = text.trim();
    let lowered = trimmed.to_lowercase();

    parse_keyword(&lowered, reference_now)
        .or_else(|| parse_offset(&lowered, reference_now))
        .or_else(|| parse_weekday(&lowered, reference_now))
        .or_else(|| parse_absolute(trimmed))
        .ok_or_else(|| TodoError::DateParse { input: text.to_string() })
}

/// Returns the first instant of the day containing `moment`.
pub fn start_of_day(moment: NaiveDateTime) -> NaiveDateTime {
    moment.date().and_time(NaiveTime::MIN)
}

/// Returns 23:59:59 on the day containing `moment`.
pub fn end_of_day(moment: NaiveDateTime) -> NaiveDateTime {
    moment.date().and_time(END_OF_DAY)
}

fn parse_keyword(text: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let date = match text {
        "today" => now.date(),
        "tomorrow" => now.date().succ_opt()?,
        "yesterday" => now.date().pred_opt()?,
        _ => return None,
    };
    Some(date.and_time(END_OF_DAY))
}

fn parse_offset(text: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let body = text.strip_prefix('+')?;
    let unit = body.chars().last()?;
    let amount = &body[..body.len() - unit.len_utf8()];
    if amount.is_empty() || !amount.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let amount: i64 = amount.parse().ok()?;
    let offset = match unit {
        'd' => Duration::try_days(amount)?,
        'w' => Duration::try_weeks(amount)?,
        _ => return None,
    };
    now.checked_add_signed(offset)
}

fn parse_weekday(text: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let target: Weekday = text.parse().ok()?;
    let today = now.weekday().num_days_from_monday() as i64;
    let wanted = target.num_days_from_monday() as i64;
    let mut ahead = (wanted - today).rem_euclid(7);
    if ahead == 0 {
        ahead = 7;
    }
    let date = now.date().checked_add_signed(Duration::try_days(ahead)?)?;
    Some(date.and_time(END_OF_DAY))
}

fn parse_absolute(text: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(moment) = NaiveDateTime::parse_from_str(text, format) {
            return Some(moment);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date.and_time(END_OF_DAY));
        }
    }
    None
}
