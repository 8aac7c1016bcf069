//! Text formatting for task display.
//!
//! Small pure helpers used by the table and detail views: relative due dates
//! ("Tomorrow", "Overdue by 3d"), compact ages ("2h"), timestamps and
//! truncation of long descriptions.
//!
//! ```rust
//! use todomaster::libs::formatter::{format_due, truncate};
//! use chrono::NaiveDate;
//!
//! let now = NaiveDate::from_ymd_opt(2026, 1, 11).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let due = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap().and_hms_opt(23, 59, 59).unwrap();
//! assert_eq!(format_due(Some(due), now), "Tomorrow");
//! assert_eq!(truncate("Buy milk", 20), "Buy milk");
//! ```

use chrono::NaiveDateTime;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Due date relative to `now`, in calendar days.
pub fn format_due(due: Option<NaiveDateTime>, now: NaiveDateTime) -> String {
    let Some(due) = due else {
        return "No due date".to_string();
    };

    let days = (due.date() - now.date()).num_days();
    match days {
        0 => "Today".to_string(),
        -1 => "Yesterday (overdue)".to_string(),
        d if d < 0 => format!("Overdue by {}d", -d),
        1 => "Tomorrow".to_string(),
        d if d < 7 => format!("In {} days", d),
        _ => due.format("%Y-%m-%d").to_string(),
    }
}

/// Largest whole unit of the time between `start` and `end`: "3d", "5h", "12m", "40s".
pub fn format_age(start: NaiveDateTime, end: NaiveDateTime) -> String {
    let diff = end - start;
    if diff.num_days() > 0 {
        format!("{}d", diff.num_days())
    } else if diff.num_hours() > 0 {
        format!("{}h", diff.num_hours())
    } else if diff.num_minutes() > 0 {
        format!("{}m", diff.num_minutes())
    } else {
        format!("{}s", diff.num_seconds().max(0))
    }
}

pub fn format_timestamp(moment: NaiveDateTime) -> String {
    moment.format(TIMESTAMP_FORMAT).to_string()
}

/// Cuts `text` to at most `max_chars` characters, ending with "..." when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str("...");
    cut
}
