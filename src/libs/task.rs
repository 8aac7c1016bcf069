//! Task domain types.
//!
//! Defines the [`Task`] record, its [`Priority`], the typed inputs used to
//! create and mutate tasks ([`NewTask`], [`TaskPatch`]), and the query types
//! understood by the storage layer ([`TaskFilter`], [`SortKey`]).

use super::error::{Result, TodoError};
use chrono::NaiveDateTime;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TodoError;

    /// Accepts the full names and the short aliases `h`, `m`, `med`, `l`,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" | "h" => Ok(Priority::High),
            "medium" | "med" | "m" => Ok(Priority::Medium),
            "low" | "l" => Ok(Priority::Low),
            other => Err(TodoError::validation(
                "priority",
                format!("'{}' is not one of low, medium, high", other),
            )),
        }
    }
}

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        text.parse().map_err(|e: TodoError| FromSqlError::Other(Box::new(e)))
    }
}

/// A stored task.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDateTime>,
    pub completed: bool,
    pub tags: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
}

impl Task {
    /// Due before `now` and still pending.
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < now)
    }
}

/// A task that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDateTime>,
    pub tags: Vec<String>,
}

impl NewTask {
    pub fn new(description: &str) -> Self {
        NewTask {
            description: description.to_string(),
            priority: Priority::default(),
            due_date: None,
            tags: Vec::new(),
        }
    }
}

/// Partial update of the mutable task fields. `None` leaves a field untouched.
///
/// `due_date: Some(None)` clears the due date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<NaiveDateTime>>,
    pub tags: Option<TagChange>,
    pub completed: Option<bool>,
}

/// How a patch changes the tag set. Applied against the stored tags inside
/// the write transaction, so concurrent edits do not drop each other's tags.
#[derive(Debug, Clone, PartialEq)]
pub enum TagChange {
    Set(Vec<String>),
    Modify { add: Vec<String>, remove: Vec<String> },
}

impl TagChange {
    pub fn apply(&self, current: &[String]) -> Vec<String> {
        match self {
            TagChange::Set(tags) => tags.clone(),
            TagChange::Modify { add, remove } => {
                let mut tags: Vec<String> = current.iter().filter(|t| !remove.contains(t)).cloned().collect();
                for tag in add {
                    if !tags.contains(tag) {
                        tags.push(tag.clone());
                    }
                }
                tags
            }
        }
    }
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.tags.is_none()
            && self.completed.is_none()
    }
}

/// Conjunctive row filter. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub tag: Option<String>,
    /// Pending tasks due strictly before this instant.
    pub overdue_at: Option<NaiveDateTime>,
    /// Inclusive lower bound on the due date. Undated tasks never match.
    pub due_from: Option<NaiveDateTime>,
    /// Inclusive upper bound on the due date. Undated tasks never match.
    pub due_until: Option<NaiveDateTime>,
}

impl TaskFilter {
    pub fn all() -> Self {
        TaskFilter::default()
    }

    pub fn pending() -> Self {
        TaskFilter {
            completed: Some(false),
            ..Default::default()
        }
    }

    pub fn completed() -> Self {
        TaskFilter {
            completed: Some(true),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Pending first, then soonest due (undated last), then id.
    #[default]
    Default,
    /// Soonest due first (undated last), then id.
    Due,
    Id,
}

/// Trims a description and collapses internal whitespace runs.
pub fn normalize_description(description: &str) -> Result<String> {
    let normalized = description.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return Err(TodoError::validation("description", "must not be empty"));
    }
    Ok(normalized)
}

/// Splits raw tag input on commas, semicolons and whitespace, lowercases each
/// tag and drops duplicates while keeping first-seen order.
pub fn normalize_tags<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for chunk in raw {
        for tag in chunk.as_ref().split(|c: char| c == ',' || c == ';' || c.is_whitespace()) {
            let tag = tag.trim().to_lowercase();
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    tags
}
