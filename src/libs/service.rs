//! Task command semantics.
//!
//! [`TaskService`] sits between the command line and [`Tasks`]: it validates
//! and normalizes user input, resolves due date text, and turns each command
//! (`add`, `edit`, `done`, `list`, `today`, ...) into storage calls. All input
//! is validated before the first write, so a rejected command never leaves a
//! partial change behind.
//!
//! ## Usage
//!
//! ```rust
//! use todomaster::db::tasks::Tasks;
//! use todomaster::libs::service::{AddTask, ListOptions, TaskService};
//!
//! let mut service = TaskService::new(Tasks::open_in_memory()?);
//! let task = service.add(AddTask {
//!     description: "Renew passport".to_string(),
//!     priority: Some("high".to_string()),
//!     due: Some("+2w".to_string()),
//!     tags: vec!["admin, travel".to_string()],
//! })?;
//! assert_eq!(task.tags, vec!["admin", "travel"]);
//! assert_eq!(service.list(&ListOptions::default())?.len(), 1);
//! # Ok::<(), todomaster::libs::error::TodoError>(())
//! ```

use super::clock::{Clock, SystemClock};
use super::dates::{self, end_of_day, start_of_day};
use super::error::{Result, TodoError};
use super::task::{normalize_description, normalize_tags, NewTask, Priority, SortKey, TagChange, Task, TaskFilter, TaskPatch};
use crate::db::tasks::Tasks;
use chrono::{Duration, NaiveDateTime};

/// Window covered by [`TaskService::upcoming`].
pub const UPCOMING_DAYS: i64 = 7;

/// Raw input for `add`.
#[derive(Debug, Clone, Default)]
pub struct AddTask {
    pub description: String,
    pub priority: Option<String>,
    pub due: Option<String>,
    pub tags: Vec<String>,
}

/// Raw input for `edit`. Absent fields are left unchanged.
///
/// `due: Some("")` clears the due date; `due: None` keeps it.
#[derive(Debug, Clone, Default)]
pub struct EditTask {
    pub description: Option<String>,
    pub priority: Option<String>,
    pub due: Option<String>,
    pub add_tags: Vec<String>,
    pub remove_tags: Vec<String>,
    pub reopen: bool,
}

/// Filters for `list`. Combined with AND.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Include completed tasks.
    pub all: bool,
    /// Only pending tasks. This is also the default when `all` is not set.
    pub pending: bool,
    pub overdue: bool,
    pub priority: Option<String>,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Completed(Task),
    /// The task was already done; nothing was written.
    AlreadyCompleted(Task),
}

impl Completion {
    pub fn task(&self) -> &Task {
        match self {
            Completion::Completed(task) | Completion::AlreadyCompleted(task) => task,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
    pub due_today: usize,
    /// Pending task count per priority, highest first.
    pub by_priority: Vec<(Priority, usize)>,
}

pub struct TaskService<C: Clock = SystemClock> {
    tasks: Tasks,
    clock: C,
}

impl TaskService<SystemClock> {
    pub fn new(tasks: Tasks) -> Self {
        Self::with_clock(tasks, SystemClock)
    }
}

impl<C: Clock> TaskService<C> {
    pub fn with_clock(tasks: Tasks, clock: C) -> Self {
        TaskService { tasks, clock }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Releases the underlying database handle.
    pub fn close(self) -> Result<()> {
        self.tasks.close()
    }

    pub fn add(&mut self, input: AddTask) -> Result<Task> {
        let now = self.now();
        let mut task = NewTask::new(&normalize_description(&input.description)?);
        if let Some(priority) = &input.priority {
            task.priority = priority.parse()?;
        }
        if let Some(due) = &input.due {
            task.due_date = Some(dates::parse(due, now)?);
        }
        task.tags = normalize_tags(&input.tags);

        self.tasks.create(&task, now)
    }

    pub fn get(&self, id: i64) -> Result<Task> {
        self.tasks.get(id)
    }

    pub fn edit(&mut self, id: i64, input: EditTask) -> Result<Task> {
        let now = self.now();
        let mut patch = TaskPatch::default();

        if let Some(description) = &input.description {
            patch.description = Some(normalize_description(description)?);
        }
        if let Some(priority) = &input.priority {
            patch.priority = Some(priority.parse()?);
        }
        if let Some(due) = &input.due {
            patch.due_date = Some(if due.trim().is_empty() {
                None
            } else {
                Some(dates::parse(due, now)?)
            });
        }
        let add = normalize_tags(&input.add_tags);
        let remove = normalize_tags(&input.remove_tags);
        if !add.is_empty() || !remove.is_empty() {
            patch.tags = Some(TagChange::Modify { add, remove });
        }
        if input.reopen {
            patch.completed = Some(false);
        }

        if patch.is_empty() {
            return Err(TodoError::validation("edit", "no fields to change were given"));
        }
        self.tasks.update(id, &patch, now)
    }

    /// Marks a task done. Completing a task twice succeeds and keeps the
    /// first `completed_at`.
    pub fn complete(&mut self, id: i64) -> Result<Completion> {
        let current = self.tasks.get(id)?;
        if current.completed {
            return Ok(Completion::AlreadyCompleted(current));
        }

        let patch = TaskPatch {
            completed: Some(true),
            ..Default::default()
        };
        let task = self.tasks.update(id, &patch, self.now())?;
        Ok(Completion::Completed(task))
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        self.tasks.delete(id)
    }

    /// Deletes all completed tasks and returns how many were removed.
    pub fn clear(&mut self) -> Result<usize> {
        self.tasks.delete_completed()
    }

    pub fn list(&mut self, options: &ListOptions) -> Result<Vec<Task>> {
        let mut filter = TaskFilter::default();
        if options.pending || !options.all {
            filter.completed = Some(false);
        }
        if options.overdue {
            filter.overdue_at = Some(self.now());
        }
        if let Some(priority) = &options.priority {
            filter.priority = Some(priority.parse()?);
        }
        if let Some(tag) = &options.tag {
            let tag = tag.trim().to_lowercase();
            if tag.is_empty() {
                return Err(TodoError::validation("tag", "must not be empty"));
            }
            filter.tag = Some(tag);
        }

        self.tasks.list(&filter, SortKey::Default)
    }

    /// Pending tasks due by the end of today, overdue ones included.
    pub fn today(&mut self) -> Result<Vec<Task>> {
        let filter = TaskFilter {
            completed: Some(false),
            due_until: Some(end_of_day(self.now())),
            ..Default::default()
        };
        self.tasks.list(&filter, SortKey::Due)
    }

    /// Pending tasks due within the next [`UPCOMING_DAYS`] days.
    pub fn upcoming(&mut self) -> Result<Vec<Task>> {
        let now = self.now();
        let filter = TaskFilter {
            completed: Some(false),
            due_from: Some(now),
            due_until: now.checked_add_signed(Duration::days(UPCOMING_DAYS)),
            ..Default::default()
        };
        self.tasks.list(&filter, SortKey::Due)
    }

    /// Case-insensitive substring search over descriptions and tags.
    pub fn search(&mut self, query: &str) -> Result<Vec<Task>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(TodoError::validation("query", "must not be empty"));
        }

        let tasks = self.tasks.list(&TaskFilter::all(), SortKey::Id)?;
        Ok(tasks
            .into_iter()
            .filter(|task| task.description.to_lowercase().contains(&needle) || task.tags.iter().any(|tag| tag.contains(&needle)))
            .collect())
    }

    /// Aggregate counts, all read from one snapshot of the database.
    pub fn stats(&mut self) -> Result<TaskStats> {
        let now = self.now();
        let mut filters = vec![
            TaskFilter::all(),
            TaskFilter::completed(),
            TaskFilter::pending(),
            TaskFilter {
                overdue_at: Some(now),
                ..Default::default()
            },
            TaskFilter {
                completed: Some(false),
                due_from: Some(start_of_day(now)),
                due_until: Some(end_of_day(now)),
                ..Default::default()
            },
        ];
        filters.extend(Priority::ALL.iter().map(|&priority| TaskFilter {
            completed: Some(false),
            priority: Some(priority),
            ..Default::default()
        }));

        let counts = self.tasks.count_many(&filters)?;
        let (totals, per_priority) = counts.split_at(5);

        Ok(TaskStats {
            total: totals[0],
            completed: totals[1],
            pending: totals[2],
            overdue: totals[3],
            due_today: totals[4],
            by_priority: Priority::ALL.iter().copied().zip(per_priority.iter().copied()).collect(),
        })
    }
}
