//! Display implementation for todomaster messages.
//!
//! Single source of truth for user-facing text. Messages with parameters
//! interpolate them here so call sites only pick the variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task created with ID: {}", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskCompleted(id) => format!("Task {} marked as completed", id),
            Message::TaskAlreadyCompleted(id) => format!("Task {} is already completed", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TasksCleared(count) => format!("Cleared {} completed task(s)", count),
            Message::NoCompletedTasksToClear => "No completed tasks to clear".to_string(),
            Message::ConfirmDeleteTask(description) => format!("Delete task '{}'?", description),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === LIST HEADERS ===
            Message::TasksHeader => "Tasks".to_string(),
            Message::AllTasksHeader => "All Tasks".to_string(),
            Message::PendingTasksHeader => "Pending Tasks".to_string(),
            Message::OverdueTasksHeader => "Overdue Tasks".to_string(),
            Message::DueTodayHeader => "Due Today".to_string(),
            Message::UpcomingTasksHeader(days) => format!("Upcoming Tasks (Next {} Days)", days),
            Message::SearchResultsHeader(query) => format!("Search Results: {}", query),
            Message::StatsHeader => "Statistics".to_string(),
            Message::ListSummary(pending, overdue) => format!("{} pending • {} overdue", pending, overdue),

            // === EMPTY RESULTS ===
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::NoTasksDueToday => "No tasks due today".to_string(),
            Message::NoUpcomingTasks(days) => format!("No upcoming tasks in the next {} days", days),
            Message::NoSearchResults(query) => format!("No tasks found matching: {}", query),

            // === DATABASE MESSAGES ===
            Message::DbOpening(path) => format!("Opening task database at {}", path),
            Message::DbJournalMode(mode) => format!("Database journal mode: {}", mode),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::SchemaVersion(version) => format!("Database schema version: {}", version),
            Message::AppliedMigration(version, name, applied_at) => format!("  v{} {} (applied {})", version, name, applied_at),
        };

        write!(f, "{}", text)
    }
}
