/// Every message todomaster shows to the user or writes to the debug log.
///
/// The text lives in the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskCompleted(i64),
    TaskAlreadyCompleted(i64),
    TaskDeleted(i64),
    TasksCleared(usize),
    NoCompletedTasksToClear,
    ConfirmDeleteTask(String),
    OperationCancelled,

    // === LIST HEADERS ===
    TasksHeader,
    AllTasksHeader,
    PendingTasksHeader,
    OverdueTasksHeader,
    DueTodayHeader,
    UpcomingTasksHeader(i64),
    SearchResultsHeader(String),
    StatsHeader,
    ListSummary(usize, usize), // pending, overdue

    // === EMPTY RESULTS ===
    NoTasksFound,
    NoTasksDueToday,
    NoUpcomingTasks(i64),
    NoSearchResults(String),

    // === DATABASE MESSAGES ===
    DbOpening(String),
    DbJournalMode(String),

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseUpToDate,
    SchemaVersion(u32),
    AppliedMigration(u32, String, String), // version, name, applied_at
}
