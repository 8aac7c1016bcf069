//! Task persistence.
//!
//! [`Tasks`] owns the SQLite connection and is the only code that reads or
//! writes task rows. Tags live in the `task_tags` table, one row per tag with
//! its display position, and are loaded together with their task.
//!
//! ## Transactions
//!
//! Every write runs inside an `IMMEDIATE` transaction: the write lock is taken
//! before anything is read, so a read-modify-write such as [`Tasks::update`]
//! cannot interleave with another process's write. A writer that cannot get
//! the lock within the busy timeout fails with [`TodoError::StorageBusy`].
//! Multi-statement reads run in a deferred transaction so they see one
//! consistent snapshot.
//!
//! ## Usage
//!
//! ```rust
//! use todomaster::db::tasks::Tasks;
//! use todomaster::libs::task::{NewTask, SortKey, TaskFilter};
//! use chrono::NaiveDate;
//!
//! let now = NaiveDate::from_ymd_opt(2026, 1, 11).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let mut tasks = Tasks::open_in_memory()?;
//! let task = tasks.create(&NewTask::new("Write report"), now)?;
//! assert_eq!(tasks.get(task.id)?.description, "Write report");
//! assert_eq!(tasks.list(&TaskFilter::pending(), SortKey::Default)?.len(), 1);
//! # Ok::<(), todomaster::libs::error::TodoError>(())
//! ```

use super::db::Db;
use crate::libs::error::{Result, TodoError};
use crate::libs::task::{NewTask, SortKey, Task, TaskFilter, TaskPatch};
use chrono::NaiveDateTime;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, ToSql, TransactionBehavior};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

const INSERT_TASK: &str = "INSERT INTO tasks (description, priority, due_date, completed, created_at, updated_at, completed_at)
    VALUES (?1, ?2, ?3, FALSE, ?4, ?4, NULL)";
const UPDATE_TASK: &str = "UPDATE tasks
    SET description = ?2, priority = ?3, due_date = ?4, completed = ?5, updated_at = ?6, completed_at = ?7
    WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, description, priority, due_date, completed, created_at, updated_at, completed_at FROM tasks";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const DELETE_COMPLETED: &str = "DELETE FROM tasks WHERE completed = TRUE";
const INSERT_TASK_TAG: &str = "INSERT OR IGNORE INTO task_tags (task_id, position, tag) VALUES (?1, ?2, ?3)";
const DELETE_TASK_TAGS: &str = "DELETE FROM task_tags WHERE task_id = ?1";
const SELECT_TAGS_BY_TASK: &str = "SELECT tag FROM task_tags WHERE task_id = ?1 ORDER BY position";
const SELECT_TAGS_BY_TASKS: &str = "SELECT task_id, tag FROM task_tags WHERE task_id IN";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new(db: Db) -> Self {
        Tasks { conn: db.conn }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Db::open(path)?))
    }

    pub fn open_with_timeout(path: impl AsRef<Path>, busy_timeout: Duration) -> Result<Self> {
        Ok(Self::new(Db::open_with_timeout(path, busy_timeout)?))
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Db::open_in_memory()?))
    }

    /// Releases the database handle. Dropping `Tasks` does the same, minus
    /// the error report.
    pub fn close(self) -> Result<()> {
        Db { conn: self.conn }.close()
    }

    /// Inserts a task and its tags, returning the stored row.
    pub fn create(&mut self, task: &NewTask, now: NaiveDateTime) -> Result<Task> {
        if task.description.trim().is_empty() {
            return Err(TodoError::validation("description", "must not be empty"));
        }

        let tx = self.conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute(INSERT_TASK, params![task.description, task.priority, task.due_date, now])?;
        let id = tx.last_insert_rowid();
        insert_tags(&tx, id, &task.tags)?;
        let created = fetch_one(&tx, id)?;
        tx.commit()?;

        tracing::debug!(task_id = id, "task inserted");
        Ok(created)
    }

    pub fn get(&self, id: i64) -> Result<Task> {
        fetch_one(&self.conn, id)
    }

    /// Applies the supplied fields and refreshes `updated_at`.
    ///
    /// `completed_at` follows `completed`: it keeps its value when an already
    /// completed task is completed again, is set to `now` on the first
    /// completion, and is cleared when the task is reopened.
    pub fn update(&mut self, id: i64, patch: &TaskPatch, now: NaiveDateTime) -> Result<Task> {
        if let Some(description) = &patch.description {
            if description.trim().is_empty() {
                return Err(TodoError::validation("description", "must not be empty"));
            }
        }

        let tx = self.conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let current = fetch_one(&tx, id)?;
        let next = apply_patch(current, patch, now);

        tx.execute(
            UPDATE_TASK,
            params![next.id, next.description, next.priority, next.due_date, next.completed, next.updated_at, next.completed_at],
        )?;
        if patch.tags.is_some() {
            tx.execute(DELETE_TASK_TAGS, params![id])?;
            insert_tags(&tx, id, &next.tags)?;
        }
        let updated = fetch_one(&tx, id)?;
        tx.commit()?;

        tracing::debug!(task_id = id, "task updated");
        Ok(updated)
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let tx = self.conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let affected = tx.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(TodoError::NotFound(id));
        }
        tx.commit()?;

        tracing::debug!(task_id = id, "task deleted");
        Ok(())
    }

    /// Removes every completed task and returns how many were removed.
    pub fn delete_completed(&mut self) -> Result<usize> {
        let tx = self.conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let affected = tx.execute(DELETE_COMPLETED, [])?;
        tx.commit()?;

        tracing::debug!(count = affected, "completed tasks deleted");
        Ok(affected)
    }

    /// Returns every task matching `filter`, ordered by `sort`.
    pub fn list(&mut self, filter: &TaskFilter, sort: SortKey) -> Result<Vec<Task>> {
        let (where_sql, values) = where_clause(filter);
        let sql = format!("{} {} {}", SELECT_TASKS, where_sql, order_clause(sort));

        let tx = self.conn.transaction()?;
        let mut tasks = {
            let mut stmt = tx.prepare(&sql)?;
            let rows = stmt.query_map(params_from_iter(values.iter()), task_from_row)?;
            rows.collect::<rusqlite::Result<Vec<Task>>>()?
        };
        attach_tags(&tx, &mut tasks)?;
        tx.commit()?;

        Ok(tasks)
    }

    pub fn count(&self, filter: &TaskFilter) -> Result<usize> {
        count_matching(&self.conn, filter)
    }

    /// Counts each filter against the same snapshot, so the results are
    /// consistent with each other even while other processes write.
    pub fn count_many(&mut self, filters: &[TaskFilter]) -> Result<Vec<usize>> {
        let tx = self.conn.transaction()?;
        let counts = filters
            .iter()
            .map(|filter| count_matching(&tx, filter))
            .collect::<Result<Vec<usize>>>()?;
        tx.commit()?;

        Ok(counts)
    }
}

fn count_matching(conn: &Connection, filter: &TaskFilter) -> Result<usize> {
    let (where_sql, values) = where_clause(filter);
    let sql = format!("{} {}", COUNT_TASKS, where_sql);
    let count: i64 = conn.query_row(&sql, params_from_iter(values.iter()), |row| row.get(0))?;
    Ok(count as usize)
}

fn apply_patch(mut task: Task, patch: &TaskPatch, now: NaiveDateTime) -> Task {
    if let Some(description) = &patch.description {
        task.description = description.clone();
    }
    if let Some(priority) = patch.priority {
        task.priority = priority;
    }
    if let Some(due_date) = patch.due_date {
        task.due_date = due_date;
    }
    if let Some(change) = &patch.tags {
        task.tags = change.apply(&task.tags);
    }
    match patch.completed {
        Some(true) => {
            task.completed_at = task.completed_at.or(Some(now));
            task.completed = true;
        }
        Some(false) => {
            task.completed_at = None;
            task.completed = false;
        }
        None => {}
    }
    task.updated_at = now.max(task.created_at);
    task
}

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        description: row.get(1)?,
        priority: row.get(2)?,
        due_date: row.get(3)?,
        completed: row.get(4)?,
        tags: Vec::new(),
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
        completed_at: row.get(7)?,
    })
}

fn fetch_one(conn: &Connection, id: i64) -> Result<Task> {
    let sql = format!("{} {}", SELECT_TASKS, WHERE_ID);
    let mut task = conn
        .query_row(&sql, params![id], task_from_row)
        .optional()?
        .ok_or(TodoError::NotFound(id))?;

    let mut stmt = conn.prepare_cached(SELECT_TAGS_BY_TASK)?;
    task.tags = stmt
        .query_map(params![id], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;

    Ok(task)
}

fn insert_tags(conn: &Connection, task_id: i64, tags: &[String]) -> Result<()> {
    let mut stmt = conn.prepare_cached(INSERT_TASK_TAG)?;
    for (position, tag) in tags.iter().enumerate() {
        stmt.execute(params![task_id, position as i64, tag])?;
    }
    Ok(())
}

fn attach_tags(conn: &Connection, tasks: &mut [Task]) -> Result<()> {
    if tasks.is_empty() {
        return Ok(());
    }

    let ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
    let sql = format!(
        "{} ({}) ORDER BY task_id, position",
        SELECT_TAGS_BY_TASKS,
        vec!["?"; ids.len()].join(", ")
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(ids.iter()), |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?;

    let mut by_task: HashMap<i64, Vec<String>> = HashMap::new();
    for row in rows {
        let (task_id, tag) = row?;
        by_task.entry(task_id).or_default().push(tag);
    }
    for task in tasks.iter_mut() {
        if let Some(tags) = by_task.remove(&task.id) {
            task.tags = tags;
        }
    }
    Ok(())
}

fn where_clause(filter: &TaskFilter) -> (String, Vec<Box<dyn ToSql>>) {
    let mut clauses: Vec<&str> = Vec::new();
    let mut values: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(completed) = filter.completed {
        clauses.push("completed = ?");
        values.push(Box::new(completed));
    }
    if let Some(priority) = filter.priority {
        clauses.push("priority = ?");
        values.push(Box::new(priority));
    }
    if let Some(tag) = &filter.tag {
        clauses.push("id IN (SELECT task_id FROM task_tags WHERE tag = ?)");
        values.push(Box::new(tag.clone()));
    }
    if let Some(now) = filter.overdue_at {
        clauses.push("completed = FALSE AND due_date IS NOT NULL AND due_date < ?");
        values.push(Box::new(now));
    }
    if let Some(from) = filter.due_from {
        clauses.push("due_date >= ?");
        values.push(Box::new(from));
    }
    if let Some(until) = filter.due_until {
        clauses.push("due_date <= ?");
        values.push(Box::new(until));
    }

    if clauses.is_empty() {
        return (String::new(), values);
    }
    (format!("WHERE {}", clauses.join(" AND ")), values)
}

fn order_clause(sort: SortKey) -> &'static str {
    match sort {
        SortKey::Default => "ORDER BY completed ASC, due_date IS NULL, due_date ASC, id ASC",
        SortKey::Due => "ORDER BY due_date IS NULL, due_date ASC, id ASC",
        SortKey::Id => "ORDER BY id ASC",
    }
}
