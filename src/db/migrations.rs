//! Database schema migration management and versioning.
//!
//! The schema is built by an ordered list of migrations. Each applied migration
//! is recorded in the `migrations` table, so opening an existing database only
//! runs what is missing and never touches existing rows.
//!
//! ## Concurrency
//!
//! Two todomaster processes may open a brand-new database at the same moment.
//! Pending migrations are therefore applied inside an `IMMEDIATE` transaction,
//! and the schema version is read again once the write lock is held: the
//! second process sees the first one's work and applies nothing.
//!
//! ## Usage
//!
//! ```rust
//! use todomaster::db::migrations::{init_with_migrations, get_db_version};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! assert!(get_db_version(&conn)? > 0);
//! # Ok::<(), todomaster::libs::error::TodoError>(())
//! ```

use crate::libs::error::Result;
use crate::libs::messages::macros::is_debug_mode;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};

/// Tracking table for applied migrations.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema change.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> rusqlite::Result<()>,
}

/// Registry of all migrations, in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: the tasks table and the indexes used by list filters
        self.add_migration(1, "create_tasks", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    description TEXT NOT NULL CHECK (length(trim(description)) > 0),
                    priority TEXT NOT NULL DEFAULT 'medium' CHECK (priority IN ('low', 'medium', 'high')),
                    due_date TIMESTAMP,
                    completed BOOLEAN NOT NULL DEFAULT FALSE,
                    created_at TIMESTAMP NOT NULL,
                    updated_at TIMESTAMP NOT NULL,
                    completed_at TIMESTAMP,
                    CHECK ((completed = 0) = (completed_at IS NULL))
                )",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_completed ON tasks(completed)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_due_date ON tasks(due_date)", [])?;
            Ok(())
        });

        // Version 2: tags, one row per (task, tag), ordered by position
        self.add_migration(2, "create_task_tags", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS task_tags (
                    task_id INTEGER NOT NULL,
                    position INTEGER NOT NULL,
                    tag TEXT NOT NULL,
                    PRIMARY KEY (task_id, tag),
                    FOREIGN KEY (task_id) REFERENCES tasks(id) ON DELETE CASCADE
                )",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_task_tags_tag ON task_tags(tag)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> rusqlite::Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the database's current version.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        if !self.has_pending(conn)? {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute(MIGRATIONS_TABLE, [])?;

        // Re-read under the write lock; another process may have migrated meanwhile.
        let current_version = self.get_current_version(&tx)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();
        if pending.is_empty() {
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));
            if let Err(e) = (migration.up)(&tx) {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(e.into());
            }
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }

        tx.commit()?;
        msg_debug!(Message::AllMigrationsCompleted);
        Ok(())
    }

    fn has_pending(&self, conn: &Connection) -> Result<bool> {
        if !migrations_table_exists(conn)? {
            return Ok(!self.migrations.is_empty());
        }
        Ok(self.get_current_version(conn)? < self.latest_version())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }

    fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    /// Applied migrations as `(version, name, applied_at)`, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;
        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Brings `conn` up to the latest schema version.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;

    if is_debug_mode() {
        msg_debug!(Message::SchemaVersion(get_db_version(conn)?));
        for (version, name, applied_at) in manager.get_migration_history(conn)? {
            msg_debug!(Message::AppliedMigration(version, name, applied_at));
        }
    }
    Ok(())
}

/// Current schema version, 0 for a database that was never migrated.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    if !migrations_table_exists(conn)? {
        return Ok(0);
    }
    MigrationManager::new().get_current_version(conn)
}

fn migrations_table_exists(conn: &Connection) -> Result<bool> {
    let found: Option<i32> = conn
        .query_row("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'migrations'", [], |row| row.get(0))
        .optional()?;
    Ok(found.is_some())
}
