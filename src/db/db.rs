//! SQLite connection bootstrap.
//!
//! Every handle returned by [`Db`] is configured for safe use by several
//! todomaster processes at once:
//!
//! - `journal_mode = WAL`, so readers never block on a writer
//! - a busy timeout, so a second writer waits for the first instead of failing
//! - `foreign_keys = ON`, so tag rows follow their task on delete
//! - all pending schema migrations applied
//!
//! The connection is closed when the handle is dropped, on every exit path.

use super::migrations::init_with_migrations;
use crate::libs::config::DEFAULT_BUSY_TIMEOUT_SECS;
use crate::libs::error::{Result, TodoError};
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (or creates) the database file with the default busy timeout.
    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        Self::open_with_timeout(path, Duration::from_secs(DEFAULT_BUSY_TIMEOUT_SECS))
    }

    pub fn open_with_timeout(path: impl AsRef<Path>, busy_timeout: Duration) -> Result<Db> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        msg_debug!(Message::DbOpening(path.display().to_string()));
        let mut conn = Connection::open(path)?;
        bootstrap(&mut conn, busy_timeout, true)?;

        Ok(Db { conn })
    }

    /// Private in-memory database, mainly for tests.
    pub fn open_in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        bootstrap(&mut conn, Duration::from_secs(DEFAULT_BUSY_TIMEOUT_SECS), false)?;

        Ok(Db { conn })
    }

    /// Closes the connection, reporting any error SQLite raises while doing so.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| TodoError::from(err))
    }
}

fn bootstrap(conn: &mut Connection, busy_timeout: Duration, wal: bool) -> Result<()> {
    conn.busy_timeout(busy_timeout)?;
    conn.pragma_update(None, "foreign_keys", true)?;
    if wal {
        let mode: String = conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        msg_debug!(Message::DbJournalMode(mode));
    }
    init_with_migrations(conn)?;
    Ok(())
}
