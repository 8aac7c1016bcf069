//! Database layer for todomaster.
//!
//! Persists tasks in a single SQLite file. Connections run in WAL mode with a
//! busy timeout, and every write goes through an immediate transaction, so
//! several todomaster processes can share one database file safely.
//!
//! ## Usage
//!
//! ```rust
//! use todomaster::db::tasks::Tasks;
//! use todomaster::libs::task::{NewTask, TaskFilter, SortKey};
//! use chrono::NaiveDate;
//!
//! let now = NaiveDate::from_ymd_opt(2026, 1, 11).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let mut tasks = Tasks::open_in_memory()?;
//! let task = tasks.create(&NewTask::new("Review code"), now)?;
//! assert_eq!(tasks.list(&TaskFilter::pending(), SortKey::Default)?, vec![task]);
//! # Ok::<(), todomaster::libs::error::TodoError>(())
//! ```

/// Connection setup: pragmas, journal mode and migrations.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Task persistence: CRUD, filtering and tag storage.
pub mod tasks;
