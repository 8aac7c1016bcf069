//! # Todomaster
//!
//! A single-user command-line task tracker backed by a local SQLite file.
//!
//! ## Features
//!
//! - **Tasks**: descriptions, priorities, due dates and tags
//! - **Natural Dates**: `today`, `tomorrow`, `+3d`, `friday`, ISO and regional formats
//! - **Views**: filtered lists, due today, upcoming week, search and statistics
//! - **Safe Storage**: WAL journaling and immediate write transactions, so
//!   concurrent invocations never corrupt or lose tasks
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todomaster::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;

#[doc(hidden)]
pub use tracing;
