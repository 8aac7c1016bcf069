//! Core library modules for todomaster.
//!
//! ## Features
//!
//! - **Domain**: task types, the date parser and the task service
//! - **Infrastructure**: configuration, data directory, clock, errors
//! - **User Interface**: messages, formatting and table views
//!
//! ## Usage
//!
//! ```rust
//! use todomaster::db::tasks::Tasks;
//! use todomaster::libs::service::{AddTask, TaskService};
//!
//! let mut service = TaskService::new(Tasks::open_in_memory()?);
//! let task = service.add(AddTask {
//!     description: "Water the plants".to_string(),
//!     due: Some("tomorrow".to_string()),
//!     ..Default::default()
//! })?;
//! assert!(!task.completed);
//! # Ok::<(), todomaster::libs::error::TodoError>(())
//! ```

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod dates;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod service;
pub mod task;
pub mod view;
