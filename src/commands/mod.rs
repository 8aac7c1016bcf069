//! Command-line interface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a `cmd`
//! function that drives the [`TaskService`]. [`Cli::menu`] resolves the
//! database path, opens the store once and hands the service to the command.

pub mod add;
pub mod clear;
pub mod delete;
pub mod done;
pub mod edit;
pub mod list;
pub mod search;
pub mod show;
pub mod stats;
pub mod today;
pub mod upcoming;

use crate::db::tasks::Tasks;
use crate::libs::clock::Clock;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::TodoError;
use crate::libs::service::TaskService;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "List tasks")]
    List(list::ListArgs),
    #[command(about = "Mark a task as completed")]
    Done(done::DoneArgs),
    #[command(about = "Edit a task")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Remove all completed tasks")]
    Clear,
    #[command(about = "Show task details")]
    Show(show::ShowArgs),
    #[command(about = "Show overdue tasks and tasks due today")]
    Today,
    #[command(about = "Show tasks due in the next 7 days")]
    Upcoming,
    #[command(about = "Search tasks by description or tag")]
    Search(search::SearchArgs),
    #[command(about = "Show task statistics")]
    Stats,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Path to the task database file
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();

        let storage = DataStorage::new();
        let config = Config::read_from(&storage)?;
        let db_path = config.db_path(cli.db, &storage)?;
        let service = TaskService::new(Tasks::open_with_timeout(&db_path, config.busy_timeout())?);

        run_and_close(service, |service| match cli.command {
            Commands::Add(args) => add::cmd(service, args),
            Commands::List(args) => list::cmd(service, args),
            Commands::Done(args) => done::cmd(service, args),
            Commands::Edit(args) => edit::cmd(service, args),
            Commands::Delete(args) => delete::cmd(service, args),
            Commands::Clear => clear::cmd(service),
            Commands::Show(args) => show::cmd(service, args),
            Commands::Today => today::cmd(service),
            Commands::Upcoming => upcoming::cmd(service),
            Commands::Search(args) => search::cmd(service, args),
            Commands::Stats => stats::cmd(service),
        })
    }
}

/// Runs `command` and closes the service afterwards. When the command fails,
/// its error is returned and a close failure is only logged.
pub fn run_and_close<C, F>(mut service: TaskService<C>, command: F) -> Result<()>
where
    C: Clock,
    F: FnOnce(&mut TaskService<C>) -> Result<()>,
{
    let result = command(&mut service);
    let closed = service.close();

    match (result, closed) {
        (Err(e), Err(close_err)) => {
            tracing::debug!(error = %close_err, "closing the task database failed");
            Err(e)
        }
        (result, closed) => {
            closed?;
            result
        }
    }
}

/// Parses a task id given on the command line. Ids are positive integers.
pub fn parse_task_id(raw: &str) -> Result<i64, TodoError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(TodoError::validation("id", format!("'{}' is not a positive whole number", raw))),
    }
}
