use crate::libs::messages::Message;
use crate::libs::service::{ListOptions, TaskService};
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Include completed tasks
    #[arg(short, long, conflicts_with = "pending")]
    all: bool,

    /// Only pending tasks (the default)
    #[arg(long)]
    pending: bool,

    /// Only overdue tasks
    #[arg(long)]
    overdue: bool,

    /// Only tasks with this priority
    #[arg(short, long)]
    priority: Option<String>,

    /// Only tasks with this tag
    #[arg(short, long)]
    tag: Option<String>,
}

pub fn cmd(service: &mut TaskService, args: ListArgs) -> Result<()> {
    let options = ListOptions {
        all: args.all,
        pending: args.pending,
        overdue: args.overdue,
        priority: args.priority,
        tag: args.tag,
    };
    let tasks = service.list(&options)?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    let title = if options.overdue {
        Message::OverdueTasksHeader
    } else if options.all {
        Message::AllTasksHeader
    } else if options.pending {
        Message::PendingTasksHeader
    } else {
        Message::TasksHeader
    };
    View::tasks(&tasks, title, service.now());
    Ok(())
}
