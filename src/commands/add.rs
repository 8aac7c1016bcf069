use crate::libs::messages::Message;
use crate::libs::service::{AddTask, TaskService};
use crate::libs::view::View;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description
    #[arg(required = true, num_args = 1..)]
    description: Vec<String>,

    /// Priority: low, medium or high
    #[arg(short, long)]
    priority: Option<String>,

    /// Due date, e.g. tomorrow, +3d, friday, 2026-01-15
    #[arg(short, long)]
    due: Option<String>,

    /// Tags, repeatable or comma-separated
    #[arg(short, long = "tag")]
    tags: Vec<String>,
}

pub fn cmd(service: &mut TaskService, args: AddArgs) -> Result<()> {
    let task = service.add(AddTask {
        description: args.description.join(" "),
        priority: args.priority,
        due: args.due,
        tags: args.tags,
    })?;

    msg_success!(Message::TaskCreated(task.id));
    View::task_detail(&task, service.now());
    Ok(())
}
