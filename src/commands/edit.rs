use super::parse_task_id;
use crate::libs::messages::Message;
use crate::libs::service::{EditTask, TaskService};
use crate::libs::view::View;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    id: String,

    /// New description
    #[arg(long)]
    description: Option<String>,

    /// New priority: low, medium or high
    #[arg(short, long)]
    priority: Option<String>,

    /// New due date; an empty value removes it
    #[arg(long)]
    due: Option<String>,

    /// Tags to add, repeatable or comma-separated
    #[arg(short, long = "tag")]
    tags: Vec<String>,

    /// Tags to remove
    #[arg(long)]
    untag: Vec<String>,

    /// Mark a completed task as pending again
    #[arg(long)]
    reopen: bool,
}

pub fn cmd(service: &mut TaskService, args: EditArgs) -> Result<()> {
    let id = parse_task_id(&args.id)?;

    let task = service.edit(
        id,
        EditTask {
            description: args.description,
            priority: args.priority,
            due: args.due,
            add_tags: args.tags,
            remove_tags: args.untag,
            reopen: args.reopen,
        },
    )?;

    msg_success!(Message::TaskUpdated(task.id));
    View::task_detail(&task, service.now());
    Ok(())
}
