use super::parse_task_id;
use crate::libs::messages::Message;
use crate::libs::service::{Completion, TaskService};
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task ID
    id: String,
}

pub fn cmd(service: &mut TaskService, args: DoneArgs) -> Result<()> {
    let id = parse_task_id(&args.id)?;

    match service.complete(id)? {
        Completion::Completed(task) => msg_success!(Message::TaskCompleted(task.id)),
        Completion::AlreadyCompleted(task) => msg_warning!(Message::TaskAlreadyCompleted(task.id)),
    }
    Ok(())
}
