use super::parse_task_id;
use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(service: &mut TaskService, args: DeleteArgs) -> Result<()> {
    let id = parse_task_id(&args.id)?;
    let task = service.get(id)?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.description.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    service.delete(id)?;
    msg_success!(Message::TaskDeleted(id));
    Ok(())
}
