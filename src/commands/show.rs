use super::parse_task_id;
use crate::libs::service::TaskService;
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task ID
    id: String,
}

pub fn cmd(service: &mut TaskService, args: ShowArgs) -> Result<()> {
    let task = service.get(parse_task_id(&args.id)?)?;
    View::task_detail(&task, service.now());
    Ok(())
}
