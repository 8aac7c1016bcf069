use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::{msg_info, msg_success};
use anyhow::Result;

pub fn cmd(service: &mut TaskService) -> Result<()> {
    match service.clear()? {
        0 => msg_info!(Message::NoCompletedTasksToClear),
        count => msg_success!(Message::TasksCleared(count)),
    }
    Ok(())
}
