use crate::libs::messages::Message;
use crate::libs::service::{TaskService, UPCOMING_DAYS};
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;

pub fn cmd(service: &mut TaskService) -> Result<()> {
    let tasks = service.upcoming()?;

    if tasks.is_empty() {
        msg_info!(Message::NoUpcomingTasks(UPCOMING_DAYS));
        return Ok(());
    }

    View::tasks(&tasks, Message::UpcomingTasksHeader(UPCOMING_DAYS), service.now());
    Ok(())
}
