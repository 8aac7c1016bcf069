use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::libs::task::Task;
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;

pub fn cmd(service: &mut TaskService) -> Result<()> {
    let now = service.now();
    let tasks = service.today()?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksDueToday);
        return Ok(());
    }

    let (overdue, due_today): (Vec<Task>, Vec<Task>) = tasks.into_iter().partition(|task| task.is_overdue(now));
    if !overdue.is_empty() {
        View::tasks(&overdue, Message::OverdueTasksHeader, now);
    }
    if !due_today.is_empty() {
        View::tasks(&due_today, Message::DueTodayHeader, now);
    }
    Ok(())
}
