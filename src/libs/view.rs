use super::formatter::{format_age, format_due, format_timestamp, truncate};
use super::messages::Message;
use super::service::TaskStats;
use super::task::Task;
use crate::{msg_info, msg_print};
use chrono::NaiveDateTime;
use prettytable::{format, row, Table};

const DESCRIPTION_WIDTH: usize = 40;

pub struct View {}

impl View {
    /// Prints a titled task table followed by a pending/overdue summary.
    pub fn tasks(tasks: &[Task], title: Message, now: NaiveDateTime) {
        if tasks.is_empty() {
            msg_info!(Message::NoTasksFound);
            return;
        }

        let pending = tasks.iter().filter(|t| !t.completed).count();
        let overdue = tasks.iter().filter(|t| t.is_overdue(now)).count();
        msg_print!(format!("{} • {}", title, Message::ListSummary(pending, overdue)), true);
        Self::task_table(tasks, now).printstd();
    }

    pub fn task_table(tasks: &[Task], now: NaiveDateTime) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(row!["ID", "PRIORITY", "DESCRIPTION", "DUE", "TAGS", "STATUS"]);
        for task in tasks {
            let mut due = format_due(task.due_date, now);
            if task.is_overdue(now) {
                due.push_str(" ⚠️");
            }
            let status = if task.completed { "done" } else { "pending" };
            table.add_row(row![
                task.id,
                task.priority.as_str().to_uppercase(),
                truncate(&task.description, DESCRIPTION_WIDTH),
                due,
                task.tags.join(", "),
                status
            ]);
        }
        table
    }

    /// Prints every field of a single task.
    pub fn task_detail(task: &Task, now: NaiveDateTime) {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);

        table.add_row(row!["ID", task.id]);
        table.add_row(row!["Description", task.description]);
        table.add_row(row!["Priority", task.priority.as_str().to_uppercase()]);
        if let Some(due) = task.due_date {
            let mut due_text = format!("{} ({})", format_due(Some(due), now), format_timestamp(due));
            if task.is_overdue(now) {
                due_text.push_str(" ⚠️");
            }
            table.add_row(row!["Due", due_text]);
        }
        if !task.tags.is_empty() {
            table.add_row(row!["Tags", task.tags.join(", ")]);
        }
        table.add_row(row![
            "Created",
            format!("{} ({} ago)", format_timestamp(task.created_at), format_age(task.created_at, now))
        ]);
        table.add_row(row!["Updated", format_timestamp(task.updated_at)]);
        match task.completed_at {
            Some(done) => table.add_row(row!["Completed", format_timestamp(done)]),
            None => table.add_row(row!["Status", "pending"]),
        };

        table.printstd();
    }

    pub fn stats(stats: &TaskStats) {
        msg_print!(Message::StatsHeader, true);

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.add_row(row!["Total Tasks", stats.total]);
        table.add_row(row!["Pending", stats.pending]);
        table.add_row(row!["Completed", stats.completed]);
        table.add_row(row!["Overdue", stats.overdue]);
        table.add_row(row!["Due Today", stats.due_today]);
        for (priority, count) in &stats.by_priority {
            table.add_row(row![format!("Priority {}", priority), count]);
        }

        table.printstd();
    }
}
