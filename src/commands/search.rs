use crate::libs::messages::Message;
use crate::libs::service::TaskService;
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for in descriptions and tags
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,
}

pub fn cmd(service: &mut TaskService, args: SearchArgs) -> Result<()> {
    let query = args.query.join(" ");
    let tasks = service.search(&query)?;

    if tasks.is_empty() {
        msg_info!(Message::NoSearchResults(query));
        return Ok(());
    }

    View::tasks(&tasks, Message::SearchResultsHeader(query), service.now());
    Ok(())
}
