use crate::libs::service::TaskService;
use crate::libs::view::View;
use anyhow::Result;

pub fn cmd(service: &mut TaskService) -> Result<()> {
    View::stats(&service.stats()?);
    Ok(())
}
