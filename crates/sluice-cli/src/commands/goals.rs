//! Collection goals command.

use anyhow::{Context, Result};

use crate::Config;
use crate::commands::api_client;

pub async fn run(config: &Config) -> Result<()> {
    let api = api_client(config)?;
    let server = config.server_uuid()?;

    let report = api
        .resource_goals(&server)
        .await
        .context("failed to fetch collection goals")?;

    println!("{} ({})", report.server_name, report.server_id);
    if report.resources.is_empty() {
        println!("no goals");
        return Ok(());
    }

    for goal in &report.resources {
        let marker = if goal.is_active { "active" } else { "inactive" };
        println!(
            "- {} [{marker}] {}/{} ({})",
            goal.resource_type, goal.current_amount, goal.target_amount, goal.name
        );
    }

    Ok(())
}
