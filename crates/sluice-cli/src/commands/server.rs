//! Server descriptor command.

use anyhow::{Context, Result};

use crate::Config;
use crate::commands::api_client;

pub async fn run(config: &Config) -> Result<()> {
    let api = api_client(config)?;
    let server = config.server_id()?;

    let info = api
        .server_info(server)
        .await
        .with_context(|| format!("failed to fetch server {server}"))?;

    println!("{} ({})", info.name, info.id);
    println!("pack url:  {}", info.resource_pack_url);
    println!("pack hash: {}", info.pack_fingerprint().unwrap_or("<none>"));

    Ok(())
}
