//! Resource-pack watch command.

use std::sync::Arc;

use anyhow::{Context, Result};

use sluice_sync::PackWatcher;

use crate::Config;
use crate::commands::api_client;

pub async fn run(config: &Config) -> Result<()> {
    let api = api_client(config)?;
    let server = config.server_id()?;

    let watcher = Arc::new(PackWatcher::new(
        api,
        server,
        Arc::new(|| println!("resource pack fingerprint changed")),
    ));

    if let Some(url) = watcher.resource_pack_url().await {
        println!("pack url: {url}");
    }

    let handle = watcher.spawn(config.pack_check_interval());
    println!(
        "watching server {server} every {}s, press Ctrl-C to stop",
        config.pack_check_interval().as_secs()
    );

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl-C")?;
    // Stops scheduling new cycles and waits out any in-flight check.
    handle.stop().await;

    Ok(())
}
