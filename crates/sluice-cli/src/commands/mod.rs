//! CLI subcommand implementations.

pub mod badge;
pub mod collect;
pub mod goals;
pub mod server;
pub mod watch;

use std::sync::Arc;

use anyhow::{Context, Result};

use sluice_api::{ApiClient, GameApi};

use crate::Config;

/// Builds the shared API client from configuration.
fn api_client(config: &Config) -> Result<Arc<dyn GameApi>> {
    let client = ApiClient::new(config.api_base_url.clone())
        .with_context(|| format!("invalid API base URL {:?}", config.api_base_url))?;
    Ok(Arc::new(client))
}
