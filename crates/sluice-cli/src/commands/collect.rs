//! Resource collection command.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, ensure};

use sluice_core::ResourceType;
use sluice_sync::{EligibilitySet, ResourceCollector};

use crate::Config;
use crate::commands::api_client;

pub async fn run(config: &Config, mapping_path: &Path, raw_items: &[String]) -> Result<()> {
    let mapping = load_mapping(mapping_path)?;
    let items = raw_items
        .iter()
        .map(|raw| parse_item(raw))
        .collect::<Result<Vec<_>>>()?;

    let api = api_client(config)?;
    let server = config.server_uuid()?;

    let eligibility = Arc::new(EligibilitySet::new(Arc::clone(&api), server.clone()));
    // One-shot invocation: prime the set up front so the first cycle
    // already sees the active goals.
    eligibility.refresh_if_stale().await;

    let collector = ResourceCollector::new(api, server, eligibility);
    let classify = |raw: &str| {
        mapping
            .get(raw)
            .and_then(|category| ResourceType::new(category.as_str()).ok())
    };

    let confirmed = collector.submit(&items, classify).await;

    if confirmed.is_empty() {
        println!("nothing confirmed");
        return Ok(());
    }
    println!("confirmed (remove these amounts from the source):");
    for (category, amount) in &confirmed {
        println!("- {category}: {amount}");
    }

    Ok(())
}

/// Reads the raw-kind → category mapping from a JSON object file.
fn load_mapping(path: &Path) -> Result<HashMap<String, String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read mapping file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid mapping file {}", path.display()))
}

/// Parses a `kind=count` argument.
fn parse_item(raw: &str) -> Result<(String, u32)> {
    let (kind, count) = raw
        .split_once('=')
        .with_context(|| format!("expected kind=count, got {raw:?}"))?;
    ensure!(!kind.is_empty(), "empty item kind in {raw:?}");
    let count = count
        .parse::<u32>()
        .with_context(|| format!("invalid count in {raw:?}"))?;
    Ok((kind.to_string(), count))
}
