//! Badge lookup command.

use anyhow::Result;
use uuid::Uuid;

use sluice_sync::BadgeDirectory;

use crate::Config;
use crate::commands::api_client;

pub async fn run(config: &Config, player: Uuid) -> Result<()> {
    let directory = BadgeDirectory::new(api_client(config)?, config.cache_ttl());

    match directory.get_or_fetch(player).await {
        Some(badge) => {
            println!("{} [{}]", badge.name, badge.badge_type.as_str());
            if !badge.description.is_empty() {
                println!("{}", badge.description);
            }
            let glyph = badge.glyph();
            if !glyph.is_empty() {
                println!("glyph: {glyph} (U+{})", badge.unicode_char);
            }
            println!("created: {}", badge.created_at);
        }
        None => println!("no badge for {player}"),
    }

    Ok(())
}
