//! Cache-aside badge lookups.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use uuid::Uuid;

use sluice_api::{ApiError, GameApi};
use sluice_core::Badge;

use crate::ttl::TtlCache;

/// Capability hook for presentation layers (tab lists, name tags).
///
/// Bound once at startup; hosts without a presentation layer keep the
/// [`NoopBadgeListener`] default instead of being probed for at runtime.
pub trait BadgeListener: Send + Sync {
    /// Called after a badge was fetched from the API (not on cache hits).
    fn badge_loaded(&self, player: Uuid, badge: &Badge);
}

/// Listener that does nothing.
pub struct NoopBadgeListener;

impl BadgeListener for NoopBadgeListener {
    fn badge_loaded(&self, _player: Uuid, _badge: &Badge) {}
}

/// Read-through badge store: cache first, API on miss.
///
/// Lookups are best-effort; every transport error degrades to "no badge"
/// so a missing badge never blocks gameplay-level flows. Concurrent misses
/// for the same player may each reach the API; the cache converges to the
/// last write.
pub struct BadgeDirectory {
    api: Arc<dyn GameApi>,
    cache: TtlCache<Uuid, Badge>,
    listener: Arc<dyn BadgeListener>,
}

impl BadgeDirectory {
    /// Creates a directory whose cached badges live for `ttl`.
    pub fn new(api: Arc<dyn GameApi>, ttl: Duration) -> Self {
        Self {
            api,
            cache: TtlCache::new(ttl),
            listener: Arc::new(NoopBadgeListener),
        }
    }

    /// Replaces the presentation hook.
    #[must_use]
    pub fn with_listener(mut self, listener: Arc<dyn BadgeListener>) -> Self {
        self.listener = listener;
        self
    }

    /// Returns the player's badge from cache, or fetches and caches it.
    ///
    /// `None` means the player has no badge right now, or the lookup
    /// failed; either way the next call asks the API again ("not found"
    /// is never negative-cached).
    pub async fn get_or_fetch(&self, player: Uuid) -> Option<Badge> {
        if let Some(badge) = self.cache.get(&player) {
            return Some(badge);
        }

        match self.api.player_badge(player).await {
            Ok(badge) => {
                self.cache.insert(player, badge.clone());
                self.listener.badge_loaded(player, &badge);
                tracing::debug!(%player, badge = %badge.name, "badge fetched and cached");
                Some(badge)
            }
            Err(ApiError::NotFound) => {
                tracing::debug!(%player, "player has no badge");
                None
            }
            Err(err) => {
                tracing::warn!(%player, error = %err, "badge lookup failed");
                None
            }
        }
    }

    /// Drops the cached badge for one player.
    pub fn invalidate(&self, player: Uuid) {
        self.cache.invalidate(&player);
    }

    /// Drops every cached badge.
    pub fn clear(&self) {
        self.cache.clear();
    }

    /// Spawns the background sweep for the underlying cache.
    pub fn spawn_sweeper(&self) -> JoinHandle<()> {
        self.cache.spawn_sweeper()
    }
}
