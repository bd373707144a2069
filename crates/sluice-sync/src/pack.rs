//! Resource-pack change detection.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use uuid::Uuid;

use sluice_api::GameApi;

/// Bounds for the configurable check interval.
pub const MIN_CHECK_INTERVAL: Duration = Duration::from_secs(60);
pub const MAX_CHECK_INTERVAL: Duration = Duration::from_secs(3600);

/// Watches a server's resource-pack fingerprint and fires a callback when
/// it changes.
///
/// The callback carries no payload; interested callers re-pull whatever
/// they need (usually [`resource_pack_url`](Self::resource_pack_url))
/// once notified. The first successfully observed fingerprint counts as a
/// change, so a freshly started watcher always fires once.
pub struct PackWatcher {
    api: Arc<dyn GameApi>,
    server: Uuid,
    last_fingerprint: Mutex<Option<String>>,
    on_change: Arc<dyn Fn() + Send + Sync>,
}

impl PackWatcher {
    pub fn new(api: Arc<dyn GameApi>, server: Uuid, on_change: Arc<dyn Fn() + Send + Sync>) -> Self {
        Self {
            api,
            server,
            last_fingerprint: Mutex::new(None),
            on_change,
        }
    }

    /// Runs one check cycle; also usable on demand between scheduled runs.
    ///
    /// A failed fetch or an absent/empty fingerprint logs and leaves the
    /// stored state untouched, so the next cycle compares against the last
    /// good observation.
    pub async fn check_once(&self) {
        let info = match self.api.server_info(self.server).await {
            Ok(info) => info,
            Err(err) => {
                tracing::warn!(server = %self.server, error = %err, "server info fetch failed, skipping cycle");
                return;
            }
        };

        let Some(current) = info.pack_fingerprint() else {
            tracing::debug!(server = %self.server, "server reports no pack fingerprint");
            return;
        };

        let changed = {
            let mut last = self
                .last_fingerprint
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            match last.as_deref() {
                Some(previous) if previous == current => false,
                Some(_) => {
                    tracing::info!(fingerprint = current, "pack fingerprint changed");
                    *last = Some(current.to_string());
                    true
                }
                None => {
                    tracing::info!(fingerprint = current, "initial pack fingerprint observed");
                    *last = Some(current.to_string());
                    true
                }
            }
        };

        // Fired outside the lock; the callback may call back into us.
        if changed {
            (self.on_change)();
        }
    }

    /// Fetches the current resource-pack URL, if the server has one.
    pub async fn resource_pack_url(&self) -> Option<String> {
        self.api
            .server_info(self.server)
            .await
            .ok()
            .map(|info| info.resource_pack_url)
            .filter(|url| !url.is_empty())
    }

    /// Spawns the fixed-delay polling loop, checking immediately and then
    /// once per `interval` (clamped to 60s..=3600s).
    ///
    /// Errors never stop future cycles. Shutdown goes through the returned
    /// [`WatcherHandle`]: the signal is only observed between cycles, so an
    /// in-flight check (including any scheduled retries inside it) always
    /// runs to completion or exhaustion.
    pub fn spawn(self: &Arc<Self>, interval: Duration) -> WatcherHandle {
        let watcher = Arc::clone(self);
        let (shutdown, mut signal) = watch::channel(false);
        let period = interval.clamp(MIN_CHECK_INTERVAL, MAX_CHECK_INTERVAL);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = signal.changed() => break,
                }
                watcher.check_once().await;
            }
        });
        WatcherHandle { shutdown, task }
    }
}

/// Shutdown handle for a spawned [`PackWatcher`] loop.
///
/// Dropping the handle has the same effect as [`stop`](Self::stop) except
/// that nothing waits for the loop to wind down.
pub struct WatcherHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl WatcherHandle {
    /// Signals shutdown and waits for the loop to finish.
    ///
    /// No new cycles are scheduled after the signal; a check that is
    /// already running finishes first.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}
