//! Periodically refreshed set of accepted resource categories.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use tokio::time::Instant;

use sluice_api::GameApi;
use sluice_core::{ResourceType, ServerUuid};

/// How long a refreshed set stays fresh.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

struct State {
    types: HashSet<ResourceType>,
    refreshed_at: Option<Instant>,
}

/// The set of categories currently accepted for submission, derived from
/// the server's active goals.
///
/// Refreshes are best-effort: a failed fetch keeps the previous set
/// (stale-but-available beats empty), and at most one refresh is in
/// flight at a time — concurrent callers skip instead of stacking
/// another fetch.
pub struct EligibilitySet {
    api: Arc<dyn GameApi>,
    server: ServerUuid,
    refresh_interval: Duration,
    state: RwLock<State>,
    refresh_gate: tokio::sync::Mutex<()>,
}

impl EligibilitySet {
    pub fn new(api: Arc<dyn GameApi>, server: ServerUuid) -> Self {
        Self::with_refresh_interval(api, server, DEFAULT_REFRESH_INTERVAL)
    }

    pub fn with_refresh_interval(
        api: Arc<dyn GameApi>,
        server: ServerUuid,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            api,
            server,
            refresh_interval,
            state: RwLock::new(State {
                types: HashSet::new(),
                refreshed_at: None,
            }),
            refresh_gate: tokio::sync::Mutex::new(()),
        }
    }

    /// Snapshot of the currently accepted categories.
    pub fn current(&self) -> HashSet<ResourceType> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .types
            .clone()
    }

    /// Whether `resource` is currently accepted.
    pub fn contains(&self, resource: &ResourceType) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .types
            .contains(resource)
    }

    fn is_fresh(&self) -> bool {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        !state.types.is_empty()
            && state
                .refreshed_at
                .is_some_and(|at| at.elapsed() < self.refresh_interval)
    }

    /// Refreshes the set from the goals endpoint unless it is still fresh.
    ///
    /// An empty set never counts as fresh, so a server that had no active
    /// goals is re-queried on the next opportunity rather than once a
    /// minute at most.
    pub async fn refresh_if_stale(&self) {
        if self.is_fresh() {
            return;
        }

        // Single-flight: a refresh started by another caller is still
        // running, let it finish instead of stacking a second fetch.
        let Ok(_gate) = self.refresh_gate.try_lock() else {
            tracing::debug!("eligibility refresh already in flight");
            return;
        };
        if self.is_fresh() {
            return;
        }

        match self.api.resource_goals(&self.server).await {
            Ok(report) => {
                let types = report.active_types();
                tracing::debug!(categories = types.len(), "eligibility set refreshed");
                let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
                state.types = types;
                state.refreshed_at = Some(Instant::now());
            }
            Err(err) => {
                tracing::warn!(error = %err, "goal fetch failed, keeping previous eligibility set");
            }
        }
    }
}
