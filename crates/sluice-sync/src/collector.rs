//! Resource aggregation and submission.

use std::collections::BTreeMap;
use std::sync::Arc;

use sluice_api::GameApi;
use sluice_core::{ResourceType, ServerUuid, tally_eligible};

use crate::eligibility::EligibilitySet;

/// Groups raw item counts into eligible categories and submits one
/// increment per category.
///
/// Submissions are deliberately sequential: each category's result is
/// awaited before the next is sent, so the confirmed amounts are
/// deterministic. Run [`submit`](Self::submit) on a worker context, never
/// on a latency-sensitive (request-serving or tick) path.
pub struct ResourceCollector {
    api: Arc<dyn GameApi>,
    server: ServerUuid,
    eligibility: Arc<EligibilitySet>,
}

impl ResourceCollector {
    pub fn new(api: Arc<dyn GameApi>, server: ServerUuid, eligibility: Arc<EligibilitySet>) -> Self {
        Self {
            api,
            server,
            eligibility,
        }
    }

    /// Classifies `items`, submits per-category increments, and returns
    /// the confirmed category→amount map.
    ///
    /// Only categories whose submission reported success appear in the
    /// result; failed or rejected submissions are logged and skipped so
    /// one bad category never blocks the others. The caller must remove
    /// from its item source exactly the confirmed amounts and leave
    /// everything else (ineligible, unclassifiable, unconfirmed) in place
    /// for a later retry.
    pub async fn submit<F>(
        &self,
        items: &[(String, u32)],
        classify: F,
    ) -> BTreeMap<ResourceType, u32>
    where
        F: Fn(&str) -> Option<ResourceType>,
    {
        // Opportunistic refresh; this cycle proceeds with whatever set is
        // current rather than waiting on the network.
        let eligibility = Arc::clone(&self.eligibility);
        tokio::spawn(async move { eligibility.refresh_if_stale().await });

        let eligible = self.eligibility.current();
        let planned = tally_eligible(items, classify, &eligible);

        let mut confirmed = BTreeMap::new();
        for (category, amount) in planned {
            match self
                .api
                .collect_resource(&self.server, &category, i64::from(amount))
                .await
            {
                Ok(result) if result.success => {
                    tracing::info!(
                        category = %category,
                        amount,
                        total = result.current_amount,
                        "submission confirmed"
                    );
                    confirmed.insert(category, amount);
                }
                Ok(result) => {
                    tracing::warn!(
                        category = %category,
                        amount,
                        message = %result.message,
                        "submission rejected"
                    );
                }
                Err(err) => {
                    tracing::warn!(category = %category, amount, error = %err, "submission failed");
                }
            }
        }
        confirmed
    }

    /// Like [`submit`](Self::submit), invoking `apply` with the confirmed
    /// map (the host's inventory-mutation hook) before returning it.
    pub async fn submit_and_apply<F, A>(
        &self,
        items: &[(String, u32)],
        classify: F,
        apply: A,
    ) -> BTreeMap<ResourceType, u32>
    where
        F: Fn(&str) -> Option<ResourceType>,
        A: FnOnce(&BTreeMap<ResourceType, u32>),
    {
        let confirmed = self.submit(items, classify).await;
        apply(&confirmed);
        confirmed
    }
}
