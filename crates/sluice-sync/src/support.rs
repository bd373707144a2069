//! Scripted [`GameApi`] fake shared by the service tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use sluice_api::{ApiError, GameApi, TransientCause};
use sluice_core::{
    Badge, BadgeKind, CollectionResult, Goal, ProgressReport, ResourceType, ServerInfo, ServerUuid,
};

pub(crate) const SERVER: &str = "6f9619ff-8b86-4d01-b42d-00cf4fc964ff";

pub(crate) fn server_uuid() -> ServerUuid {
    ServerUuid::new(SERVER).unwrap()
}

/// Responses are consumed front-to-back per operation; a call with an
/// empty queue is a test bug and panics.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub badges: Mutex<VecDeque<Result<Badge, ApiError>>>,
    pub badge_calls: AtomicUsize,
    pub infos: Mutex<VecDeque<Result<ServerInfo, ApiError>>>,
    pub info_calls: AtomicUsize,
    /// Simulated latency for `server_info`, for shutdown-overlap tests.
    pub info_delay: Option<Duration>,
    pub reports: Mutex<VecDeque<Result<ProgressReport, ApiError>>>,
    pub report_calls: AtomicUsize,
    /// Simulated latency for `resource_goals`, for overlap tests.
    pub report_delay: Option<Duration>,
    pub collect_results: Mutex<VecDeque<Result<CollectionResult, ApiError>>>,
    /// Every `(resource_type, amount)` pair submitted, in order.
    pub collected: Mutex<Vec<(String, i64)>>,
}

#[async_trait]
impl GameApi for FakeApi {
    async fn player_badge(&self, _player: Uuid) -> Result<Badge, ApiError> {
        self.badge_calls.fetch_add(1, Ordering::SeqCst);
        self.badges
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected player_badge call")
    }

    async fn server_info(&self, _server: Uuid) -> Result<ServerInfo, ApiError> {
        self.info_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.info_delay {
            tokio::time::sleep(delay).await;
        }
        self.infos
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected server_info call")
    }

    async fn collect_resource(
        &self,
        _server: &ServerUuid,
        resource: &ResourceType,
        amount: i64,
    ) -> Result<CollectionResult, ApiError> {
        self.collected
            .lock()
            .unwrap()
            .push((resource.as_str().to_string(), amount));
        self.collect_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected collect_resource call")
    }

    async fn resource_goals(&self, _server: &ServerUuid) -> Result<ProgressReport, ApiError> {
        self.report_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.report_delay {
            tokio::time::sleep(delay).await;
        }
        self.reports
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected resource_goals call")
    }
}

pub(crate) fn badge(name: &str) -> Badge {
    Badge {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: String::new(),
        image_url: String::new(),
        badge_type: BadgeKind::Permanent,
        unicode_char: "E000".to_string(),
        created_at: chrono::Utc::now(),
    }
}

pub(crate) fn server_info(hash: Option<&str>) -> ServerInfo {
    ServerInfo {
        id: Uuid::parse_str(SERVER).unwrap(),
        name: "survival-1".to_string(),
        resource_pack_url: "https://cdn.example/pack.zip".to_string(),
        resource_pack_hash: hash.map(str::to_string),
    }
}

pub(crate) fn report(active: &[&str], inactive: &[&str]) -> ProgressReport {
    let goal = |resource_type: &&str, is_active: bool| Goal {
        resource_type: (*resource_type).to_string(),
        name: format!("{resource_type} goal"),
        current_amount: 0,
        target_amount: 1000,
        goal_id: format!("goal-{resource_type}"),
        is_active,
    };
    ProgressReport {
        server_id: SERVER.to_string(),
        server_name: "survival-1".to_string(),
        resources: active
            .iter()
            .map(|rt| goal(rt, true))
            .chain(inactive.iter().map(|rt| goal(rt, false)))
            .collect(),
    }
}

pub(crate) fn confirmed(total: i64) -> CollectionResult {
    CollectionResult {
        success: true,
        message: String::new(),
        current_amount: total,
    }
}

pub(crate) fn rejected(message: &str) -> CollectionResult {
    CollectionResult {
        success: false,
        message: message.to_string(),
        current_amount: 0,
    }
}

pub(crate) fn exhausted() -> ApiError {
    ApiError::RetryExhausted {
        attempts: 4,
        cause: TransientCause::Status(503),
    }
}
