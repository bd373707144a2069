//! The companion-API HTTP client.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use sluice_core::{
    Badge, CollectRequest, CollectionResult, ProgressReport, ResourceType, ServerInfo, ServerUuid,
    ValidationError,
};

use crate::error::{ApiError, TransientCause};
use crate::retry::{self, AttemptError};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The four companion-API operations.
///
/// Object-safe so services take `Arc<dyn GameApi>` and tests substitute
/// scripted fakes for the real client.
#[async_trait]
pub trait GameApi: Send + Sync {
    /// Fetches the badge a player currently displays.
    ///
    /// A player without a badge is [`ApiError::NotFound`].
    async fn player_badge(&self, player: Uuid) -> Result<Badge, ApiError>;

    /// Fetches the descriptor for a game server.
    async fn server_info(&self, server: Uuid) -> Result<ServerInfo, ApiError>;

    /// Submits a resource increment for one category and returns the
    /// confirmed total.
    async fn collect_resource(
        &self,
        server: &ServerUuid,
        resource: &ResourceType,
        amount: i64,
    ) -> Result<CollectionResult, ApiError>;

    /// Fetches the goal list and progress for a server.
    async fn resource_goals(&self, server: &ServerUuid) -> Result<ProgressReport, ApiError>;
}

/// HTTP client for the companion API.
///
/// # Thread Safety
///
/// The client is safe to clone and share across tasks. Each clone shares
/// the underlying HTTP connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a client for the given base URL (trailing `/` is trimmed).
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or the HTTP client fails
    /// to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::Validation(ValidationError::Empty {
                field: "base URL",
            }));
        }

        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self { http, base_url })
    }

    /// The configured base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        retry::with_backoff(|| async move {
            let response = self.http.get(url).send().await;
            decode_attempt::<T>(response).await
        })
        .await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        retry::with_backoff(|| async move {
            let response = self.http.post(url).json(body).send().await;
            decode_attempt::<T>(response).await
        })
        .await
    }
}

#[async_trait]
impl GameApi for ApiClient {
    async fn player_badge(&self, player: Uuid) -> Result<Badge, ApiError> {
        let url = self.url(&format!("/badges/minecraft/{player}"));
        self.get_json(&url).await
    }

    async fn server_info(&self, server: Uuid) -> Result<ServerInfo, ApiError> {
        let url = self.url(&format!("/game-servers/{server}"));
        self.get_json(&url).await
    }

    async fn collect_resource(
        &self,
        server: &ServerUuid,
        resource: &ResourceType,
        amount: i64,
    ) -> Result<CollectionResult, ApiError> {
        // Rejected locally, with zero network cost.
        if amount < 0 {
            return Err(ApiError::Validation(ValidationError::NegativeAmount {
                amount,
            }));
        }

        let url = self.url("/resource-collection/collect");
        let request = CollectRequest {
            server_uuid: server.clone(),
            resource_type: resource.clone(),
            amount,
        };
        self.post_json(&url, &request).await
    }

    async fn resource_goals(&self, server: &ServerUuid) -> Result<ProgressReport, ApiError> {
        let url = self.url(&format!("/resource-collection/servers/{server}/progress"));
        self.get_json(&url).await
    }
}

/// How a response status terminates or continues the retry sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusClass {
    Success,
    NotFound,
    InvalidRequest,
    Transient,
}

fn classify_status(status: StatusCode) -> StatusClass {
    if status.is_success() {
        return StatusClass::Success;
    }
    match status.as_u16() {
        400 => StatusClass::InvalidRequest,
        404 => StatusClass::NotFound,
        _ => StatusClass::Transient,
    }
}

/// Classifies a single attempt: network failures are transient, statuses
/// per [`classify_status`], and a success payload that fails to decode is
/// terminal.
async fn decode_attempt<T: DeserializeOwned>(
    result: Result<reqwest::Response, reqwest::Error>,
) -> Result<T, AttemptError> {
    let response = match result {
        Ok(response) => response,
        Err(err) => {
            return Err(AttemptError::Transient(TransientCause::Network(
                err.to_string(),
            )));
        }
    };

    let status = response.status();
    match classify_status(status) {
        StatusClass::Success => {
            let body = response.text().await.map_err(|err| {
                AttemptError::Transient(TransientCause::Network(err.to_string()))
            })?;
            serde_json::from_str(&body)
                .map_err(|err| AttemptError::Fatal(ApiError::Decode(err.to_string())))
        }
        StatusClass::InvalidRequest => {
            let body = response.text().await.unwrap_or_default();
            Err(AttemptError::Fatal(ApiError::InvalidRequest { body }))
        }
        StatusClass::NotFound => Err(AttemptError::Fatal(ApiError::NotFound)),
        StatusClass::Transient => Err(AttemptError::Transient(TransientCause::Status(
            status.as_u16(),
        ))),
    }
}
