//! Resource-collection goal and submission wire types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{ResourceType, ServerUuid};

/// A single collection goal as reported by the progress endpoint.
///
/// `resource_type` stays a raw string on the wire; a malformed category on
/// one goal must not fail the whole report. Conversion to a validated
/// [`ResourceType`] happens when deriving the eligibility set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub resource_type: String,
    pub name: String,
    pub current_amount: i64,
    pub target_amount: i64,
    pub goal_id: String,
    pub is_active: bool,
}

/// Progress report for a server: its goals plus identifying fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub server_id: String,
    pub server_name: String,
    #[serde(default)]
    pub resources: Vec<Goal>,
}

impl ProgressReport {
    /// Derives the set of categories currently accepted for submission:
    /// every goal with `is_active` and a well-formed category name.
    pub fn active_types(&self) -> HashSet<ResourceType> {
        self.resources
            .iter()
            .filter(|goal| goal.is_active)
            .filter_map(|goal| ResourceType::new(goal.resource_type.as_str()).ok())
            .collect()
    }
}

/// POST body for a resource increment submission.
#[derive(Debug, Clone, Serialize)]
pub struct CollectRequest {
    pub server_uuid: ServerUuid,
    pub resource_type: ResourceType,
    pub amount: i64,
}

/// Confirmation returned by the collect endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionResult {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    /// Total confirmed amount for the category after this submission.
    pub current_amount: i64,
}
