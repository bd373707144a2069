//! Game-server descriptor wire type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Descriptor for a game server, including its resource-pack state.
///
/// The hash is an opaque fingerprint of the pack content; watchers compare
/// successive values to detect that the pack changed without downloading it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub resource_pack_url: String,
    #[serde(default)]
    pub resource_pack_hash: Option<String>,
}

impl ServerInfo {
    /// Returns the pack fingerprint, treating an empty string as absent.
    pub fn pack_fingerprint(&self) -> Option<&str> {
        self.resource_pack_hash
            .as_deref()
            .filter(|hash| !hash.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_descriptor() {
        let info: ServerInfo = serde_json::from_str(
            r#"{
                "id": "6f9619ff-8b86-4d01-b42d-00cf4fc964ff",
                "name": "survival-1",
                "resource_pack_url": "https://cdn.example/pack.zip",
                "resource_pack_hash": "abc123"
            }"#,
        )
        .unwrap();
        assert_eq!(info.name, "survival-1");
        assert_eq!(info.pack_fingerprint(), Some("abc123"));
    }

    #[test]
    fn missing_hash_decodes_as_none() {
        let info: ServerInfo = serde_json::from_str(
            r#"{
                "id": "6f9619ff-8b86-4d01-b42d-00cf4fc964ff",
                "name": "survival-1"
            }"#,
        )
        .unwrap();
        assert_eq!(info.pack_fingerprint(), None);
    }

    #[test]
    fn empty_hash_is_treated_as_absent() {
        let info: ServerInfo = serde_json::from_str(
            r#"{
                "id": "6f9619ff-8b86-4d01-b42d-00cf4fc964ff",
                "name": "survival-1",
                "resource_pack_hash": ""
            }"#,
        )
        .unwrap();
        assert_eq!(info.pack_fingerprint(), None);
    }
}
