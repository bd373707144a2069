//! Validated identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Validation errors for core types.
///
/// These are raised locally, before any network traffic happens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The server UUID was not in canonical 36-character form.
    #[error("server UUID must be 36 characters in canonical form, got {value:?}")]
    MalformedServerUuid { value: String },

    /// A submitted amount was negative.
    #[error("amount must be >= 0, got {amount}")]
    NegativeAmount { amount: i64 },
}

/// A server identifier in canonical 36-character UUID form.
///
/// The collection API addresses servers by the textual UUID, so the value
/// is kept as the validated string rather than a parsed [`Uuid`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServerUuid(String);

impl ServerUuid {
    /// Creates a server UUID after validating the canonical form.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::Empty {
                field: "server UUID",
            });
        }
        if id.len() != 36 || Uuid::parse_str(&id).is_err() {
            return Err(ValidationError::MalformedServerUuid { value: id });
        }
        Ok(Self(id))
    }

    /// Returns the UUID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ServerUuid {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ServerUuid> for String {
    fn from(id: ServerUuid) -> Self {
        id.0
    }
}

impl From<Uuid> for ServerUuid {
    fn from(id: Uuid) -> Self {
        // Hyphenated rendering is always 36 characters.
        Self(id.to_string())
    }
}

impl fmt::Display for ServerUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ServerUuid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A resource category identifier (e.g. "wood", "stone").
///
/// Categories come from the goals endpoint and from host-side item
/// classification; they must be non-empty. Ordered so submission maps
/// iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceType(String);

impl ResourceType {
    /// Creates a resource type after validation.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::Empty {
                field: "resource type",
            });
        }
        Ok(Self(name))
    }

    /// Returns the category name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ResourceType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResourceType> for String {
    fn from(rt: ResourceType) -> Self {
        rt.0
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ResourceType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
