//! Core domain types and logic for the Sluice companion-API client.
//!
//! This crate contains the pure, I/O-free parts of the system:
//! - Wire types: badges, server descriptors, goals, collection results
//! - Validated identifiers (`ServerUuid`, `ResourceType`)
//! - Tallying: grouping raw item counts into eligible submission amounts

pub mod badge;
pub mod goals;
pub mod server;
mod tally;
pub mod types;

pub use badge::{Badge, BadgeKind};
pub use goals::{CollectRequest, CollectionResult, Goal, ProgressReport};
pub use server::ServerInfo;
pub use tally::tally_eligible;
pub use types::{ResourceType, ServerUuid, ValidationError};
