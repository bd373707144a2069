//! Caching, polling, and aggregation services over the Sluice API.
//!
//! Every service here sits above [`sluice_api::GameApi`] and absorbs its
//! typed errors into "no data, try again next cycle" behavior:
//! - [`TtlCache`]: key/value store with per-entry expiry and a background
//!   sweeper
//! - [`BadgeDirectory`]: cache-aside badge lookups
//! - [`PackWatcher`]: fixed-interval resource-pack fingerprint polling
//! - [`EligibilitySet`]: periodically refreshed set of accepted categories
//! - [`ResourceCollector`]: classifies, filters, and submits item counts
//!
//! Services are explicit objects constructed once at startup and shared by
//! `Arc`; background loops are plain tokio tasks. The watcher loop shuts
//! down through [`WatcherHandle`], which only observes the signal between
//! cycles so in-flight requests run to completion; cache sweepers have no
//! await point inside a sweep, so aborting their `JoinHandle` never cuts
//! one short.

mod badge;
mod collector;
mod eligibility;
mod pack;
mod ttl;

pub use badge::{BadgeDirectory, BadgeListener, NoopBadgeListener};
pub use collector::ResourceCollector;
pub use eligibility::EligibilitySet;
pub use pack::{PackWatcher, WatcherHandle};
pub use ttl::TtlCache;

#[cfg(test)]
pub(crate) mod support;
