//! HTTP transport for the Sluice companion API.
//!
//! [`ApiClient`] is the only layer in the workspace that performs network
//! I/O and the only one that raises typed errors. Everything above it
//! (caching, polling, aggregation in `sluice-sync`) absorbs [`ApiError`]
//! into "no data, try again next cycle" semantics.
//!
//! Outcome classification and the retry policy are described on
//! [`ApiError`] and [`MAX_RETRIES`].

mod client;
mod error;
mod retry;

pub use client::{ApiClient, GameApi};
pub use error::{ApiError, TransientCause};
pub use retry::MAX_RETRIES;
