//! Exponential backoff for transient failures.

use std::time::Duration;

use crate::error::{ApiError, TransientCause};

/// Additional attempts after the initial one.
pub const MAX_RETRIES: u32 = 3;

/// Outcome of a single classified attempt.
#[derive(Debug)]
pub(crate) enum AttemptError {
    /// Terminal; returned to the caller immediately, even mid-sequence.
    Fatal(ApiError),
    /// Worth another attempt after backoff.
    Transient(TransientCause),
}

/// Runs `op`, retrying transient failures up to [`MAX_RETRIES`] more times
/// with delays of 1s, 2s, 4s on the tokio timer.
///
/// Classification is re-evaluated on every attempt: an attempt that comes
/// back fatal (400/404/decode) terminates the sequence immediately. After
/// the budget is spent the last transient cause is reported via
/// [`ApiError::RetryExhausted`].
pub(crate) async fn with_backoff<T, F, Fut>(mut op: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AttemptError>>,
{
    let mut cause = match op().await {
        Ok(value) => return Ok(value),
        Err(AttemptError::Fatal(err)) => return Err(err),
        Err(AttemptError::Transient(cause)) => cause,
    };

    for attempt in 1..=MAX_RETRIES {
        let delay = Duration::from_secs(1 << (attempt - 1));
        tracing::debug!(
            attempt,
            max_retries = MAX_RETRIES,
            delay_secs = delay.as_secs(),
            %cause,
            "transient failure, retrying after delay"
        );
        tokio::time::sleep(delay).await;

        match op().await {
            Ok(value) => return Ok(value),
            Err(AttemptError::Fatal(err)) => return Err(err),
            Err(AttemptError::Transient(next)) => cause = next,
        }
    }

    Err(ApiError::RetryExhausted {
        attempts: MAX_RETRIES + 1,
        cause,
    })
}
