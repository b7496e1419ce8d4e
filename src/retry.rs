//! Bounded check-then-sleep polling.
//!
//! Replaces ad hoc retry-via-sleep loops: one deadline, one interval, and an
//! explicit `None` when the deadline passes. Gateway implementations use this
//! for confirmation waits; anything else that polls external state can reuse
//! it.

use std::future::Future;
use std::time::Duration;

use tokio::time::{sleep, Instant};

/// Poll `check` until it yields a value or `timeout` elapses.
///
/// `check` is invoked immediately, then every `interval` while the deadline
/// allows another attempt. Returns `None` once the deadline passes; the
/// caller decides what timeout means (for confirmation waits,
/// [`ChainError::ConfirmationTimeout`](crate::error::ChainError)).
pub async fn poll_until<T, F, Fut>(interval: Duration, timeout: Duration, mut check: F) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    let deadline = Instant::now() + timeout;

    loop {
        if let Some(value) = check().await {
            return Some(value);
        }
        if Instant::now() + interval > deadline {
            return None;
        }
        sleep(interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn returns_value_once_check_succeeds() {
        let attempts = AtomicU32::new(0);
        let result = poll_until(Duration::from_millis(1), Duration::from_secs(1), || {
            let n = attempts.fetch_add(1, Ordering::SeqCst);
            async move { (n >= 2).then_some(n) }
        })
        .await;

        assert_eq!(result, Some(2));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_deadline() {
        let result: Option<()> =
            poll_until(Duration::from_millis(5), Duration::from_millis(12), || async {
                None
            })
            .await;

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn first_attempt_runs_even_with_zero_timeout() {
        let result = poll_until(Duration::from_millis(1), Duration::ZERO, || async {
            Some(42)
        })
        .await;

        assert_eq!(result, Some(42));
    }
}
