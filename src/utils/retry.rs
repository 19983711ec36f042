use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// Runs `operation` up to `max_attempts` times. After failed attempt `n`
/// (1-based) the next one starts after `base_delay * 2^(n-1)`. The last error
/// is returned once attempts are exhausted.
pub async fn retry_with_backoff<T, E, F, Fut>(
    label: &str,
    max_attempts: u32,
    base_delay: Duration,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt >= max_attempts => {
                warn!("{} failed after {} attempts: {}", label, attempt, err);
                return Err(err);
            }
            Err(err) => {
                let delay = base_delay.saturating_mul(1u32 << (attempt - 1).min(16));
                warn!(
                    "{} attempt {}/{} failed: {}; retrying in {:?}",
                    label, attempt, max_attempts, err, delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Instant;

    #[tokio::test]
    async fn returns_first_success() {
        let calls = AtomicU32::new(0);
        let result: Result<&str, String> =
            retry_with_backoff("ok", 3, Duration::from_millis(1), || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("done")
            })
            .await;
        assert_eq!(result, Ok("done"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn recovers_after_transient_failures() {
        let calls = AtomicU32::new(0);
        let result: Result<u32, String> =
            retry_with_backoff("flaky", 3, Duration::from_millis(1), || async {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                if n < 3 {
                    Err(format!("attempt {n}"))
                } else {
                    Ok(n)
                }
            })
            .await;
        assert_eq!(result, Ok(3));
    }

    #[tokio::test]
    async fn gives_up_with_last_error_and_doubles_delay() {
        let calls = AtomicU32::new(0);
        let started = Instant::now();
        let result: Result<(), String> =
            retry_with_backoff("down", 3, Duration::from_millis(10), || async {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                Err(format!("attempt {n}"))
            })
            .await;
        assert_eq!(result, Err("attempt 3".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        // 10ms + 20ms between the three attempts
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn zero_attempts_still_runs_once() {
        let calls = AtomicU32::new(0);
        let _: Result<(), String> = retry_with_backoff("once", 0, Duration::ZERO, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err("no".to_string())
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
