use std::time::Instant;

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use tracing::info;

use crate::utils::logging::TIMING_TARGET;

/// Tracks one HTTP request from arrival to response on the timing target.
#[derive(Debug)]
pub struct RequestTimer {
    route: String,
    detail: Option<String>,
    started_at: DateTime<Utc>,
    started_perf: Instant,
    status: String,
    completed: bool,
}

impl RequestTimer {
    pub fn new(route: &str, detail: Option<String>) -> Self {
        RequestTimer {
            route: route.to_string(),
            detail,
            started_at: Utc::now(),
            started_perf: Instant::now(),
            status: "success".to_string(),
            completed: false,
        }
    }

    pub fn log_received(&self) {
        info!(
            target: TIMING_TARGET,
            "event=request_received route={} received_at={} detail={:?}",
            self.route,
            self.started_at.to_rfc3339(),
            self.detail
        );
    }

    pub fn mark_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    pub fn log_completed(&mut self) {
        if self.completed {
            return;
        }
        self.completed = true;
        let completed_at = Utc::now();
        let duration = self.started_perf.elapsed().as_secs_f64();
        info!(
            target: TIMING_TARGET,
            "event=request_completed route={} started_at={} completed_at={} duration_s={:.3} status={}",
            self.route,
            self.started_at.to_rfc3339(),
            completed_at.to_rfc3339(),
            duration,
            self.status
        );
    }
}

pub fn start_request_timer(route: &str, detail: Option<String>) -> RequestTimer {
    let timer = RequestTimer::new(route, detail);
    timer.log_received();
    timer
}

/// Marks the outcome of a handler result and logs completion.
pub fn complete_request_timer<T, E>(timer: &mut RequestTimer, result: &Result<T, E>) {
    timer.mark_status(if result.is_ok() { "success" } else { "error" });
    timer.log_completed();
}

pub async fn log_upstream_timing<T, E, F, Fut>(
    provider: &str,
    model: &str,
    operation: &str,
    metadata: Option<JsonValue>,
    call: F,
) -> Result<T, E>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
{
    let started_at = Utc::now();
    let started_perf = Instant::now();
    let metadata_text = metadata
        .as_ref()
        .map(|value| value.to_string())
        .unwrap_or_else(|| "{}".to_string());
    info!(
        target: TIMING_TARGET,
        "event=upstream_request provider={} model={} operation={} started_at={} metadata={}",
        provider,
        model,
        operation,
        started_at.to_rfc3339(),
        metadata_text
    );

    let result = call().await;
    let status = if result.is_ok() { "success" } else { "error" };

    let completed_at = Utc::now();
    let duration = started_perf.elapsed().as_secs_f64();
    info!(
        target: TIMING_TARGET,
        "event=upstream_response provider={} model={} operation={} completed_at={} duration_s={:.3} status={} metadata={}",
        provider,
        model,
        operation,
        completed_at.to_rfc3339(),
        duration,
        status,
        metadata_text
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passes_through_the_wrapped_result() {
        let ok: Result<u32, String> =
            log_upstream_timing("rpc", "eth_call", "totalSupply", None, || async { Ok(7) }).await;
        assert_eq!(ok, Ok(7));

        let err: Result<u32, String> = log_upstream_timing("rpc", "eth_call", "ownerOf", None, || async {
            Err("reverted".to_string())
        })
        .await;
        assert_eq!(err, Err("reverted".to_string()));
    }

    #[test]
    fn completion_is_logged_once() {
        let mut timer = start_request_timer("/nfts", None);
        let result: Result<(), ()> = Err(());
        complete_request_timer(&mut timer, &result);
        assert_eq!(timer.status, "error");
        assert!(timer.completed);
        timer.mark_status("success");
        timer.log_completed();
        assert_eq!(timer.status, "success");
    }
}
