use axum::extract::State;
use serde_json::json;
use tracing::info;

use crate::handlers::{success, ApiResult};
use crate::state::AppState;
use crate::utils::timing::{complete_request_timer, start_request_timer};

pub async fn sweep(State(state): State<AppState>) -> ApiResult {
    let removed = state.nfts.cache().clear_expired().await;
    Ok(success(json!({ "removed": removed })))
}

pub async fn clear(State(state): State<AppState>) -> ApiResult {
    state.nfts.cache().clear_all().await;
    info!("Cache cleared on request");
    Ok(success(json!({ "cleared": true })))
}

pub async fn stats(State(state): State<AppState>) -> ApiResult {
    let mut timer = start_request_timer("/cache/stats", None);
    let result = state.nfts.cache().stats().await;
    complete_request_timer(&mut timer, &result);
    Ok(success(result?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::tests::test_state;
    use axum::Json;

    #[tokio::test]
    async fn stats_reflect_cached_records() {
        let (state, _) = test_state(3).await;
        state.nfts.get_record("1", None).await.unwrap();
        state.nfts.get_record("2", None).await.unwrap();

        let Json(body) = stats(State(state.clone())).await.unwrap();
        assert_eq!(body["data"]["count"], 2);
        assert_eq!(body["data"]["persistentCount"], 2);
        assert_eq!(body["data"]["capacity"], 10);

        let Json(body) = sweep(State(state.clone())).await.unwrap();
        assert_eq!(body["data"]["removed"], 0);

        clear(State(state.clone())).await.unwrap();
        let Json(body) = stats(State(state)).await.unwrap();
        assert_eq!(body["data"]["count"], 0);
        assert_eq!(body["data"]["persistentCount"], 0);
    }
}
