pub mod cache;
pub mod couplet;
pub mod nft;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

pub type ApiResult = Result<Json<Value>, AppError>;

/// Wraps `data` in the `{ success: true, data }` envelope.
pub fn success<T: Serialize>(data: T) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}

/// `Json` body extractor whose rejections use the error envelope.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/couplet/generate",
            get(couplet::generate_usage).post(couplet::generate_couplet),
        )
        .route(
            "/couplet/image",
            get(couplet::image_usage).post(couplet::generate_image),
        )
        .route("/couplet/options", get(couplet::list_options))
        .route("/nfts", get(nft::list_nfts))
        .route("/nfts/mint", post(nft::mint_nft))
        .route("/nfts/{token_id}", get(nft::get_nft))
        .route("/nfts/{token_id}/like", post(nft::like_nft))
        .route("/nfts/{token_id}/unlike", post(nft::unlike_nft))
        .route("/nfts/{token_id}/transfer", post(nft::transfer_nft))
        .route("/cache", delete(cache::clear))
        .route("/cache/sweep", post(cache::sweep))
        .route("/cache/stats", get(cache::stats))
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use parking_lot::Mutex;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::cache::layered::tests::layered;
    use crate::couplet::CoupletWriter;
    use crate::error::AppError;
    use crate::llm::{ImageGateway, TextModel};
    use crate::nft::service::tests::FakeChain;
    use crate::nft::{NftService, ServiceSettings};
    use crate::options::OptionRegistry;
    use crate::prompt::{AdvancedOptions, CompiledPrompt};
    use crate::state::AppState;

    pub(crate) struct CannedModel;

    #[async_trait]
    impl TextModel for CannedModel {
        fn model_name(&self) -> &str {
            "canned"
        }

        async fn complete_json(&self, _system: &str, _user: &str) -> Result<String, AppError> {
            Ok(r#"{"upper":"金蛇舞动迎春到","lower":"福气临门万象新","horizontal":"万事如意","explanation":"蛇年迎春"}"#.to_string())
        }
    }

    #[derive(Default)]
    pub(crate) struct RecordingImages {
        pub prompts: Mutex<Vec<CompiledPrompt>>,
    }

    #[async_trait]
    impl ImageGateway for RecordingImages {
        fn model_name(&self) -> &str {
            "qwen-image-max"
        }

        async fn generate(
            &self,
            prompt: &CompiledPrompt,
            _advanced: &AdvancedOptions,
        ) -> Result<String, AppError> {
            self.prompts.lock().push(prompt.clone());
            Ok("https://img.example/1.png".to_string())
        }
    }

    pub(crate) async fn test_state(tokens: u64) -> (AppState, Arc<RecordingImages>) {
        let images = Arc::new(RecordingImages::default());
        let (cache, _, _) = layered(Duration::from_secs(60)).await;
        let nfts = NftService::new(
            Arc::new(FakeChain::with_tokens(tokens)),
            cache,
            ServiceSettings {
                max_attempts: 1,
                retry_base_delay: Duration::ZERO,
                gateway: "https://gw.example/ipfs".to_string(),
                tx_from: None,
            },
        );
        let state = AppState::new(
            Arc::new(OptionRegistry::builtin()),
            CoupletWriter::new(Arc::new(CannedModel)),
            images.clone(),
            nfts,
        );
        (state, images)
    }

    async fn post_json(uri: &str, body: &str) -> (StatusCode, Value) {
        let (state, _) = test_state(0).await;
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = super::router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn mistyped_body_fields_get_the_error_envelope() {
        for (uri, body) in [
            ("/couplet/generate", r#"{"wordCount": 7}"#),
            ("/couplet/generate", r#"{"isAcrostic": "yes"}"#),
            ("/couplet/image", r#"{"upper": 1, "lower": "户纳春风吉庆多", "horizontal": "四季平安"}"#),
            ("/nfts/1/transfer", r#"{"to": 42}"#),
            ("/nfts/mint", r#"{"wordCount": "七言"}"#),
        ] {
            let (status, body) = post_json(uri, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["success"], false, "{uri}");
            assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()), "{uri}");
        }
    }

    #[tokio::test]
    async fn unparseable_body_gets_the_error_envelope() {
        let (status, body) = post_json("/couplet/generate", "not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn mint_route_reports_disabled_mutations() {
        let body = r#"{
            "upperLine": "春回大地百花艳",
            "lowerLine": "福满人间万象新",
            "horizontalScroll": "春满人间",
            "wordCount": 7,
            "imageUrl": "ipfs://QmHash"
        }"#;
        let (status, body) = post_json("/nfts/mint", body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
    }
}
