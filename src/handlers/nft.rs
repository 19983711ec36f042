use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::error::AppError;
use crate::handlers::{success, ApiJson, ApiResult};
use crate::nft::{MintRequest, PageParams, SortBy};
use crate::state::AppState;
use crate::utils::timing::{complete_request_timer, start_request_timer};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort_by: Option<String>,
    pub owner: Option<String>,
    pub viewer: Option<String>,
}

impl ListQuery {
    pub fn into_params(self) -> PageParams {
        PageParams {
            sort_by: self.sort_by.as_deref().and_then(SortBy::parse),
            owner: self.owner.filter(|owner| !owner.trim().is_empty()),
            viewer: self.viewer.filter(|viewer| !viewer.trim().is_empty()),
            ..PageParams::new(self.page, self.page_size)
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewerQuery {
    pub viewer: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransferRequest {
    pub to: Option<String>,
}

pub async fn list_nfts(State(state): State<AppState>, Query(query): Query<ListQuery>) -> ApiResult {
    let params = query.into_params();
    let mut timer = start_request_timer(
        "/nfts",
        Some(format!("page={} pageSize={}", params.page, params.page_size)),
    );
    let result = state.nfts.list_page(&params).await;
    complete_request_timer(&mut timer, &result);

    let page = result?;
    state.nfts.preload_next_page(&params, &page.pagination);
    Ok(success(page))
}

pub async fn get_nft(
    State(state): State<AppState>,
    Path(token_id): Path<String>,
    Query(query): Query<ViewerQuery>,
) -> ApiResult {
    let mut timer = start_request_timer("/nfts/{token_id}", Some(format!("tokenId={token_id}")));
    let result = state
        .nfts
        .get_record(&token_id, query.viewer.as_deref())
        .await;
    complete_request_timer(&mut timer, &result);
    Ok(success(result?))
}

pub async fn like_nft(State(state): State<AppState>, Path(token_id): Path<String>) -> ApiResult {
    let mut timer = start_request_timer("/nfts/{token_id}/like", Some(format!("tokenId={token_id}")));
    let result = state.nfts.like(&token_id).await;
    complete_request_timer(&mut timer, &result);
    Ok(success(result?))
}

pub async fn unlike_nft(State(state): State<AppState>, Path(token_id): Path<String>) -> ApiResult {
    let mut timer = start_request_timer("/nfts/{token_id}/unlike", Some(format!("tokenId={token_id}")));
    let result = state.nfts.unlike(&token_id).await;
    complete_request_timer(&mut timer, &result);
    Ok(success(result?))
}

pub async fn transfer_nft(
    State(state): State<AppState>,
    Path(token_id): Path<String>,
    ApiJson(request): ApiJson<TransferRequest>,
) -> ApiResult {
    let mut timer = start_request_timer(
        "/nfts/{token_id}/transfer",
        Some(format!("tokenId={token_id}")),
    );
    let result = match request.to.as_deref().map(str::trim).filter(|to| !to.is_empty()) {
        Some(to) => state.nfts.transfer(&token_id, to).await,
        None => Err(AppError::missing_fields(vec!["to".to_string()])),
    };
    complete_request_timer(&mut timer, &result);
    Ok(success(result?))
}

pub async fn mint_nft(State(state): State<AppState>, ApiJson(request): ApiJson<MintRequest>) -> ApiResult {
    let mut timer = start_request_timer(
        "/nfts/mint",
        request.word_count.map(|count| format!("wordCount={count}")),
    );
    let result = state.nfts.mint(&request).await;
    complete_request_timer(&mut timer, &result);
    Ok(success(result?))
}
