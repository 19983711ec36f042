use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::LayeredCache;
use crate::config::Config;
use crate::error::AppError;
use crate::nft::abi::{self, u256_to_u64};
use crate::nft::chain::{ChainClient, ContractCall};
use crate::nft::types::{
    BatchResult, MintReceipt, MintRequest, MutationReceipt, NftPage, NftRecord, PageParams,
    Pagination, SortBy,
};
use crate::utils::retry::retry_with_backoff;
use crate::utils::timing::log_upstream_timing;

const BATCH_CHUNK_SIZE: usize = 20;
const MINT_WORD_COUNTS: [u8; 3] = [5, 7, 9];

static ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("valid address regex"));
static BARE_CID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(Qm[1-9A-HJ-NP-Za-km-z]{44}|bafy[a-z0-9]{52,})$").expect("valid CID regex")
});

pub fn is_valid_address(value: &str) -> bool {
    ADDRESS_RE.is_match(value.trim())
}

/// Rewrites IPFS references to `gateway/<cid>`. HTTP URLs and anything
/// unrecognised are returned unchanged.
pub fn convert_ipfs_url(url: &str, gateway: &str) -> String {
    let url = url.trim();
    let gateway = gateway.trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    if let Some(hash) = url.strip_prefix("ipfs://") {
        return format!("{}/{}", gateway, hash.trim_start_matches("ipfs/"));
    }
    if BARE_CID_RE.is_match(url) {
        return format!("{}/{}", gateway, url);
    }
    url.to_string()
}

pub fn sort_records(records: &mut [NftRecord], sort_by: SortBy) {
    match sort_by {
        SortBy::Newest => records.sort_by(|a, b| b.mint_timestamp.cmp(&a.mint_timestamp)),
        SortBy::Oldest => records.sort_by(|a, b| a.mint_timestamp.cmp(&b.mint_timestamp)),
        SortBy::MostLiked => records.sort_by(|a, b| b.like_count.cmp(&a.like_count)),
    }
}

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub max_attempts: u32,
    pub retry_base_delay: Duration,
    pub gateway: String,
    /// Sender for mutations; `None` disables them.
    pub tx_from: Option<String>,
}

impl ServiceSettings {
    pub fn from_config(config: &Config) -> Self {
        ServiceSettings {
            max_attempts: config.read_max_attempts,
            retry_base_delay: config.read_retry_base_delay(),
            gateway: config.pinata_gateway.clone(),
            tx_from: config
                .mutations_enabled()
                .then(|| config.tx_from_address.trim().to_string()),
        }
    }
}

/// Gallery reads backed by the layered cache, with live contract reads for
/// misses. Mutations go straight to the chain and invalidate the token.
pub struct NftService {
    chain: Arc<dyn ChainClient>,
    cache: LayeredCache,
    settings: ServiceSettings,
}

impl NftService {
    pub fn new(chain: Arc<dyn ChainClient>, cache: LayeredCache, settings: ServiceSettings) -> Self {
        NftService {
            chain,
            cache,
            settings,
        }
    }

    pub fn cache(&self) -> &LayeredCache {
        &self.cache
    }

    async fn read_from_chain(&self, token_id: &str) -> Result<NftRecord, AppError> {
        let owner = self.chain.owner_of(token_id).await?;
        let content = self.chain.couplet_content(token_id).await?;
        let like_count = self.chain.like_count(token_id).await?;
        let mint_timestamp = u256_to_u64(content.mintTime)
            .map_err(|err| AppError::Contract(format!("token {token_id}: {err}")))?;
        Ok(NftRecord {
            token_id: token_id.to_string(),
            owner,
            upper_line: content.upperLine,
            lower_line: content.lowerLine,
            horizontal_scroll: content.horizontalScroll,
            image_url: convert_ipfs_url(&content.imageUrl, &self.settings.gateway),
            mint_timestamp,
            like_count,
            liked_by_current_user: false,
        })
    }

    async fn read_with_retry(&self, token_id: &str) -> Result<NftRecord, AppError> {
        retry_with_backoff(
            &format!("Reading token {token_id}"),
            self.settings.max_attempts,
            self.settings.retry_base_delay,
            || self.read_from_chain(token_id),
        )
        .await
    }

    async fn apply_viewer(&self, records: &mut [NftRecord], viewer: Option<&str>) {
        let Some(viewer) = viewer.filter(|v| is_valid_address(v)) else {
            return;
        };
        for record in records.iter_mut() {
            record.liked_by_current_user =
                match self.chain.has_user_liked(&record.token_id, viewer).await {
                    Ok(liked) => liked,
                    Err(err) => {
                        warn!("Like status for token {} unavailable: {}", record.token_id, err);
                        false
                    }
                };
        }
    }

    /// Cache first; misses are read from the chain in chunks, one token at a
    /// time, and written back. Order of `token_ids` is kept.
    pub async fn get_batch(&self, token_ids: &[String], viewer: Option<&str>) -> BatchResult {
        let mut cached = self.cache.get_batch(token_ids).await;
        let misses: Vec<&String> = token_ids
            .iter()
            .filter(|id| !cached.contains_key(*id))
            .collect();
        debug!(
            "Batch of {} tokens: {} cached, {} from chain",
            token_ids.len(),
            cached.len(),
            misses.len()
        );

        let mut failed = Vec::new();
        for chunk in misses.chunks(BATCH_CHUNK_SIZE) {
            let mut fresh = Vec::with_capacity(chunk.len());
            for token_id in chunk {
                match self.read_with_retry(token_id).await {
                    Ok(record) => fresh.push(((*token_id).clone(), record)),
                    Err(err) => {
                        warn!("Token {} excluded from batch: {}", token_id, err);
                        failed.push((*token_id).clone());
                    }
                }
            }
            self.cache.set_batch(&fresh).await;
            cached.extend(fresh);
        }

        let mut success: Vec<NftRecord> = token_ids
            .iter()
            .filter_map(|id| cached.remove(id))
            .collect();
        self.apply_viewer(&mut success, viewer).await;
        BatchResult { success, failed }
    }

    pub async fn get_record(&self, token_id: &str, viewer: Option<&str>) -> Result<NftRecord, AppError> {
        let token_id = Self::checked_token_id(token_id)?;
        let mut record = match self.cache.get(&token_id).await {
            Some(record) => record,
            None => {
                let record = self.read_with_retry(&token_id).await?;
                self.cache.set(&token_id, &record).await;
                record
            }
        };
        self.apply_viewer(std::slice::from_mut(&mut record), viewer).await;
        Ok(record)
    }

    pub async fn list_page(&self, params: &PageParams) -> Result<NftPage, AppError> {
        let metadata = json!({ "page": params.page, "pageSize": params.page_size });
        log_upstream_timing("rpc", "couplet-contract", "list_page", Some(metadata), || {
            self.fetch_page(params)
        })
        .await
    }

    async fn fetch_page(&self, params: &PageParams) -> Result<NftPage, AppError> {
        let total = self.chain.total_supply().await?;
        let pagination = Pagination::new(params.page, params.page_size, total);
        let start = u64::from(params.page.saturating_sub(1)) * u64::from(params.page_size);
        if total == 0 || start >= total {
            return Ok(NftPage {
                data: Vec::new(),
                pagination,
                failed: Vec::new(),
            });
        }
        let end = (start + u64::from(params.page_size)).min(total);

        let mut token_ids = Vec::with_capacity((end - start) as usize);
        for index in start..end {
            match self.chain.token_by_index(index).await {
                Ok(token_id) => token_ids.push(token_id),
                Err(err) => warn!("Skipping token index {}: {}", index, err),
            }
        }

        let BatchResult { mut success, failed } =
            self.get_batch(&token_ids, params.viewer.as_deref()).await;
        if let Some(sort_by) = params.sort_by {
            sort_records(&mut success, sort_by);
        }
        if let Some(owner) = params.owner.as_deref().map(str::trim).filter(|o| !o.is_empty()) {
            success.retain(|record| record.owner.eq_ignore_ascii_case(owner));
        }

        info!(
            "Page {} resolved {} records ({} failed) of {} total",
            params.page,
            success.len(),
            failed.len(),
            total
        );
        Ok(NftPage {
            data: success,
            pagination,
            failed,
        })
    }

    /// Warms the cache with the following page in the background.
    pub fn preload_next_page(
        self: &Arc<Self>,
        params: &PageParams,
        pagination: &Pagination,
    ) -> Option<JoinHandle<()>> {
        if !pagination.has_next {
            return None;
        }
        let service = Arc::clone(self);
        let next = PageParams {
            viewer: None,
            ..params.next_page()
        };
        Some(tokio::spawn(async move {
            match service.fetch_page(&next).await {
                Ok(page) => debug!("Preloaded page {} ({} records)", next.page, page.data.len()),
                Err(err) => warn!("Preloading page {} failed: {}", next.page, err),
            }
        }))
    }

    fn sender(&self) -> Result<&str, AppError> {
        self.settings.tx_from.as_deref().ok_or_else(|| {
            AppError::Configuration("TX_FROM_ADDRESS is not set; mutations are disabled".to_string())
        })
    }

    /// Sends `call` and waits for it to be mined. Never retried.
    async fn submit(&self, call: &ContractCall, metadata: Value) -> Result<String, AppError> {
        log_upstream_timing("rpc", "couplet-contract", call.name(), Some(metadata), || async {
            let hash = self.chain.send_transaction(call).await?;
            self.chain.wait_for_receipt(&hash).await?;
            Ok::<_, AppError>(hash)
        })
        .await
    }

    async fn mutate(&self, call: ContractCall, token_id: &str) -> Result<MutationReceipt, AppError> {
        let transaction_hash = self.submit(&call, json!({ "tokenId": token_id })).await?;
        self.cache.invalidate(token_id).await;
        info!("{} confirmed for token {} in {}", call.name(), token_id, transaction_hash);
        Ok(MutationReceipt {
            token_id: token_id.to_string(),
            transaction_hash,
        })
    }

    fn checked_token_id(token_id: &str) -> Result<String, AppError> {
        abi::parse_token_id(token_id)
            .map(|id| id.to_string())
            .map_err(|err| AppError::validation(err.to_string()))
    }

    pub async fn like(&self, token_id: &str) -> Result<MutationReceipt, AppError> {
        let token_id = Self::checked_token_id(token_id)?;
        self.sender()?;
        self.mutate(
            ContractCall::Like {
                token_id: token_id.clone(),
            },
            &token_id,
        )
        .await
    }

    pub async fn unlike(&self, token_id: &str) -> Result<MutationReceipt, AppError> {
        let token_id = Self::checked_token_id(token_id)?;
        self.sender()?;
        self.mutate(
            ContractCall::Unlike {
                token_id: token_id.clone(),
            },
            &token_id,
        )
        .await
    }

    /// Transfers from the configured sender account to `to`.
    pub async fn transfer(&self, token_id: &str, to: &str) -> Result<MutationReceipt, AppError> {
        let token_id = Self::checked_token_id(token_id)?;
        if !is_valid_address(to) {
            return Err(AppError::Validation {
                message: "Invalid recipient address".to_string(),
                fields: vec!["to".to_string()],
            });
        }
        let from = self.sender()?.to_string();
        self.mutate(
            ContractCall::Transfer {
                from,
                to: to.trim().to_string(),
                token_id: token_id.clone(),
            },
            &token_id,
        )
        .await
    }

    /// Mints the couplet to the sender account. The image must already be
    /// hosted; `image_url` is stored as given.
    pub async fn mint(&self, request: &MintRequest) -> Result<MintReceipt, AppError> {
        let text = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let lines = (
            text(&request.upper_line),
            text(&request.lower_line),
            text(&request.horizontal_scroll),
            text(&request.image_url),
        );
        let (upper_line, lower_line, horizontal_scroll, image_url) = match lines {
            (Some(upper), Some(lower), Some(horizontal), Some(image)) => (upper, lower, horizontal, image),
            ref partial => {
                let missing = [
                    ("upperLine", &partial.0),
                    ("lowerLine", &partial.1),
                    ("horizontalScroll", &partial.2),
                    ("imageUrl", &partial.3),
                ]
                .into_iter()
                .filter(|(_, value)| value.is_none())
                .map(|(name, _)| name.to_string())
                .collect();
                return Err(AppError::missing_fields(missing));
            }
        };
        if !request
            .word_count
            .is_some_and(|count| MINT_WORD_COUNTS.contains(&count))
        {
            return Err(AppError::Validation {
                message: "wordCount must be 5, 7 or 9".to_string(),
                fields: vec!["wordCount".to_string()],
            });
        }
        self.sender()?;

        let call = ContractCall::Mint {
            upper_line,
            lower_line,
            horizontal_scroll,
            image_url,
        };
        let transaction_hash = self
            .submit(&call, json!({ "wordCount": request.word_count, "zodiac": request.zodiac }))
            .await?;
        info!("Minted couplet in {}", transaction_hash);
        Ok(MintReceipt { transaction_hash })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::cache::layered::tests::layered;
    use crate::nft::abi::CoupletContent;
    use alloy_primitives::U256;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const ALICE: &str = "0x00000000000000000000000000000000000000aa";
    const BOB: &str = "0x00000000000000000000000000000000000000BB";

    /// In-process contract: token `i` is minted at `1_000 + i`.
    #[derive(Default)]
    pub(crate) struct FakeChain {
        pub tokens: Vec<String>,
        pub owners: HashMap<String, String>,
        pub likes: Mutex<HashMap<String, u64>>,
        pub likers: Mutex<HashSet<(String, String)>>,
        pub broken: HashSet<String>,
        pub broken_reads: AtomicUsize,
        pub content_reads: AtomicUsize,
        pub sent: Mutex<Vec<ContractCall>>,
        pub revert: bool,
    }

    impl FakeChain {
        pub(crate) fn with_tokens(count: u64) -> Self {
            let tokens: Vec<String> = (1..=count).map(|i| i.to_string()).collect();
            let owners = tokens
                .iter()
                .map(|id| {
                    let owner = if id.parse::<u64>().unwrap_or(0) % 2 == 0 { BOB } else { ALICE };
                    (id.clone(), owner.to_string())
                })
                .collect();
            FakeChain {
                tokens,
                owners,
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl ChainClient for FakeChain {
        async fn total_supply(&self) -> Result<u64, AppError> {
            Ok(self.tokens.len() as u64)
        }

        async fn token_by_index(&self, index: u64) -> Result<String, AppError> {
            self.tokens
                .get(index as usize)
                .cloned()
                .ok_or_else(|| AppError::Contract("index out of bounds".into()))
        }

        async fn owner_of(&self, token_id: &str) -> Result<String, AppError> {
            if self.broken.contains(token_id) {
                self.broken_reads.fetch_add(1, Ordering::SeqCst);
                return Err(AppError::Contract("execution reverted".into()));
            }
            self.owners
                .get(token_id)
                .cloned()
                .ok_or_else(|| AppError::Contract("nonexistent token".into()))
        }

        async fn couplet_content(&self, token_id: &str) -> Result<CoupletContent, AppError> {
            self.content_reads.fetch_add(1, Ordering::SeqCst);
            let n: u64 = token_id.parse().unwrap_or(0);
            Ok(CoupletContent {
                upperLine: "门迎旭日财源广".into(),
                lowerLine: "户纳春风吉庆多".into(),
                horizontalScroll: "四季平安".into(),
                imageUrl: format!("ipfs://cid{token_id}"),
                mintTime: U256::from(1_000 + n),
            })
        }

        async fn like_count(&self, token_id: &str) -> Result<u64, AppError> {
            Ok(*self.likes.lock().get(token_id).unwrap_or(&0))
        }

        async fn has_user_liked(&self, token_id: &str, user: &str) -> Result<bool, AppError> {
            Ok(self
                .likers
                .lock()
                .contains(&(token_id.to_string(), user.to_lowercase())))
        }

        async fn send_transaction(&self, call: &ContractCall) -> Result<String, AppError> {
            self.sent.lock().push(call.clone());
            if let ContractCall::Like { token_id } = call {
                *self.likes.lock().entry(token_id.clone()).or_insert(0) += 1;
            }
            Ok(format!("0xhash{}", self.sent.lock().len()))
        }

        async fn wait_for_receipt(&self, tx_hash: &str) -> Result<(), AppError> {
            if self.revert {
                return Err(AppError::Contract(format!("transaction {tx_hash} reverted")));
            }
            Ok(())
        }
    }

    fn settings(mutations_enabled: bool) -> ServiceSettings {
        ServiceSettings {
            max_attempts: 3,
            retry_base_delay: Duration::from_millis(1),
            gateway: "https://gw.example/ipfs".to_string(),
            tx_from: mutations_enabled.then(|| ALICE.to_string()),
        }
    }

    async fn service(chain: FakeChain, mutations_enabled: bool) -> (Arc<NftService>, Arc<FakeChain>) {
        let chain = Arc::new(chain);
        let (cache, _, _) = layered(Duration::from_secs(60)).await;
        let service = NftService::new(chain.clone(), cache, settings(mutations_enabled));
        (Arc::new(service), chain)
    }

    #[test]
    fn converts_ipfs_references() {
        let gw = "https://gw.example/ipfs/";
        assert_eq!(convert_ipfs_url("ipfs://abc", gw), "https://gw.example/ipfs/abc");
        assert_eq!(convert_ipfs_url("https://x/y.png", gw), "https://x/y.png");
        let cid = format!("Qm{}", "a".repeat(44));
        assert_eq!(convert_ipfs_url(&cid, gw), format!("https://gw.example/ipfs/{cid}"));
        let v1 = format!("bafy{}", "b".repeat(52));
        assert_eq!(convert_ipfs_url(&v1, gw), format!("https://gw.example/ipfs/{v1}"));
        assert_eq!(convert_ipfs_url("data:image/png", gw), "data:image/png");
    }

    #[test]
    fn validates_addresses() {
        assert!(is_valid_address(ALICE));
        assert!(is_valid_address(BOB));
        assert!(!is_valid_address("0x123"));
        assert!(!is_valid_address("00000000000000000000000000000000000000aaaa"));
    }

    #[tokio::test]
    async fn empty_supply_returns_empty_page_without_token_reads() {
        let (service, chain) = service(FakeChain::default(), false).await;
        let page = service.list_page(&PageParams::default()).await.unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_pages, 0);
        assert!(!page.pagination.has_next);
        assert_eq!(chain.content_reads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failing_token_is_excluded_but_page_succeeds() {
        let mut chain = FakeChain::with_tokens(3);
        chain.broken.insert("2".to_string());
        let (service, chain) = service(chain, false).await;
        let page = service.list_page(&PageParams::default()).await.unwrap();
        assert_eq!(chain.broken_reads.load(Ordering::SeqCst), 3);
        let ids: Vec<&str> = page.data.iter().map(|r| r.token_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(page.failed, vec!["2".to_string()]);
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.data[0].image_url, "https://gw.example/ipfs/cid1");
    }

    #[tokio::test]
    async fn pages_are_sorted_and_filtered() {
        let chain = FakeChain::with_tokens(5);
        chain.likes.lock().insert("3".to_string(), 9);
        let (service, _) = service(chain, false).await;

        let mut params = PageParams::new(Some(1), Some(5));
        params.sort_by = Some(SortBy::Newest);
        let page = service.list_page(&params).await.unwrap();
        assert_eq!(page.data[0].token_id, "5");

        params.sort_by = Some(SortBy::MostLiked);
        let page = service.list_page(&params).await.unwrap();
        assert_eq!(page.data[0].token_id, "3");

        params.sort_by = Some(SortBy::Oldest);
        params.owner = Some(BOB.to_lowercase());
        let page = service.list_page(&params).await.unwrap();
        let ids: Vec<&str> = page.data.iter().map(|r| r.token_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4"]);
    }

    #[tokio::test]
    async fn second_page_of_reads_comes_from_cache() {
        let (service, chain) = service(FakeChain::with_tokens(4), false).await;
        let params = PageParams::new(Some(1), Some(4));
        service.list_page(&params).await.unwrap();
        assert_eq!(chain.content_reads.load(Ordering::SeqCst), 4);
        service.list_page(&params).await.unwrap();
        assert_eq!(chain.content_reads.load(Ordering::SeqCst), 4);
        service.get_record("2", None).await.unwrap();
        assert_eq!(chain.content_reads.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn viewer_flag_is_not_cached() {
        let chain = FakeChain::with_tokens(1);
        chain
            .likers
            .lock()
            .insert(("1".to_string(), ALICE.to_string()));
        let (service, _) = service(chain, false).await;
        assert!(service.get_record("1", Some(ALICE)).await.unwrap().liked_by_current_user);
        assert!(!service.get_record("1", None).await.unwrap().liked_by_current_user);
        assert!(!service.get_record("1", Some(BOB)).await.unwrap().liked_by_current_user);
    }

    #[tokio::test]
    async fn like_invalidates_cached_token() {
        let (service, chain) = service(FakeChain::with_tokens(2), true).await;
        assert_eq!(service.get_record("1", None).await.unwrap().like_count, 0);
        let receipt = service.like("1").await.unwrap();
        assert_eq!(receipt.token_id, "1");
        assert_eq!(receipt.transaction_hash, "0xhash1");
        assert_eq!(service.get_record("1", None).await.unwrap().like_count, 1);
        assert_eq!(chain.sent.lock().len(), 1);
    }

    #[tokio::test]
    async fn mutations_need_a_sender_and_valid_input() {
        let (service, chain) = service(FakeChain::with_tokens(1), false).await;
        assert!(matches!(service.unlike("1").await, Err(AppError::Configuration(_))));
        assert!(matches!(
            service.transfer("1", "0xnope").await,
            Err(AppError::Validation { .. })
        ));
        assert!(matches!(service.like("x1").await, Err(AppError::Validation { .. })));
        assert!(chain.sent.lock().is_empty());
    }

    #[tokio::test]
    async fn reverted_transfer_keeps_cache_and_reports_contract_error() {
        let mut chain = FakeChain::with_tokens(1);
        chain.revert = true;
        let (service, chain) = service(chain, true).await;
        service.get_record("1", None).await.unwrap();
        let err = service.transfer("1", BOB).await.unwrap_err();
        assert!(matches!(err, AppError::Contract(_)));
        assert_eq!(chain.sent.lock().len(), 1);
        assert!(service.cache().get("1").await.is_some());
    }

    #[tokio::test]
    async fn preload_warms_the_next_page() {
        let (service, chain) = service(FakeChain::with_tokens(4), false).await;
        let params = PageParams::new(Some(1), Some(2));
        let page = service.list_page(&params).await.unwrap();
        let handle = service
            .preload_next_page(&params, &page.pagination)
            .unwrap();
        handle.await.unwrap();
        assert_eq!(chain.content_reads.load(Ordering::SeqCst), 4);
        assert!(service.cache().get("4").await.is_some());

        let last = Pagination::new(2, 2, 4);
        assert!(service.preload_next_page(&params, &last).is_none());
    }

    fn mint_request() -> MintRequest {
        MintRequest {
            upper_line: Some("春回大地百花艳".to_string()),
            lower_line: Some("福满人间万象新".to_string()),
            horizontal_scroll: Some("春满人间".to_string()),
            zodiac: Some("🐍 蛇年".to_string()),
            word_count: Some(7),
            style: Some("传统典雅".to_string()),
            image_url: Some("ipfs://QmHash".to_string()),
            art_style: Some("traditional-ink".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn mint_submits_lines_and_image() {
        let (service, chain) = service(FakeChain::with_tokens(0), true).await;
        let receipt = service.mint(&mint_request()).await.unwrap();
        assert_eq!(receipt.transaction_hash, "0xhash1");
        assert_eq!(
            chain.sent.lock().as_slice(),
            &[ContractCall::Mint {
                upper_line: "春回大地百花艳".to_string(),
                lower_line: "福满人间万象新".to_string(),
                horizontal_scroll: "春满人间".to_string(),
                image_url: "ipfs://QmHash".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn mint_validates_before_sending() {
        let (service, chain) = service(FakeChain::with_tokens(0), true).await;

        let request = MintRequest {
            horizontal_scroll: Some("  ".to_string()),
            image_url: None,
            ..mint_request()
        };
        match service.mint(&request).await.unwrap_err() {
            AppError::Validation { fields, .. } => {
                assert_eq!(fields, vec!["horizontalScroll", "imageUrl"]);
            }
            other => panic!("unexpected error {other:?}"),
        }

        for word_count in [None, Some(6)] {
            let request = MintRequest {
                word_count,
                ..mint_request()
            };
            assert!(matches!(
                service.mint(&request).await,
                Err(AppError::Validation { ref fields, .. }) if fields == &vec!["wordCount".to_string()]
            ));
        }
        assert!(chain.sent.lock().is_empty());
    }

    #[tokio::test]
    async fn mint_needs_a_sender_and_is_not_retried() {
        let (disabled, chain) = service(FakeChain::with_tokens(0), false).await;
        assert!(matches!(
            disabled.mint(&mint_request()).await,
            Err(AppError::Configuration(_))
        ));
        assert!(chain.sent.lock().is_empty());

        let mut reverting = FakeChain::with_tokens(0);
        reverting.revert = true;
        let (enabled, chain) = service(reverting, true).await;
        assert!(matches!(
            enabled.mint(&mint_request()).await,
            Err(AppError::Contract(_))
        ));
        assert_eq!(chain.sent.lock().len(), 1);
    }
}
