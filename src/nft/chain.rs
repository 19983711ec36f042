use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use alloy_primitives::{hex, Address, U256};
use alloy_sol_types::SolCall;
use anyhow::anyhow;
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::nft::abi::{self, CoupletContent, ICoupletNft};
use crate::utils::http::{get_http_client, truncate_for_log};

/// State-changing calls the service can submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractCall {
    Like { token_id: String },
    Unlike { token_id: String },
    Transfer {
        from: String,
        to: String,
        token_id: String,
    },
    Mint {
        upper_line: String,
        lower_line: String,
        horizontal_scroll: String,
        image_url: String,
    },
}

impl ContractCall {
    pub fn name(&self) -> &'static str {
        match self {
            ContractCall::Like { .. } => "likeCouplet",
            ContractCall::Unlike { .. } => "unlikeCouplet",
            ContractCall::Transfer { .. } => "safeTransferFrom",
            ContractCall::Mint { .. } => "mintCouplet",
        }
    }
}

/// Read and write access to the couplet NFT contract.
#[async_trait]
pub trait ChainClient: Send + Sync {
    async fn total_supply(&self) -> Result<u64, AppError>;

    async fn token_by_index(&self, index: u64) -> Result<String, AppError>;

    async fn owner_of(&self, token_id: &str) -> Result<String, AppError>;

    async fn couplet_content(&self, token_id: &str) -> Result<CoupletContent, AppError>;

    async fn like_count(&self, token_id: &str) -> Result<u64, AppError>;

    async fn has_user_liked(&self, token_id: &str, user: &str) -> Result<bool, AppError>;

    /// Submits the call and returns the transaction hash.
    async fn send_transaction(&self, call: &ContractCall) -> Result<String, AppError>;

    /// Resolves once the transaction is mined successfully.
    async fn wait_for_receipt(&self, tx_hash: &str) -> Result<(), AppError>;
}

/// `ChainClient` speaking Ethereum JSON-RPC to a node that manages the
/// sending account (`eth_sendTransaction`).
pub struct RpcChainClient {
    rpc_url: String,
    contract: Address,
    from: Option<Address>,
    confirmation_timeout: Duration,
    poll_interval: Duration,
    next_id: AtomicU64,
}

fn parse_address(name: &str, value: &str) -> Result<Address, AppError> {
    value
        .trim()
        .parse::<Address>()
        .map_err(|err| AppError::Configuration(format!("{name} is not a valid address: {err}")))
}

fn contract_error(err: anyhow::Error) -> AppError {
    AppError::Contract(err.to_string())
}

fn token_arg(token_id: &str) -> Result<U256, AppError> {
    abi::parse_token_id(token_id).map_err(|err| AppError::validation(err.to_string()))
}

fn user_address(value: &str) -> Result<Address, AppError> {
    value
        .trim()
        .parse::<Address>()
        .map_err(|err| AppError::validation(format!("Invalid address: {err}")))
}

impl RpcChainClient {
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let contract = parse_address("CONTRACT_ADDRESS", &config.contract_address)?;
        let from = if config.mutations_enabled() {
            Some(parse_address("TX_FROM_ADDRESS", &config.tx_from_address)?)
        } else {
            None
        };
        Ok(RpcChainClient {
            rpc_url: config.rpc_url.clone(),
            contract,
            from,
            confirmation_timeout: Duration::from_secs(config.tx_confirmation_timeout_seconds),
            poll_interval: Duration::from_secs(1),
            next_id: AtomicU64::new(1),
        })
    }

    async fn rpc(&self, method: &str, params: Value) -> anyhow::Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        let response = get_http_client().post(&self.rpc_url).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(anyhow!(
                "RPC {} returned HTTP {}: {}",
                method,
                status,
                truncate_for_log(&text, 500)
            ));
        }

        let mut value: Value = serde_json::from_str(&text)
            .map_err(|err| anyhow!("RPC {} returned invalid JSON: {}", method, err))?;
        if let Some(error) = value.get("error") {
            let message = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown RPC error");
            return Err(anyhow!("RPC {} failed: {}", method, message));
        }
        Ok(value.get_mut("result").map(Value::take).unwrap_or(Value::Null))
    }

    async fn call<C>(&self, call: C) -> Result<C::Return, AppError>
    where
        C: SolCall + Send,
    {
        let data = format!("0x{}", hex::encode(call.abi_encode()));
        debug!("eth_call {} on {}", C::SIGNATURE, self.contract);
        let result = self
            .rpc(
                "eth_call",
                json!([{ "to": self.contract.to_string(), "data": data }, "latest"]),
            )
            .await
            .map_err(contract_error)?;
        let payload = result
            .as_str()
            .ok_or_else(|| AppError::Contract(format!("{} returned no data", C::SIGNATURE)))?;
        let bytes = abi::decode_hex(payload).map_err(contract_error)?;
        if bytes.is_empty() {
            // Calls into a reverting function or a missing contract come back empty.
            return Err(AppError::Contract(format!("{} returned empty data", C::SIGNATURE)));
        }
        C::abi_decode_returns(&bytes, true)
            .map_err(|err| AppError::Contract(format!("{} returned malformed data: {err}", C::SIGNATURE)))
    }

    fn encode(&self, call: &ContractCall) -> Result<String, AppError> {
        let data = match call {
            ContractCall::Like { token_id } => ICoupletNft::likeCoupletCall {
                tokenId: token_arg(token_id)?,
            }
            .abi_encode(),
            ContractCall::Unlike { token_id } => ICoupletNft::unlikeCoupletCall {
                tokenId: token_arg(token_id)?,
            }
            .abi_encode(),
            ContractCall::Transfer { from, to, token_id } => ICoupletNft::safeTransferFromCall {
                from: parse_address("from", from)?,
                to: user_address(to)?,
                tokenId: token_arg(token_id)?,
            }
            .abi_encode(),
            ContractCall::Mint {
                upper_line,
                lower_line,
                horizontal_scroll,
                image_url,
            } => ICoupletNft::mintCoupletCall {
                upperLine: upper_line.clone(),
                lowerLine: lower_line.clone(),
                horizontalScroll: horizontal_scroll.clone(),
                imageUrl: image_url.clone(),
            }
            .abi_encode(),
        };
        Ok(format!("0x{}", hex::encode(data)))
    }
}

#[async_trait]
impl ChainClient for RpcChainClient {
    async fn total_supply(&self) -> Result<u64, AppError> {
        let supply = self.call(ICoupletNft::totalSupplyCall {}).await?;
        abi::u256_to_u64(supply._0).map_err(contract_error)
    }

    async fn token_by_index(&self, index: u64) -> Result<String, AppError> {
        let token = self
            .call(ICoupletNft::tokenByIndexCall {
                index: U256::from(index),
            })
            .await?;
        Ok(token._0.to_string())
    }

    async fn owner_of(&self, token_id: &str) -> Result<String, AppError> {
        let owner = self
            .call(ICoupletNft::ownerOfCall {
                tokenId: token_arg(token_id)?,
            })
            .await?;
        Ok(owner._0.to_checksum(None))
    }

    async fn couplet_content(&self, token_id: &str) -> Result<CoupletContent, AppError> {
        let content = self
            .call(ICoupletNft::getCoupletContentCall {
                tokenId: token_arg(token_id)?,
            })
            .await?;
        Ok(content._0)
    }

    async fn like_count(&self, token_id: &str) -> Result<u64, AppError> {
        let count = self
            .call(ICoupletNft::getLikeCountCall {
                tokenId: token_arg(token_id)?,
            })
            .await?;
        abi::u256_to_u64(count._0).map_err(contract_error)
    }

    async fn has_user_liked(&self, token_id: &str, user: &str) -> Result<bool, AppError> {
        let liked = self
            .call(ICoupletNft::hasUserLikedCall {
                tokenId: token_arg(token_id)?,
                user: user_address(user)?,
            })
            .await?;
        Ok(liked._0)
    }

    async fn send_transaction(&self, call: &ContractCall) -> Result<String, AppError> {
        let from = self.from.ok_or_else(|| {
            AppError::Configuration("TX_FROM_ADDRESS is not set; mutations are disabled".to_string())
        })?;
        let data = self.encode(call)?;
        let result = self
            .rpc(
                "eth_sendTransaction",
                json!([{
                    "from": from.to_string(),
                    "to": self.contract.to_string(),
                    "data": data,
                }]),
            )
            .await
            .map_err(contract_error)?;
        let tx_hash = result
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| AppError::Contract(format!("{} returned no transaction hash", call.name())))?;
        info!("Submitted {} transaction {}", call.name(), tx_hash);
        Ok(tx_hash)
    }

    async fn wait_for_receipt(&self, tx_hash: &str) -> Result<(), AppError> {
        let started = Instant::now();
        loop {
            let receipt = self
                .rpc("eth_getTransactionReceipt", json!([tx_hash]))
                .await
                .map_err(contract_error)?;
            if !receipt.is_null() {
                return match receipt.get("status").and_then(|s| s.as_str()) {
                    Some("0x1") => {
                        debug!("Transaction {} confirmed", tx_hash);
                        Ok(())
                    }
                    status => Err(AppError::Contract(format!(
                        "transaction {} reverted (status {:?})",
                        tx_hash, status
                    ))),
                };
            }
            if started.elapsed() >= self.confirmation_timeout {
                warn!("Gave up waiting for transaction {}", tx_hash);
                return Err(AppError::Contract(format!(
                    "transaction {} was not confirmed within {}s",
                    tx_hash,
                    self.confirmation_timeout.as_secs()
                )));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
