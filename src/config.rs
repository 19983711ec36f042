use std::env;
use std::time::Duration;

use anyhow::Result;
use once_cell::sync::Lazy;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub log_level: String,
    pub log_dir: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub openai_temperature: f32,
    pub openai_max_tokens: u32,
    pub openai_timeout_seconds: u64,
    pub dashscope_api_key: String,
    pub dashscope_endpoint: String,
    pub dashscope_model: String,
    pub image_timeout_seconds: u64,
    pub rpc_url: String,
    pub contract_address: String,
    pub tx_from_address: String,
    pub tx_confirmation_timeout_seconds: u64,
    pub pinata_gateway: String,
    pub cache_database_url: String,
    pub memory_cache_ttl_seconds: u64,
    pub memory_cache_capacity: usize,
    pub persistent_cache_ttl_seconds: u64,
    pub cache_sweep_interval_seconds: u64,
    pub read_max_attempts: u32,
    pub read_retry_base_ms: u64,
}

pub static CONFIG: Lazy<Config> =
    Lazy::new(|| Config::load().expect("Failed to load configuration"));

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .map(|value| value.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_f32(name: &str, default: f32) -> f32 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<f32>().ok())
        .unwrap_or(default)
}

fn env_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u32>().ok())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(default)
}

fn normalize_base_url(name: &str, value: String, default: &str) -> String {
    let trimmed = value.trim().trim_end_matches('/');
    match url::Url::parse(trimmed) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => trimmed.to_string(),
        _ => {
            warn!("Invalid {} value '{}'; defaulting to {}.", name, value, default);
            default.to_string()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_address: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            openai_api_key: String::new(),
            openai_base_url: "https://api.openai.com/v1".to_string(),
            openai_model: "gpt-4".to_string(),
            openai_temperature: 0.8,
            openai_max_tokens: 500,
            openai_timeout_seconds: 60,
            dashscope_api_key: String::new(),
            dashscope_endpoint:
                "https://dashscope.aliyuncs.com/api/v1/services/aigc/multimodal-generation/generation"
                    .to_string(),
            dashscope_model: "qwen-image-max".to_string(),
            image_timeout_seconds: 60,
            rpc_url: "https://testnet.hsk.xyz".to_string(),
            contract_address: "0x5684D13F92b6880CdB4AE2bc322aAeFD8392cccA".to_string(),
            tx_from_address: String::new(),
            tx_confirmation_timeout_seconds: 120,
            pinata_gateway: "https://lime-fair-whippet-113.mypinata.cloud/ipfs".to_string(),
            cache_database_url: "sqlite://nft_cache.db".to_string(),
            memory_cache_ttl_seconds: 5 * 60,
            memory_cache_capacity: 100,
            persistent_cache_ttl_seconds: 24 * 60 * 60,
            cache_sweep_interval_seconds: 10 * 60,
            read_max_attempts: 3,
            read_retry_base_ms: 2_000,
        }
    }
}

impl Config {
    /// Reads every setting from the environment, falling back to the defaults
    /// above. API keys are optional here; handlers reject requests when the key
    /// they need is missing.
    pub fn load() -> Result<Self> {
        let defaults = Config::default();

        let mut config = Config {
            bind_address: env_string("BIND_ADDRESS", &defaults.bind_address),
            log_level: env_string("LOG_LEVEL", &defaults.log_level).to_lowercase(),
            log_dir: env_string("LOG_DIR", &defaults.log_dir),
            openai_api_key: env_string("OPENAI_API_KEY", ""),
            openai_base_url: normalize_base_url(
                "OPENAI_BASE_URL",
                env_string("OPENAI_BASE_URL", &defaults.openai_base_url),
                &defaults.openai_base_url,
            ),
            openai_model: env_string("OPENAI_MODEL", &defaults.openai_model),
            openai_temperature: env_f32("OPENAI_TEMPERATURE", defaults.openai_temperature),
            openai_max_tokens: env_u32("OPENAI_MAX_TOKENS", defaults.openai_max_tokens),
            openai_timeout_seconds: env_u64(
                "OPENAI_TIMEOUT_SECONDS",
                defaults.openai_timeout_seconds,
            ),
            dashscope_api_key: env_string("DASHSCOPE_API_KEY", ""),
            dashscope_endpoint: normalize_base_url(
                "DASHSCOPE_ENDPOINT",
                env_string("DASHSCOPE_ENDPOINT", &defaults.dashscope_endpoint),
                &defaults.dashscope_endpoint,
            ),
            dashscope_model: env_string("DASHSCOPE_MODEL", &defaults.dashscope_model),
            image_timeout_seconds: env_u64("IMAGE_TIMEOUT_SECONDS", defaults.image_timeout_seconds),
            rpc_url: normalize_base_url(
                "RPC_URL",
                env_string("RPC_URL", &defaults.rpc_url),
                &defaults.rpc_url,
            ),
            contract_address: env_string("CONTRACT_ADDRESS", &defaults.contract_address),
            tx_from_address: env_string("TX_FROM_ADDRESS", ""),
            tx_confirmation_timeout_seconds: env_u64(
                "TX_CONFIRMATION_TIMEOUT_SECONDS",
                defaults.tx_confirmation_timeout_seconds,
            ),
            pinata_gateway: env_string("PINATA_GATEWAY", &defaults.pinata_gateway)
                .trim_end_matches('/')
                .to_string(),
            cache_database_url: env_string("CACHE_DATABASE_URL", &defaults.cache_database_url),
            memory_cache_ttl_seconds: env_u64(
                "MEMORY_CACHE_TTL_SECONDS",
                defaults.memory_cache_ttl_seconds,
            ),
            memory_cache_capacity: env_usize(
                "MEMORY_CACHE_CAPACITY",
                defaults.memory_cache_capacity,
            )
            .max(1),
            persistent_cache_ttl_seconds: env_u64(
                "PERSISTENT_CACHE_TTL_SECONDS",
                defaults.persistent_cache_ttl_seconds,
            ),
            cache_sweep_interval_seconds: env_u64(
                "CACHE_SWEEP_INTERVAL_SECONDS",
                defaults.cache_sweep_interval_seconds,
            ),
            read_max_attempts: env_u32("READ_MAX_ATTEMPTS", defaults.read_max_attempts).max(1),
            read_retry_base_ms: env_u64("READ_RETRY_BASE_MS", defaults.read_retry_base_ms),
        };

        if env_bool("DISABLE_PERSISTENT_CACHE", false) {
            config.cache_database_url = "sqlite::memory:".to_string();
        }

        Ok(config)
    }

    pub fn memory_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.memory_cache_ttl_seconds)
    }

    pub fn persistent_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.persistent_cache_ttl_seconds)
    }

    pub fn read_retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.read_retry_base_ms)
    }

    pub fn mutations_enabled(&self) -> bool {
        !self.tx_from_address.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.openai_model, "gpt-4");
        assert_eq!(config.openai_max_tokens, 500);
        assert_eq!(config.memory_cache_ttl(), Duration::from_secs(300));
        assert_eq!(config.persistent_cache_ttl(), Duration::from_secs(86_400));
        assert_eq!(config.read_max_attempts, 3);
        assert!(!config.mutations_enabled());
    }

    #[test]
    fn rejects_non_http_base_urls() {
        let value = normalize_base_url("RPC_URL", "ftp://node".to_string(), "https://fallback");
        assert_eq!(value, "https://fallback");
        let value = normalize_base_url("RPC_URL", "https://node/".to_string(), "https://fallback");
        assert_eq!(value, "https://node");
    }
}
