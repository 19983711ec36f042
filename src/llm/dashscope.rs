use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::llm::ImageGateway;
use crate::prompt::{AdvancedOptions, CompiledPrompt};
use crate::utils::http::{get_http_client, summarize_error_body, truncate_for_log};
use crate::utils::timing::log_upstream_timing;

/// DashScope multimodal-generation client.
#[derive(Debug, Clone)]
pub struct DashScopeClient {
    api_key: String,
    endpoint: String,
    model: String,
    timeout: Duration,
}

impl DashScopeClient {
    pub fn from_config(config: &Config) -> Self {
        DashScopeClient {
            api_key: config.dashscope_api_key.trim().to_string(),
            endpoint: config.dashscope_endpoint.clone(),
            model: config.dashscope_model.clone(),
            timeout: Duration::from_secs(config.image_timeout_seconds),
        }
    }

    pub fn build_request_body(&self, prompt: &CompiledPrompt, advanced: &AdvancedOptions) -> Value {
        let mut parameters = Map::new();
        parameters.insert("negative_prompt".into(), json!(prompt.negative_prompt));
        parameters.insert("prompt_extend".into(), json!(true));
        parameters.insert("watermark".into(), json!(false));
        parameters.insert("size".into(), json!(prompt.size_string()));
        if let Some(seed) = advanced.seed {
            parameters.insert("seed".into(), json!(seed));
        }
        if let Some(steps) = advanced.steps {
            parameters.insert("steps".into(), json!(steps));
        }
        if let Some(guidance) = advanced.guidance {
            parameters.insert("guidance_scale".into(), json!(guidance));
        }

        json!({
            "model": self.model,
            "input": {
                "messages": [{
                    "role": "user",
                    "content": [{ "text": prompt.positive_prompt }]
                }]
            },
            "parameters": Value::Object(parameters)
        })
    }

    async fn post(&self, body: &Value) -> Result<Value, AppError> {
        let response = get_http_client()
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    AppError::Upstream(format!(
                        "Image generation timed out after {}s",
                        self.timeout.as_secs()
                    ))
                } else {
                    AppError::Upstream(format!("Image generation request failed: {err}"))
                }
            })?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let value: Option<Value> = serde_json::from_str(&text).ok();
        let has_code = value
            .as_ref()
            .and_then(|v| v.get("code"))
            .map(|code| !(code.is_null() || code.as_str() == Some("")))
            .unwrap_or(false);

        if !status.is_success() || has_code {
            let (message, body_summary) = summarize_error_body(&text);
            warn!("DashScope API error: status={}, body={}", status, body_summary);
            return Err(AppError::Upstream(
                message.unwrap_or_else(|| "Image generation failed".to_string()),
            ));
        }

        value.ok_or_else(|| {
            AppError::Upstream("Image generation failed: malformed response".to_string())
        })
    }
}

pub fn extract_image_url(body: &Value) -> Result<String, AppError> {
    if body.get("output").is_none() {
        error!(
            "DashScope response has no output: {}",
            truncate_for_log(&body.to_string(), 2000)
        );
        return Err(AppError::Upstream(
            "Image generation failed: malformed response".to_string(),
        ));
    }

    body.pointer("/output/choices/0/message/content/0/image")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            error!(
                "DashScope response has no image URL: {}",
                truncate_for_log(&body.to_string(), 2000)
            );
            AppError::Upstream("Image generation failed: no image URL in response".to_string())
        })
}

#[async_trait]
impl ImageGateway for DashScopeClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        prompt: &CompiledPrompt,
        advanced: &AdvancedOptions,
    ) -> Result<String, AppError> {
        if self.api_key.is_empty() {
            return Err(AppError::Configuration("DASHSCOPE_API_KEY is not set".to_string()));
        }

        let body = self.build_request_body(prompt, advanced);
        let metadata = json!({
            "size": prompt.size_string(),
            "prompt_chars": prompt.positive_prompt.chars().count(),
            "negative_chars": prompt.negative_prompt.chars().count(),
        });
        let response = log_upstream_timing(
            "dashscope",
            &self.model,
            "couplet_image",
            Some(metadata),
            || async { self.post(&body).await },
        )
        .await?;

        let url = extract_image_url(&response)?;
        info!("Image generated: size={}", prompt.size_string());
        Ok(url)
    }
}
