use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::llm::TextModel;
use crate::utils::http::{get_http_client, summarize_error_body, truncate_for_log};
use crate::utils::timing::log_upstream_timing;

/// OpenAI-compatible `chat/completions` client.
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
}

impl ChatCompletionClient {
    pub fn from_config(config: &Config) -> Self {
        ChatCompletionClient {
            api_key: config.openai_api_key.trim().to_string(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            model: config.openai_model.clone(),
            temperature: config.openai_temperature,
            max_tokens: config.openai_max_tokens,
            timeout: Duration::from_secs(config.openai_timeout_seconds),
        }
    }

    fn build_payload(&self, system_prompt: &str, user_prompt: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt }
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
            "response_format": { "type": "json_object" }
        })
    }

    async fn call_chat_api(&self, payload: &Value) -> Result<Value> {
        debug!(
            "Chat request: model={}, messages={}",
            self.model,
            payload
                .get("messages")
                .and_then(|v| v.as_array())
                .map(|messages| messages.len())
                .unwrap_or(0)
        );

        let response = get_http_client()
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let (message, body_summary) = summarize_error_body(&body);
            warn!("Chat API error: status={}, body={}", status, body_summary);
            let detail = message.unwrap_or(body_summary);
            return Err(anyhow!("chat request failed with status {}: {}", status, detail));
        }

        Ok(response.json::<Value>().await?)
    }
}

fn extract_message_content(response: &Value) -> Option<String> {
    response
        .pointer("/choices/0/message/content")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|content| !content.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl TextModel for ChatCompletionClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn complete_json(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AppError> {
        if self.api_key.is_empty() {
            return Err(AppError::Configuration("OPENAI_API_KEY is not set".to_string()));
        }

        let payload = self.build_payload(system_prompt, user_prompt);
        let response = log_upstream_timing("openai", &self.model, "couplet_text", None, || async {
            self.call_chat_api(&payload).await
        })
        .await
        .map_err(|err| AppError::Upstream(format!("Couplet generation failed: {err}")))?;

        extract_message_content(&response).ok_or_else(|| {
            warn!(
                "Chat response had no content: {}",
                truncate_for_log(&response.to_string(), 2000)
            );
            AppError::Upstream("Couplet generation failed: empty model response".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_requests_a_json_object() {
        let client = ChatCompletionClient::from_config(&Config::default());
        let payload = client.build_payload("system", "user");
        assert_eq!(payload["model"], "gpt-4");
        assert_eq!(payload["max_tokens"], 500);
        assert_eq!(payload["response_format"]["type"], "json_object");
        assert_eq!(payload["messages"][1]["content"], "user");
    }

    #[test]
    fn extracts_first_choice_content() {
        let response = json!({
            "choices": [{ "message": { "role": "assistant", "content": " {\"upper\":\"a\"} " } }]
        });
        assert_eq!(
            extract_message_content(&response).as_deref(),
            Some("{\"upper\":\"a\"}")
        );
        assert!(extract_message_content(&json!({ "choices": [] })).is_none());
    }

    #[tokio::test]
    async fn missing_key_is_a_configuration_error() {
        let client = ChatCompletionClient::from_config(&Config::default());
        let err = client.complete_json("s", "u").await.unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
