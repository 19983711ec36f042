pub mod chat;
pub mod dashscope;

use async_trait::async_trait;

use crate::error::AppError;
use crate::prompt::{AdvancedOptions, CompiledPrompt};

pub use chat::ChatCompletionClient;
pub use dashscope::DashScopeClient;

/// A chat model that answers with a single JSON object.
#[async_trait]
pub trait TextModel: Send + Sync {
    fn model_name(&self) -> &str;

    async fn complete_json(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AppError>;
}

/// A hosted text-to-image endpoint. Returns the URL of the rendered image.
#[async_trait]
pub trait ImageGateway: Send + Sync {
    fn model_name(&self) -> &str;

    async fn generate(
        &self,
        prompt: &CompiledPrompt,
        advanced: &AdvancedOptions,
    ) -> Result<String, AppError>;
}
