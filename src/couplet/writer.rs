use std::fmt::Write as _;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::couplet::request::CoupletBrief;
use crate::error::AppError;
use crate::llm::TextModel;
use crate::utils::http::truncate_for_log;

pub const SYSTEM_PROMPT: &str = "你是一位精通中国传统文化的春联创作大师，擅长根据不同风格、主题创作对仗工整、寓意吉祥的春联。

你需要根据用户提供的配置信息，创作一副完整的春联，包括：
1. 上联：字数符合要求，对仗工整
2. 下联：与上联字数相同，对仗工整，音韵和谐
3. 横批：通常为四字，点明主题
4. 解释：详细说明春联的创作寓意、文化内涵、对仗技巧等（100-200字）

请确保春联内容积极向上、寓意吉祥，符合中国传统文化和春节习俗。

重要：请以 JSON 格式返回结果，包含 upper（上联）、lower（下联）、horizontal（横批）、explanation（解释）四个字段。";

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:json)?\s*(.*?)\s*```").expect("valid fence regex"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoupletResult {
    pub upper: String,
    pub lower: String,
    pub horizontal: String,
    pub explanation: String,
}

pub fn build_user_prompt(brief: &CoupletBrief) -> String {
    let mut prompt = String::from("请根据以下配置创作一副春联：\n\n");
    let _ = writeln!(prompt, "【生肖】：{}", brief.zodiac);
    let _ = writeln!(prompt, "【字数】：{}", brief.word_count.label());
    let _ = writeln!(prompt, "【创作风格】：{}", brief.style);
    let _ = writeln!(prompt, "【祝福主题】：{}", brief.theme);
    let _ = write!(prompt, "【预期氛围】：{}", brief.atmosphere);

    // Fewer than two characters cannot head both lines; the block is skipped.
    let acrostic = brief.acrostic.as_deref().unwrap_or_default();
    if let [first, second, rest @ ..] = acrostic {
        let text: String = acrostic.iter().collect();
        prompt.push_str("\n【藏头要求】：这是一副藏头春联，请务必满足以下要求：");
        let _ = write!(prompt, "\n  - 上联的第一个字必须是「{}」", first);
        let _ = write!(prompt, "\n  - 下联的第一个字必须是「{}」", second);
        if let Some(third) = rest.first() {
            let _ = write!(prompt, "\n  - 横批的第一个字建议包含「{}」", third);
        }
        if let Some(fourth) = rest.get(1) {
            let _ = write!(prompt, "\n  - 横批的第二个字建议包含「{}」", fourth);
        }
        prompt.push_str("\n  - 在保证藏头的前提下，仍然要确保对仗工整、意境连贯、寓意吉祥");
        let _ = write!(prompt, "\n  - 藏头内容：「{}」应当自然融入春联，不显生硬", text);
    }

    prompt.push_str("\n\n请创作一副符合以上要求的春联，并提供详细的解释说明。");
    prompt
}

#[derive(Deserialize)]
struct RawReply {
    #[serde(default)]
    upper: Option<String>,
    #[serde(default)]
    lower: Option<String>,
    #[serde(default)]
    horizontal: Option<String>,
    #[serde(default)]
    explanation: Option<String>,
}

/// Parses the model reply, accepting a bare JSON object or one wrapped in a
/// markdown code fence.
pub fn parse_couplet_reply(reply: &str) -> Result<CoupletResult, AppError> {
    let trimmed = reply.trim();
    let body = CODE_FENCE
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(trimmed);

    let raw: RawReply = serde_json::from_str(body).map_err(|err| {
        warn!(
            "Unparseable couplet reply: {} ({})",
            truncate_for_log(trimmed, 500),
            err
        );
        AppError::Upstream("Couplet generation failed: model did not return JSON".to_string())
    })?;

    let take = |value: Option<String>| value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    match (take(raw.upper), take(raw.lower), take(raw.horizontal)) {
        (Some(upper), Some(lower), Some(horizontal)) => Ok(CoupletResult {
            upper,
            lower,
            horizontal,
            explanation: raw.explanation.unwrap_or_default().trim().to_string(),
        }),
        _ => Err(AppError::Upstream(
            "Couplet generation failed: reply is missing couplet lines".to_string(),
        )),
    }
}

/// Writes couplet text through a [`TextModel`].
#[derive(Clone)]
pub struct CoupletWriter {
    model: Arc<dyn TextModel>,
}

impl CoupletWriter {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        CoupletWriter { model }
    }

    pub async fn write(&self, brief: &CoupletBrief) -> Result<CoupletResult, AppError> {
        let user_prompt = build_user_prompt(brief);
        let reply = self.model.complete_json(SYSTEM_PROMPT, &user_prompt).await?;
        let result = parse_couplet_reply(&reply)?;
        info!(
            "Couplet written: model={}, word_count={}, acrostic={}",
            self.model.model_name(),
            brief.word_count.label(),
            brief.acrostic.is_some()
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::couplet::request::WordCount;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    fn brief(acrostic: Option<&str>) -> CoupletBrief {
        CoupletBrief {
            zodiac: "🐍 蛇年".into(),
            word_count: WordCount::Seven,
            style: "传统典雅".into(),
            theme: "万事如意".into(),
            atmosphere: "活泼".into(),
            acrostic: acrostic.map(|text| text.chars().collect()),
        }
    }

    struct CannedModel {
        reply: String,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TextModel for CannedModel {
        fn model_name(&self) -> &str {
            "canned"
        }

        async fn complete_json(&self, _system: &str, user: &str) -> Result<String, AppError> {
            self.prompts.lock().push(user.to_string());
            Ok(self.reply.clone())
        }
    }

    #[test]
    fn user_prompt_lists_every_setting() {
        let prompt = build_user_prompt(&brief(None));
        assert!(prompt.contains("【生肖】：🐍 蛇年"));
        assert!(prompt.contains("【字数】：七言"));
        assert!(prompt.contains("【预期氛围】：活泼"));
        assert!(!prompt.contains("藏头"));
    }

    #[test]
    fn acrostic_block_assigns_characters_to_lines() {
        let prompt = build_user_prompt(&brief(Some("新春大吉")));
        assert!(prompt.contains("上联的第一个字必须是「新」"));
        assert!(prompt.contains("下联的第一个字必须是「春」"));
        assert!(prompt.contains("横批的第一个字建议包含「大」"));
        assert!(prompt.contains("横批的第二个字建议包含「吉」"));

        let prompt = build_user_prompt(&brief(Some("新春")));
        assert!(!prompt.contains("横批的第一个字"));
    }

    #[test]
    fn short_acrostic_is_skipped_instead_of_indexing_past_the_end() {
        for text in ["", "新"] {
            let prompt = build_user_prompt(&brief(Some(text)));
            assert!(!prompt.contains("藏头"));
        }
    }

    #[test]
    fn parses_fenced_and_bare_replies() {
        let bare = r#"{"upper":"金蛇舞动迎春到","lower":"福气临门万象新","horizontal":"万事如意","explanation":"寓意吉祥"}"#;
        let result = parse_couplet_reply(bare).unwrap();
        assert_eq!(result.horizontal, "万事如意");

        let fenced = format!("```json\n{}\n```", bare);
        assert_eq!(parse_couplet_reply(&fenced).unwrap(), result);
    }

    #[test]
    fn incomplete_reply_is_an_upstream_error() {
        let err = parse_couplet_reply(r#"{"upper":"金蛇舞动迎春到"}"#).unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
        assert!(parse_couplet_reply("sorry, I cannot").is_err());
    }

    #[tokio::test]
    async fn writer_sends_prompt_and_parses_reply() {
        let model = Arc::new(CannedModel {
            reply: r#"{"upper":"a","lower":"b","horizontal":"c","explanation":"d"}"#.into(),
            prompts: Mutex::new(Vec::new()),
        });
        let writer = CoupletWriter::new(model.clone());
        let result = writer.write(&brief(Some("新春"))).await.unwrap();
        assert_eq!(result.upper, "a");
        assert!(model.prompts.lock()[0].contains("「新」"));
    }
}
