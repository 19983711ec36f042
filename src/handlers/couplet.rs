use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::info;

use crate::couplet::{CoupletRequest, WordCount};
use crate::error::AppError;
use crate::handlers::{success, ApiJson, ApiResult};
use crate::options::{keys, Dimension};
use crate::prompt::{CoupletLines, GenerationConfig};
use crate::state::AppState;
use crate::utils::timing::{complete_request_timer, start_request_timer};

/// Body of `POST /couplet/image`: the three lines plus an optional selection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageRequest {
    #[serde(flatten)]
    pub lines: CoupletLines,
    #[serde(flatten)]
    pub config: GenerationConfig,
}

pub async fn generate_couplet(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CoupletRequest>,
) -> ApiResult {
    let mut timer = start_request_timer(
        "/couplet/generate",
        request.word_count.clone().map(|count| format!("wordCount={count}")),
    );
    let result = async {
        let brief = request.validate()?;
        state.writer.write(&brief).await
    }
    .await;
    complete_request_timer(&mut timer, &result);

    let couplet = result?;
    info!("Generated couplet with horizontal scroll {}", couplet.horizontal);
    Ok(success(couplet))
}

pub async fn generate_image(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ImageRequest>,
) -> ApiResult {
    let mut timer = start_request_timer(
        "/couplet/image",
        request.config.art_style.clone().map(|art| format!("artStyle={art}")),
    );
    let result = render_image(&state, &request).await;
    complete_request_timer(&mut timer, &result);
    Ok(success(result?))
}

async fn render_image(state: &AppState, request: &ImageRequest) -> Result<Value, AppError> {
    let missing = request.lines.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::missing_fields(missing));
    }

    let selection = state.compiler.resolve(&request.config);
    let prompt = state.compiler.compile(&request.lines, &request.config);
    let advanced = request.config.advanced.clone().unwrap_or_default();
    let image_url = state.images.generate(&prompt, &advanced).await?;

    let mut metadata = Map::new();
    metadata.insert("model".into(), json!(state.images.model_name()));
    metadata.insert("timestamp".into(), json!(Utc::now().timestamp_millis()));
    metadata.insert("imageSize".into(), json!(prompt.size_string()));
    if let Some(seed) = advanced.seed {
        metadata.insert("seed".into(), json!(seed));
    }

    Ok(json!({
        "imageUrl": image_url,
        "config": selection,
        "metadata": Value::Object(metadata),
    }))
}

pub async fn list_options(State(state): State<AppState>) -> Json<Value> {
    let registry = &state.registry;
    let mut tables = Map::new();
    for dimension in Dimension::ALL {
        tables.insert(
            dimension.as_str().to_string(),
            json!(registry.table(dimension).entries()),
        );
    }
    success(json!({
        "options": Value::Object(tables),
        "presets": registry.presets(),
        "defaultPreset": registry.default_preset().map(|preset| preset.id.clone()),
    }))
}

pub async fn generate_usage() -> Json<Value> {
    let word_counts: Vec<&str> = WordCount::ALL.iter().map(|count| count.label()).collect();
    Json(json!({
        "name": "春联生成 API",
        "method": "POST",
        "endpoint": "/couplet/generate",
        "requestBody": {
            "zodiac": "生肖（如：🐍 蛇年）",
            "wordCount": format!("字数（{}）", word_counts.join(" | ")),
            "style": "创作风格（如：传统典雅、现代简约、幽默搞笑、文艺清新）",
            "theme": "祝福主题（如：万事如意、财源广进、事业顺利）",
            "atmosphere": "预期氛围（如：活泼、温馨、庄重、霸气）",
            "isAcrostic": "是否启用藏头春联（可选）",
            "acrosticText": "藏头文字内容，2-4个字（可选，需要 isAcrostic=true）",
        },
        "response": {
            "success": "是否成功",
            "data": {
                "upper": "上联",
                "lower": "下联",
                "horizontal": "横批",
                "explanation": "解释说明",
            },
            "error": "错误信息（失败时）",
        },
        "example": {
            "request": {
                "zodiac": "🐍 蛇年",
                "wordCount": "七言",
                "style": "传统典雅",
                "theme": "万事如意",
                "atmosphere": "活泼",
                "isAcrostic": true,
                "acrosticText": "新春",
            },
        },
    }))
}

pub async fn image_usage(State(state): State<AppState>) -> Json<Value> {
    let registry = &state.registry;
    let mut supported = Map::new();
    for dimension in [
        Dimension::ArtStyle,
        Dimension::Layout,
        Dimension::ColorScheme,
        Dimension::Decoration,
        Dimension::Background,
    ] {
        let values: Vec<&str> = registry
            .table(dimension)
            .entries()
            .iter()
            .map(|option| option.value.as_str())
            .collect();
        supported.insert(dimension.as_str().to_string(), json!(values));
    }

    let sizes: Map<String, Value> = registry
        .table(Dimension::Layout)
        .entries()
        .iter()
        .map(|layout| {
            (
                layout.value.clone(),
                json!({
                    "width": layout.extra_u32(keys::WIDTH),
                    "height": layout.extra_u32(keys::HEIGHT),
                    "aspectRatio": layout.extra(keys::ASPECT_RATIO),
                }),
            )
        })
        .collect();

    Json(json!({
        "name": "春联图片生成 API",
        "method": "POST",
        "endpoint": "/couplet/image",
        "model": state.images.model_name(),
        "requestBody": {
            "required": {
                "upper": "上联内容",
                "lower": "下联内容",
                "horizontal": "横批内容",
            },
            "optional": {
                "zodiac": "生肖年份（如：🐎 马年）",
                "style": "创作风格（传统典雅/现代简约/幽默搞笑/文艺清新）",
                "theme": "祝福主题",
                "tone": "预期氛围（庄重/活泼/温馨/霸气）",
                "advanced": {
                    "customPrompt": "自定义提示词",
                    "negativePrompt": "负向提示词",
                    "seed": "随机种子（数字）",
                    "steps": "生成步数（数字）",
                    "guidance": "引导强度（数字）",
                },
            },
        },
        "supportedValues": Value::Object(supported),
        "imageSizes": Value::Object(sizes),
        "response": {
            "success": "是否成功",
            "data": {
                "imageUrl": "生成的图片 URL",
                "config": "实际使用的配置参数",
                "metadata": "生成元数据（模型、时间戳、尺寸等）",
            },
            "error": "错误信息（失败时）",
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::tests::test_state;

    fn image_request(body: Value) -> ApiJson<ImageRequest> {
        ApiJson(serde_json::from_value(body).unwrap())
    }

    #[tokio::test]
    async fn generate_reports_missing_fields() {
        let (state, _) = test_state(0).await;
        let request: CoupletRequest =
            serde_json::from_value(json!({ "zodiac": "🐍 蛇年", "wordCount": "七言" })).unwrap();
        let err = generate_couplet(State(state), ApiJson(request)).await.unwrap_err();
        match err {
            AppError::Validation { fields, .. } => {
                assert_eq!(fields, vec!["style", "theme", "atmosphere"]);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn generate_rejects_single_character_acrostic() {
        let (state, _) = test_state(0).await;
        let request: CoupletRequest = serde_json::from_value(json!({
            "zodiac": "🐍 蛇年",
            "wordCount": "七言",
            "style": "传统典雅",
            "theme": "万事如意",
            "atmosphere": "活泼",
            "isAcrostic": true,
            "acrosticText": "新",
        }))
        .unwrap();
        let err = generate_couplet(State(state), ApiJson(request)).await.unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("at least 2"));
    }

    #[tokio::test]
    async fn generate_wraps_couplet_in_envelope() {
        let (state, _) = test_state(0).await;
        let request: CoupletRequest = serde_json::from_value(json!({
            "zodiac": "🐍 蛇年",
            "wordCount": "七言",
            "style": "传统典雅",
            "theme": "万事如意",
            "atmosphere": "活泼",
        }))
        .unwrap();
        let Json(body) = generate_couplet(State(state), ApiJson(request)).await.unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["upper"], "金蛇舞动迎春到");
        assert_eq!(body["data"]["horizontal"], "万事如意");
    }

    #[tokio::test]
    async fn image_requires_all_three_lines() {
        let (state, images) = test_state(0).await;
        let request = image_request(json!({ "upper": "门迎旭日财源广", "lower": "户纳春风吉庆多" }));
        let err = generate_image(State(state), request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { ref fields, .. } if fields == &vec!["horizontal".to_string()]));
        assert!(images.prompts.lock().is_empty());
    }

    #[tokio::test]
    async fn image_returns_url_config_and_metadata() {
        let (state, images) = test_state(0).await;
        let request = image_request(json!({
            "upper": "门迎旭日财源广",
            "lower": "户纳春风吉庆多",
            "horizontal": "四季平安",
            "artStyle": "traditional-gongbi",
            "layout": "horizontal",
            "advanced": { "seed": 42 },
        }));
        let Json(body) = generate_image(State(state), request).await.unwrap();
        let data = &body["data"];
        assert_eq!(data["imageUrl"], "https://img.example/1.png");
        assert_eq!(data["config"]["artStyle"], "traditional-gongbi");
        assert_eq!(data["metadata"]["imageSize"], "1664*936");
        assert_eq!(data["metadata"]["seed"], 42);
        assert_eq!(data["metadata"]["model"], "qwen-image-max");

        let prompts = images.prompts.lock();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].positive_prompt.contains("门迎旭日财源广"));
    }

    #[tokio::test]
    async fn options_list_every_dimension_and_presets() {
        let (state, _) = test_state(0).await;
        let Json(body) = list_options(State(state)).await;
        let options = body["data"]["options"].as_object().unwrap();
        assert_eq!(options.len(), Dimension::ALL.len());
        assert_eq!(body["data"]["presets"].as_array().unwrap().len(), 6);
        assert_eq!(body["data"]["defaultPreset"], "classic-traditional");
    }

    #[tokio::test]
    async fn image_usage_lists_layout_sizes() {
        let (state, _) = test_state(0).await;
        let Json(body) = image_usage(State(state)).await;
        assert_eq!(body["imageSizes"]["vertical"]["width"], 936);
        assert_eq!(body["imageSizes"]["square"]["aspectRatio"], "1:1");
        let Json(usage) = generate_usage().await;
        assert_eq!(usage["endpoint"], "/couplet/generate");
    }
}
