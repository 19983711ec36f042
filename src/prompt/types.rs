use serde::{Deserialize, Serialize};

/// Optional knobs that bypass the computed prompt pieces.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedOptions {
    #[serde(default)]
    pub custom_prompt: Option<String>,
    #[serde(default)]
    pub negative_prompt: Option<String>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub steps: Option<u32>,
    #[serde(default)]
    pub guidance: Option<f32>,
}

impl AdvancedOptions {
    pub fn custom_prompt(&self) -> Option<&str> {
        non_empty(self.custom_prompt.as_deref())
    }

    pub fn negative_prompt(&self) -> Option<&str> {
        non_empty(self.negative_prompt.as_deref())
    }
}

/// Image-side selection as received from a client. Every field is optional and
/// resolved to a concrete value by [`crate::prompt::PromptCompiler::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(default)]
    pub zodiac: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub art_style: Option<String>,
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default)]
    pub color_scheme: Option<String>,
    #[serde(default)]
    pub decoration: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub advanced: Option<AdvancedOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CoupletLines {
    #[serde(default)]
    pub upper: String,
    #[serde(default)]
    pub lower: String,
    #[serde(default)]
    pub horizontal: String,
}

impl CoupletLines {
    pub fn new(upper: &str, lower: &str, horizontal: &str) -> Self {
        CoupletLines {
            upper: upper.to_string(),
            lower: lower.to_string(),
            horizontal: horizontal.to_string(),
        }
    }

    /// Names of the lines that are empty after trimming.
    pub fn missing_fields(&self) -> Vec<String> {
        [
            ("upper", &self.upper),
            ("lower", &self.lower),
            ("horizontal", &self.horizontal),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name.to_string())
        .collect()
    }
}

/// Concrete values after defaults, legacy mapping and table fallbacks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSelection {
    pub zodiac: String,
    pub style: String,
    pub theme: String,
    pub tone: String,
    pub art_style: String,
    pub layout: String,
    pub color_scheme: String,
    pub decoration: String,
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledPrompt {
    pub positive_prompt: String,
    pub negative_prompt: String,
    pub image_width: u32,
    pub image_height: u32,
}

impl CompiledPrompt {
    /// Size in the `W*H` form the image gateway expects.
    pub fn size_string(&self) -> String {
        format!("{}*{}", self.image_width, self.image_height)
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
