use std::fmt::Write as _;
use std::sync::Arc;

use crate::options::registry::{keys, ConfigOption, Dimension, OptionRegistry};
use crate::options::{map_legacy_style, map_legacy_tone, tables};
use crate::prompt::types::{
    non_empty, CompiledPrompt, CoupletLines, GenerationConfig, ResolvedSelection,
};

pub const DEFAULT_IMAGE_WIDTH: u32 = 1664;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 936;

const UNIVERSAL_NEGATIVES: &str = "低分辨率，低画质，模糊不清，构图混乱，文字扭曲，文字模糊，错别字，比例失调，透视错误";
const BODY_NEGATIVES: &str = "肢体畸形，手指畸形，蜡像感，过度光滑，AI痕迹明显";
const LAYOUT_NEGATIVES: &str =
    "横向书写的春联文字（严重错误），文字排列不垂直，春联左右不对称，文字方向错误";

/// Turns a [`GenerationConfig`] and the three couplet lines into the prompt
/// pair sent to the image model. Holds no state besides the shared registry.
#[derive(Debug, Clone)]
pub struct PromptCompiler {
    registry: Arc<OptionRegistry>,
}

impl PromptCompiler {
    pub fn new(registry: Arc<OptionRegistry>) -> Self {
        PromptCompiler { registry }
    }

    pub fn resolve(&self, config: &GenerationConfig) -> ResolvedSelection {
        let style = self.canonical(Dimension::Style, config.style.as_deref(), tables::DEFAULT_STYLE);
        let tone = self.canonical(Dimension::Tone, config.tone.as_deref(), tables::DEFAULT_TONE);

        let art_style = self.canonical(
            Dimension::ArtStyle,
            config.art_style.as_deref(),
            map_legacy_style(&style),
        );
        let color_scheme = self.canonical(
            Dimension::ColorScheme,
            config.color_scheme.as_deref(),
            map_legacy_tone(&tone),
        );

        ResolvedSelection {
            // Zodiac and theme accept free text; unknown values keep the text and
            // pick up the generic decoration at compile time.
            zodiac: non_empty(config.zodiac.as_deref())
                .unwrap_or(tables::DEFAULT_ZODIAC)
                .to_string(),
            theme: non_empty(config.theme.as_deref())
                .unwrap_or(tables::DEFAULT_THEME)
                .to_string(),
            style,
            tone,
            art_style,
            layout: self.canonical(Dimension::Layout, config.layout.as_deref(), tables::DEFAULT_LAYOUT),
            color_scheme,
            decoration: self.canonical(
                Dimension::Decoration,
                config.decoration.as_deref(),
                tables::DEFAULT_DECORATION,
            ),
            background: self.canonical(
                Dimension::Background,
                config.background.as_deref(),
                tables::DEFAULT_BACKGROUND,
            ),
        }
    }

    pub fn compile(&self, lines: &CoupletLines, config: &GenerationConfig) -> CompiledPrompt {
        let selection = self.resolve(config);
        let layout = self.registry.lookup(Dimension::Layout, &selection.layout);
        let art_style = self.registry.lookup(Dimension::ArtStyle, &selection.art_style);
        let (image_width, image_height) = image_size(layout);

        let advanced = config.advanced.clone().unwrap_or_default();
        let positive_prompt = match advanced.custom_prompt() {
            Some(custom) => custom.to_string(),
            None => self.positive_prompt(lines, &selection),
        };
        let negative_prompt = match advanced.negative_prompt() {
            Some(custom) => custom.to_string(),
            None => negative_prompt(art_style),
        };

        CompiledPrompt {
            positive_prompt,
            negative_prompt,
            image_width,
            image_height,
        }
    }

    fn canonical(&self, dimension: Dimension, value: Option<&str>, default: &str) -> String {
        let value = non_empty(value).unwrap_or(default);
        self.registry.lookup(dimension, value).value.clone()
    }

    fn positive_prompt(&self, lines: &CoupletLines, selection: &ResolvedSelection) -> String {
        let registry = &self.registry;
        let art = registry.lookup(Dimension::ArtStyle, &selection.art_style);
        let layout = registry.lookup(Dimension::Layout, &selection.layout);
        let colors = registry.lookup(Dimension::ColorScheme, &selection.color_scheme);
        let decoration = registry.lookup(Dimension::Decoration, &selection.decoration);
        let background = registry.lookup(Dimension::Background, &selection.background);
        let style = registry.lookup(Dimension::Style, &selection.style);
        let tone = registry.lookup(Dimension::Tone, &selection.tone);
        let zodiac = registry.lookup(Dimension::Zodiac, &selection.zodiac);
        let theme = registry.lookup(Dimension::Theme, &selection.theme);
        let art_name = art.extra(keys::STYLE);

        let mut prompt = String::from("请创作一幅春节对联艺术作品，严格遵循以下要求：\n\n");

        let _ = writeln!(prompt, "【核心画风要求 - 最高优先级】");
        let _ = writeln!(prompt, "艺术风格：{}", art_name);
        let _ = writeln!(prompt, "绘画技法：{}", art.extra(keys::TECHNIQUE));
        let _ = writeln!(prompt, "必须包含的视觉特征：{}", art.extra(keys::VISUAL_FEATURES));
        let _ = writeln!(prompt, "质感表现：{}", art.extra(keys::QUALITY));
        let _ = writeln!(prompt, "风格参考：{}", art.extra(keys::EXAMPLES));
        prompt.push_str(
            "\n❗重要：整幅作品的每一个视觉元素（春联文字呈现、装饰图案、背景纹理、色彩处理）都必须完全符合上述艺术风格的典型视觉特征。不能混杂其他风格。\n\n",
        );

        prompt.push_str(&writing_rules(lines));
        let _ = writeln!(
            prompt,
            "文字处理：按照{}的特点来处理文字，使文字风格与整体画风协调统一。金色或红色，笔画清晰。每个字都清晰可见，纵向排列。\n",
            art_name
        );

        let _ = writeln!(prompt, "【色彩体系】");
        let _ = writeln!(prompt, "主色调：{}", colors.extra(keys::PALETTE));
        let _ = writeln!(prompt, "色彩情感：{}", colors.extra(keys::MOOD));
        let _ = writeln!(prompt, "色彩搭配：{}\n", colors.extra(keys::HARMONY));

        let _ = writeln!(prompt, "【构图布局】");
        let _ = writeln!(prompt, "{}", layout.extra(keys::COMPOSITION));
        let _ = writeln!(
            prompt,
            "春联排列方式：{}，注意：春联文字必须竖向书写（从上往下），不能横向书写",
            layout.extra(keys::ARRANGEMENT)
        );
        let _ = writeln!(prompt, "画面比例：{}", layout.extra(keys::RATIO));
        let _ = writeln!(prompt, "对称要求：左右春联完全对称，高度一致，每个字垂直排列\n");

        let _ = writeln!(prompt, "【场景与背景】");
        let _ = writeln!(prompt, "场景设定：{}", style.extra(keys::SCENE));
        let _ = writeln!(
            prompt,
            "背景处理：{}（需符合{}的视觉特征）",
            background.extra(keys::PROMPT),
            art_name
        );
        let _ = writeln!(prompt, "整体氛围：{}\n", tone.extra(keys::PROMPT));

        let _ = writeln!(prompt, "【装饰元素】");
        let _ = writeln!(
            prompt,
            "1. 生肖特色（{}）：{}，以{}的方式呈现",
            selection.zodiac,
            zodiac.extra(keys::PROMPT),
            art_name
        );
        let _ = writeln!(
            prompt,
            "2. 主题装饰（{}）：{}，符合画风特征",
            selection.theme,
            theme.extra(keys::PROMPT)
        );
        let _ = writeln!(prompt, "3. 装饰风格：{}", decoration.extra(keys::PROMPT));
        let _ = writeln!(prompt, "4. 节庆元素：{}\n", style.extra(keys::ORNAMENTS));

        let _ = writeln!(prompt, "【技术标准】");
        prompt.push_str("- 分辨率：4K超高清\n- 细节表现：丰富细腻\n- 色彩饱和度：饱满鲜艳\n");
        prompt.push_str("- 画风一致性：从笔触、质感、色彩处理等各方面严格统一风格\n");
        prompt.push_str("- 文字书写：所有春联文字必须竖向书写（从上到下），每个字独立一行，垂直对齐\n");
        prompt.push_str("- 布局对称性：左右春联完全对称，高度一致\n");
        let _ = writeln!(
            prompt,
            "- 整体效果：强烈的中国传统新年喜庆氛围，{}年特色鲜明\n",
            selection.zodiac
        );

        let _ = writeln!(prompt, "【最终检查】");
        let _ = writeln!(prompt, "确认整幅作品完全符合【{}】的所有典型视觉特征：", art_name);
        prompt.push_str(art.extra(keys::VISUAL_FEATURES));

        prompt.trim().to_string()
    }
}

/// Orientation block injected into every computed prompt. The image model has
/// no notion of couplet layout, so the rules are restated each time.
pub fn writing_rules(lines: &CoupletLines) -> String {
    format!(
        "【春联书写规范 - 极其重要】\n\
         ❗❗❗必须遵循中国传统春联书写习惯：\n\
         1. 文字方向：所有文字必须**从上到下竖向书写**，绝对不能横向书写\n\
         2. 春联布局：采用传统左右对称的竖向布局\n   \
         - 右侧（观看者视角的右边）：上联\"{upper}\" - 从上往下竖着写每一个字\n   \
         - 左侧（观看者视角的左边）：下联\"{lower}\" - 从上往下竖着写每一个字\n   \
         - 顶部中央：横批\"{horizontal}\" - 从右往左横向书写\n\
         3. 文字排列：每个字独立一行，纵向排列，字与字之间垂直对齐\n\
         4. 对称性：左右春联完全对称，高度一致，宽度相同\n\n\
         ❗错误示例（绝对禁止）：横向书写春联文字\n\
         ✅正确示例：\n   \
         上联文字排列：第一个字在最上方，最后一个字在最下方，每个字独立一行，从上到下纵向排列\n   \
         下联文字排列：第一个字在最上方，最后一个字在最下方，每个字独立一行，从上到下纵向排列\n\n",
        upper = lines.upper.trim(),
        lower = lines.lower.trim(),
        horizontal = lines.horizontal.trim(),
    )
}

fn negative_prompt(art_style: &ConfigOption) -> String {
    format!(
        "{}。\n画风混杂，风格不统一，{}。\n{}。\n{}。",
        UNIVERSAL_NEGATIVES,
        art_style.extra(keys::NEGATIVE),
        BODY_NEGATIVES,
        LAYOUT_NEGATIVES
    )
}

fn image_size(layout: &ConfigOption) -> (u32, u32) {
    match (layout.extra_u32(keys::WIDTH), layout.extra_u32(keys::HEIGHT)) {
        (Some(width), Some(height)) => (width, height),
        _ => (DEFAULT_IMAGE_WIDTH, DEFAULT_IMAGE_HEIGHT),
    }
}
