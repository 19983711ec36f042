use std::collections::BTreeMap;

use serde::Serialize;

use crate::options::tables;

/// Well-known keys stored in [`ConfigOption::extra`].
pub mod keys {
    pub const TECHNIQUE: &str = "technique";
    pub const STYLE: &str = "style";
    pub const QUALITY: &str = "quality";
    pub const VISUAL_FEATURES: &str = "visualFeatures";
    pub const EXAMPLES: &str = "examples";
    pub const NEGATIVE: &str = "negative";
    pub const TAGS: &str = "tags";
    pub const COMPOSITION: &str = "composition";
    pub const RATIO: &str = "ratio";
    pub const ARRANGEMENT: &str = "arrangement";
    pub const ASPECT_RATIO: &str = "aspectRatio";
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const PALETTE: &str = "palette";
    pub const MOOD: &str = "mood";
    pub const HARMONY: &str = "harmony";
    pub const COLORS: &str = "colors";
    pub const PROMPT: &str = "prompt";
    pub const ELEMENTS: &str = "elements";
    pub const SCENE: &str = "scene";
    pub const ORNAMENTS: &str = "ornaments";
    pub const COLOR: &str = "color";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    ArtStyle,
    Layout,
    ColorScheme,
    Decoration,
    Background,
    Zodiac,
    Style,
    Theme,
    Tone,
}

impl Dimension {
    pub const ALL: [Dimension; 9] = [
        Dimension::ArtStyle,
        Dimension::Layout,
        Dimension::ColorScheme,
        Dimension::Decoration,
        Dimension::Background,
        Dimension::Zodiac,
        Dimension::Style,
        Dimension::Theme,
        Dimension::Tone,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::ArtStyle => "artStyle",
            Dimension::Layout => "layout",
            Dimension::ColorScheme => "colorScheme",
            Dimension::Decoration => "decoration",
            Dimension::Background => "background",
            Dimension::Zodiac => "zodiac",
            Dimension::Style => "style",
            Dimension::Theme => "theme",
            Dimension::Tone => "tone",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigOption {
    pub value: String,
    pub label: String,
    pub description: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl ConfigOption {
    pub fn new(value: &str, label: &str, description: &str) -> Self {
        ConfigOption {
            value: value.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }

    /// Returns the extra attribute or an empty string when it is not defined.
    pub fn extra(&self, key: &str) -> &str {
        self.extra.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn extra_u32(&self, key: &str) -> Option<u32> {
        self.extra.get(key).and_then(|value| value.parse::<u32>().ok())
    }
}

#[derive(Debug, Clone)]
pub struct OptionTable {
    dimension: Dimension,
    entries: Vec<ConfigOption>,
    fallback: ConfigOption,
    fallback_is_entry: bool,
}

impl OptionTable {
    /// Builds a table whose fallback is one of its own entries.
    pub fn with_default(dimension: Dimension, entries: Vec<ConfigOption>, default_value: &str) -> Self {
        let fallback = entries
            .iter()
            .find(|entry| entry.value == default_value)
            .or_else(|| entries.first())
            .cloned()
            .unwrap_or_else(|| ConfigOption::new(default_value, default_value, ""));
        OptionTable {
            dimension,
            entries,
            fallback,
            fallback_is_entry: true,
        }
    }

    /// Builds an open-ended table whose fallback is a generic entry that is not
    /// listed among the selectable values.
    pub fn with_generic(dimension: Dimension, entries: Vec<ConfigOption>, generic: ConfigOption) -> Self {
        OptionTable {
            dimension,
            entries,
            fallback: generic,
            fallback_is_entry: false,
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn entries(&self) -> &[ConfigOption] {
        &self.entries
    }

    pub fn fallback(&self) -> &ConfigOption {
        &self.fallback
    }

    pub fn has_default_entry(&self) -> bool {
        self.fallback_is_entry
    }

    pub fn get(&self, value: &str) -> Option<&ConfigOption> {
        let value = value.trim();
        self.entries.iter().find(|entry| entry.value == value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.get(value).is_some()
    }

    /// Never fails: unknown values resolve to the table's fallback entry.
    pub fn lookup(&self, value: &str) -> &ConfigOption {
        self.get(value).unwrap_or(&self.fallback)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetSelection {
    pub art_style: String,
    pub layout: String,
    pub color_scheme: String,
    pub decoration: String,
    pub background: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPreset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub config: PresetSelection,
    pub tags: Vec<String>,
    pub is_default: bool,
}

/// Immutable option tables shared by the prompt compiler and the HTTP layer.
#[derive(Debug, Clone)]
pub struct OptionRegistry {
    art_styles: OptionTable,
    layouts: OptionTable,
    color_schemes: OptionTable,
    decorations: OptionTable,
    backgrounds: OptionTable,
    zodiacs: OptionTable,
    styles: OptionTable,
    themes: OptionTable,
    tones: OptionTable,
    presets: Vec<ConfigPreset>,
}

impl OptionRegistry {
    pub fn builtin() -> Self {
        OptionRegistry {
            art_styles: tables::art_styles(),
            layouts: tables::layouts(),
            color_schemes: tables::color_schemes(),
            decorations: tables::decorations(),
            backgrounds: tables::backgrounds(),
            zodiacs: tables::zodiacs(),
            styles: tables::styles(),
            themes: tables::themes(),
            tones: tables::tones(),
            presets: tables::presets(),
        }
    }

    pub fn table(&self, dimension: Dimension) -> &OptionTable {
        match dimension {
            Dimension::ArtStyle => &self.art_styles,
            Dimension::Layout => &self.layouts,
            Dimension::ColorScheme => &self.color_schemes,
            Dimension::Decoration => &self.decorations,
            Dimension::Background => &self.backgrounds,
            Dimension::Zodiac => &self.zodiacs,
            Dimension::Style => &self.styles,
            Dimension::Theme => &self.themes,
            Dimension::Tone => &self.tones,
        }
    }

    pub fn lookup(&self, dimension: Dimension, value: &str) -> &ConfigOption {
        self.table(dimension).lookup(value)
    }

    /// Human label for a value, or the value itself when it is not listed.
    pub fn label(&self, dimension: Dimension, value: &str) -> String {
        self.table(dimension)
            .get(value)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| value.to_string())
    }

    pub fn presets(&self) -> &[ConfigPreset] {
        &self.presets
    }

    pub fn default_preset(&self) -> Option<&ConfigPreset> {
        self.presets
            .iter()
            .find(|preset| preset.is_default)
            .or_else(|| self.presets.first())
    }
}
