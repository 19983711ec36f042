//! Maps the coarse four-option style/tone pickers of the first UI onto the
//! finer art-style and color-scheme tables.

use crate::options::tables::{DEFAULT_ART_STYLE, DEFAULT_COLOR_SCHEME};

pub fn map_legacy_style(style: &str) -> &'static str {
    match style.trim() {
        "传统典雅" => "traditional-gongbi",
        "现代简约" => "minimalist",
        "幽默搞笑" => "cartoon-style",
        "文艺清新" => "traditional-ink",
        _ => DEFAULT_ART_STYLE,
    }
}

pub fn map_legacy_tone(tone: &str) -> &'static str {
    match tone.trim() {
        "庄重" => "elegant-dark",
        "活泼" => "vibrant",
        "温馨" => "warm-tone",
        "霸气" => "classic-red-gold",
        _ => DEFAULT_COLOR_SCHEME,
    }
}
