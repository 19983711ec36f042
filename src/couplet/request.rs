use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const ACROSTIC_MIN_CHARS: usize = 2;
pub const ACROSTIC_MAX_CHARS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WordCount {
    #[serde(rename = "五言")]
    Five,
    #[serde(rename = "七言")]
    Seven,
    #[serde(rename = "九言")]
    Nine,
}

impl WordCount {
    pub const ALL: [WordCount; 3] = [WordCount::Five, WordCount::Seven, WordCount::Nine];

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "五言" => Some(WordCount::Five),
            "七言" => Some(WordCount::Seven),
            "九言" => Some(WordCount::Nine),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WordCount::Five => "五言",
            WordCount::Seven => "七言",
            WordCount::Nine => "九言",
        }
    }

    pub fn chars_per_line(self) -> usize {
        match self {
            WordCount::Five => 5,
            WordCount::Seven => 7,
            WordCount::Nine => 9,
        }
    }
}

/// Body of `POST /couplet/generate` as sent by clients. Fields stay optional
/// here so that every missing one can be reported at once.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoupletRequest {
    #[serde(default)]
    pub zodiac: Option<String>,
    #[serde(default)]
    pub word_count: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub atmosphere: Option<String>,
    #[serde(default)]
    pub is_acrostic: Option<bool>,
    #[serde(default)]
    pub acrostic_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoupletBrief {
    pub zodiac: String,
    pub word_count: WordCount,
    pub style: String,
    pub theme: String,
    pub atmosphere: String,
    pub acrostic: Option<Vec<char>>,
}

fn required(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

impl CoupletRequest {
    pub fn validate(&self) -> Result<CoupletBrief, AppError> {
        let fields = [
            ("zodiac", required(&self.zodiac)),
            ("wordCount", required(&self.word_count)),
            ("style", required(&self.style)),
            ("theme", required(&self.theme)),
            ("atmosphere", required(&self.atmosphere)),
        ];
        let missing: Vec<String> = fields
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(AppError::missing_fields(missing));
        }
        let [zodiac, word_count, style, theme, atmosphere] = fields.map(|(_, value)| value.unwrap_or_default());

        let word_count = WordCount::from_label(&word_count).ok_or_else(|| {
            let allowed: Vec<&str> = WordCount::ALL.iter().map(|count| count.label()).collect();
            AppError::validation(format!("wordCount must be one of: {}", allowed.join(", ")))
        })?;

        let acrostic = if self.is_acrostic.unwrap_or(false) {
            let text = self.acrostic_text.as_deref().unwrap_or("").trim();
            let chars: Vec<char> = text.chars().collect();
            if chars.len() < ACROSTIC_MIN_CHARS {
                return Err(AppError::validation(format!(
                    "acrosticText requires at least {} characters",
                    ACROSTIC_MIN_CHARS
                )));
            }
            if chars.len() > ACROSTIC_MAX_CHARS {
                return Err(AppError::validation(format!(
                    "acrosticText supports at most {} characters",
                    ACROSTIC_MAX_CHARS
                )));
            }
            Some(chars)
        } else {
            None
        };

        Ok(CoupletBrief {
            zodiac,
            word_count,
            style,
            theme,
            atmosphere,
            acrostic,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CoupletRequest {
        CoupletRequest {
            zodiac: Some("🐍 蛇年".into()),
            word_count: Some("七言".into()),
            style: Some("传统典雅".into()),
            theme: Some("万事如意".into()),
            atmosphere: Some("活泼".into()),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_complete_request() {
        let brief = request().validate().unwrap();
        assert_eq!(brief.word_count, WordCount::Seven);
        assert_eq!(brief.word_count.chars_per_line(), 7);
        assert!(brief.acrostic.is_none());
    }

    #[test]
    fn lists_every_missing_field() {
        let req = CoupletRequest {
            theme: Some("  ".into()),
            atmosphere: None,
            ..request()
        };
        match req.validate() {
            Err(AppError::Validation { fields, .. }) => {
                assert_eq!(fields, vec!["theme", "atmosphere"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_word_count() {
        let req = CoupletRequest {
            word_count: Some("八言".into()),
            ..request()
        };
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("五言, 七言, 九言"));
    }

    #[test]
    fn acrostic_length_is_counted_in_characters() {
        let short = CoupletRequest {
            is_acrostic: Some(true),
            acrostic_text: Some("新".into()),
            ..request()
        };
        let err = short.validate().unwrap_err();
        assert!(err.to_string().contains("at least 2"));

        let long = CoupletRequest {
            is_acrostic: Some(true),
            acrostic_text: Some("新春快乐啊".into()),
            ..request()
        };
        assert!(long.validate().unwrap_err().to_string().contains("at most 4"));

        let ok = CoupletRequest {
            is_acrostic: Some(true),
            acrostic_text: Some("新春".into()),
            ..request()
        };
        assert_eq!(ok.validate().unwrap().acrostic, Some(vec!['新', '春']));
    }

    #[test]
    fn acrostic_text_is_ignored_when_disabled() {
        let req = CoupletRequest {
            is_acrostic: Some(false),
            acrostic_text: Some("新".into()),
            ..request()
        };
        assert!(req.validate().unwrap().acrostic.is_none());
    }
}
