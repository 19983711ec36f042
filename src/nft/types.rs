use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const MAX_PAGE_SIZE: u32 = 100;

/// One minted couplet as read from the contract. The cache stores records with
/// `liked_by_current_user` cleared; the flag is filled per viewer on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftRecord {
    pub token_id: String,
    pub owner: String,
    pub upper_line: String,
    pub lower_line: String,
    pub horizontal_scroll: String,
    pub image_url: String,
    pub mint_timestamp: u64,
    pub like_count: u64,
    #[serde(default)]
    pub liked_by_current_user: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    Newest,
    Oldest,
    MostLiked,
}

impl SortBy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "newest" => Some(SortBy::Newest),
            "oldest" => Some(SortBy::Oldest),
            "mostLiked" | "most-liked" | "most_liked" => Some(SortBy::MostLiked),
            _ => None,
        }
    }
}

/// Page request after normalisation: `page` is 1-based and `page_size` is
/// within `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    pub page: u32,
    pub page_size: u32,
    pub sort_by: Option<SortBy>,
    pub owner: Option<String>,
    pub viewer: Option<String>,
}

impl Default for PageParams {
    fn default() -> Self {
        PageParams {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: None,
            owner: None,
            viewer: None,
        }
    }
}

impl PageParams {
    pub fn new(page: Option<u32>, page_size: Option<u32>) -> Self {
        PageParams {
            page: page.unwrap_or(1).max(1),
            page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
            ..Default::default()
        }
    }

    pub fn next_page(&self) -> Self {
        PageParams {
            page: self.page.saturating_add(1),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    pub fn new(page: u32, page_size: u32, total: u64) -> Self {
        let total_pages = total.div_ceil(u64::from(page_size.max(1)));
        Pagination {
            page,
            page_size,
            total,
            total_pages,
            has_next: u64::from(page) < total_pages,
            has_prev: page > 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NftPage {
    pub data: Vec<NftRecord>,
    pub pagination: Pagination,
    /// Token ids that could not be resolved for this page.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchResult {
    pub success: Vec<NftRecord>,
    pub failed: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationReceipt {
    pub token_id: String,
    pub transaction_hash: String,
}

/// Body of a mint. Only the three lines and `image_url` are written on chain;
/// the rest records how the couplet was produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintRequest {
    pub upper_line: Option<String>,
    pub lower_line: Option<String>,
    pub horizontal_scroll: Option<String>,
    pub zodiac: Option<String>,
    pub word_count: Option<u8>,
    pub style: Option<String>,
    pub theme: Option<String>,
    pub mood: Option<String>,
    pub hidden_name: Option<String>,
    pub explanation: Option<String>,
    pub image_url: Option<String>,
    pub art_style: Option<String>,
    pub layout: Option<String>,
    pub color_scheme: Option<String>,
    pub decoration_style: Option<String>,
    pub background_style: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintReceipt {
    pub transaction_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_math() {
        let p = Pagination::new(1, 12, 25);
        assert_eq!(p.total_pages, 3);
        assert!(p.has_next);
        assert!(!p.has_prev);

        let p = Pagination::new(3, 12, 25);
        assert!(!p.has_next);
        assert!(p.has_prev);

        let p = Pagination::new(1, 12, 0);
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_next);
    }

    #[test]
    fn page_params_are_clamped() {
        let params = PageParams::new(Some(0), Some(1000));
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, MAX_PAGE_SIZE);
        assert_eq!(PageParams::new(None, Some(0)).page_size, 1);
        assert_eq!(PageParams::new(Some(2), None).next_page().page, 3);
    }

    #[test]
    fn sort_names_match_query_values() {
        assert_eq!(SortBy::parse("mostLiked"), Some(SortBy::MostLiked));
        assert_eq!(SortBy::parse("oldest"), Some(SortBy::Oldest));
        assert_eq!(SortBy::parse("random"), None);
    }
}
