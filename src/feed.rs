// Shared feed pagination DTOs and page math
// Both the tweet and transaction feeds page the same way: zero-based page
// index, newest first, totals included in every response.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE: u32 = 0;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Query parameters for feed endpoints
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeedQuery {
    /// Zero-based page index, defaults to 0
    pub page: Option<u32>,
    /// Page size, defaults to 10
    pub size: Option<u32>,
}

impl FeedQuery {
    pub fn page_index(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    /// Page size, clamped to at least one row
    pub fn page_size(&self) -> u32 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }
}

/// One feed entry
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FeedItem {
    pub id: i64,
    pub content: String,
    pub username: String,
}

/// One page of feed items with pagination totals
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    pub feed_items: Vec<FeedItem>,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: i64,
    pub total_elements: i64,
}

impl Feed {
    /// Assemble a page, deriving the page count from the element total
    pub fn new(feed_items: Vec<FeedItem>, page: u32, page_size: u32, total_elements: i64) -> Self {
        Self {
            feed_items,
            page,
            page_size,
            total_pages: total_pages(total_elements, page_size),
            total_elements,
        }
    }
}

/// Page count as ceil(total / size); an empty store has zero pages
pub fn total_pages(total_elements: i64, page_size: u32) -> i64 {
    if page_size == 0 {
        return 0;
    }
    let size = i64::from(page_size);
    (total_elements + size - 1) / size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn total_pages_with_degenerate_size() {
        assert_eq!(total_pages(5, 0), 0);
        assert_eq!(total_pages(5, 1), 5);
    }

    #[test]
    fn query_defaults_apply_when_params_absent() {
        let query = FeedQuery {
            page: None,
            size: None,
        };
        assert_eq!(query.page_index(), 0);
        assert_eq!(query.page_size(), 10);
    }

    #[test]
    fn zero_size_is_clamped_to_one() {
        let query = FeedQuery {
            page: Some(3),
            size: Some(0),
        };
        assert_eq!(query.page_index(), 3);
        assert_eq!(query.page_size(), 1);
    }

    #[test]
    fn feed_serializes_with_camel_case_field_names() {
        let feed = Feed::new(
            vec![FeedItem {
                id: 1,
                content: "hi".to_string(),
                username: "alice".to_string(),
            }],
            0,
            10,
            1,
        );
        let json = serde_json::to_value(&feed).unwrap();
        assert_eq!(json["feedItems"][0]["username"], "alice");
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["totalElements"], 1);
    }
}
