//! Query-string pagination extractor.

use serde::Deserialize;

use sangam_core::types::pagination::PageRequest;

/// Pagination query parameters, e.g. `?page=2&per_page=50`.
///
/// Used with `Query<PaginationParams>`; values are clamped when
/// converted into a [`PageRequest`].
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

impl PaginationParams {
    /// Converts into the domain page request, clamping out-of-range
    /// values.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    25
}
