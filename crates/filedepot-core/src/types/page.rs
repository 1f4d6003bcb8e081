//! Pagination types for listing operations.

use serde::{Deserialize, Serialize};

/// Fixed number of records per listing page.
pub const PAGE_SIZE: u64 = 20;

/// Request parameters for paginated listings.
///
/// Page numbering starts at 0. Out-of-range pages are not an error;
/// they simply produce an empty result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (0-based).
    #[serde(default)]
    pub page: u64,
}

impl PageRequest {
    /// Create a request for the given page.
    pub fn new(page: u64) -> Self {
        Self { page }
    }

    /// Number of records to skip before this page.
    ///
    /// Saturates instead of overflowing, so an absurd page number still
    /// produces an empty result rather than a panic.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(PAGE_SIZE)
    }

    /// Number of records on a full page.
    pub fn limit(&self) -> u64 {
        PAGE_SIZE
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0 }
    }
}
