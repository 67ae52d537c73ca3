//! Pagination arithmetic shared by listing endpoints.

use serde::Serialize;

/// Page used when the caller omits `page` or passes a non-positive value.
pub const DEFAULT_PAGE: u64 = 1;
/// Page size used when the caller omits `limit` or passes a non-positive value.
pub const DEFAULT_LIMIT: u64 = 10;

/// Normalized page position. `page` and `limit` are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Replaces absent or non-positive values with [`DEFAULT_PAGE`] and [`DEFAULT_LIMIT`].
    pub fn normalize(page: Option<i64>, limit: Option<i64>) -> Self {
        let positive = |value: Option<i64>, default: u64| {
            value
                .and_then(|v| u64::try_from(v).ok())
                .filter(|v| *v > 0)
                .unwrap_or(default)
        };

        Self {
            page: positive(page, DEFAULT_PAGE),
            limit: positive(limit, DEFAULT_LIMIT),
        }
    }

    /// Number of records preceding this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Metadata describing a page relative to the full filtered result set.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PageMeta {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub pages: u64,
}

impl PageMeta {
    pub fn new(total: u64, request: PageRequest) -> Self {
        Self {
            total,
            page: request.page,
            limit: request.limit,
            pages: total.div_ceil(request.limit).max(1),
        }
    }
}

/// A page of items together with its [`PageMeta`].
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            data,
            meta: PageMeta::new(total, request),
        }
    }
}
