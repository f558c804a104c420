//! Pagination types shared by the list operations.

use serde::{Deserialize, Serialize};

use crate::error::{HrError, HrResult};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Which slice of a list to return; pages start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Builds a request from optional query values, applying defaults.
    pub fn new(page: Option<u32>, limit: Option<u32>) -> HrResult<Self> {
        let request = Self {
            page: page.unwrap_or(1),
            limit: limit.unwrap_or(DEFAULT_PAGE_SIZE),
        };
        if request.page == 0 {
            return Err(HrError::validation("page", "must be at least 1"));
        }
        if request.limit == 0 || request.limit > MAX_PAGE_SIZE {
            return Err(HrError::validation(
                "limit",
                format!("must be between 1 and {}", MAX_PAGE_SIZE),
            ));
        }
        Ok(request)
    }

    /// Number of rows skipped before this page.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.limit as usize
    }

    /// Cuts this page out of an already filtered and ordered list.
    pub fn slice<T>(&self, rows: Vec<T>) -> Page<T> {
        let total = rows.len() as u64;
        let data = rows
            .into_iter()
            .skip(self.offset())
            .take(self.limit as usize)
            .collect();
        Page {
            data,
            pagination: Pagination {
                total,
                page: self.page,
                limit: self.limit,
                total_pages: total.div_ceil(self.limit as u64),
            },
        }
    }
}

/// Position of a page within the full list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

/// One page of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}
