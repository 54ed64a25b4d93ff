//! Pagination utilities for service layer
//!
//! Offset pagination with a 0-based page index.

use crate::errors::ServiceError;

pub const DEFAULT_PAGE_SIZE: u64 = 3;
/// Largest page size or row offset a SQL `LIMIT`/`OFFSET` can carry.
pub const MAX_ROW_BOUND: u64 = i64::MAX as u64;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 0-based page index
    pub page: u64,
    /// items per page
    pub per_page: u64,
}

impl Pagination {
    pub fn new(page: u64, per_page: u64) -> Self { Self { page, per_page } }

    /// A zero page size is treated as one; larger sizes are honoured as requested.
    pub fn normalize(self) -> (u64, u64) {
        (self.page, self.per_page.max(1))
    }

    /// Row offset of the first item on the page
    pub fn offset(self) -> u64 {
        let (page, per_page) = self.normalize();
        page.saturating_mul(per_page)
    }

    /// Reject pages whose size or offset cannot be expressed to the store.
    pub fn validate(self) -> Result<Self, ServiceError> {
        let (page, per_page) = self.normalize();
        match page.checked_mul(per_page) {
            Some(offset) if per_page <= MAX_ROW_BOUND && offset <= MAX_ROW_BOUND => Ok(self),
            _ => Err(ServiceError::Validation(format!("page {page} of size {per_page} is out of range"))),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 0, per_page: DEFAULT_PAGE_SIZE } }
}
