use std::future::Future;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum PageError {
    #[error("Page size must be greater than zero")]
    ZeroLimit,
}

/// Offset and size of a requested page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPageRequest")]
pub struct PageRequest {
    offset: u64,
    limit: u64,
}

/// Unchecked wire form, validated through `PageRequest::new`
#[derive(Deserialize)]
struct RawPageRequest {
    offset: u64,
    limit: u64,
}

impl TryFrom<RawPageRequest> for PageRequest {
    type Error = PageError;

    fn try_from(raw: RawPageRequest) -> Result<Self, Self::Error> {
        Self::new(raw.offset, raw.limit)
    }
}

impl PageRequest {
    pub fn new(offset: u64, limit: u64) -> Result<Self, PageError> {
        if limit == 0 {
            return Err(PageError::ZeroLimit);
        }
        Ok(Self { offset, limit })
    }

    /// Request the zero based page `page` of `size` rows
    pub fn of(page: u64, size: u64) -> Result<Self, PageError> {
        Self::new(page.saturating_mul(size), size)
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub offset: u64,
    pub limit: u64,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            content,
            offset: request.offset,
            limit: request.limit,
            total,
        }
    }

    /// Requested page size
    pub fn size(&self) -> u64 {
        self.limit
    }

    /// Zero based page number
    pub fn number(&self) -> u64 {
        self.offset.checked_div(self.limit).unwrap_or(0)
    }

    /// Number of pages, zero for a page without a size
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit)
    }

    pub fn has_next(&self) -> bool {
        self.number() + 1 < self.total_pages()
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            offset: self.offset,
            limit: self.limit,
            total: self.total,
        }
    }
}

/// Total which follows from the fetched content alone, if any.
///
/// A short first page holds the whole result. A short, non empty page
/// further back is the last one, so everything before it was full.
/// In every other case the rows beyond the window are unknown.
pub fn inferred_total(request: PageRequest, fetched: usize) -> Option<u64> {
    let fetched = fetched as u64;
    if fetched >= request.limit {
        return None;
    }
    if request.offset == 0 {
        return Some(fetched);
    }
    if fetched > 0 {
        return Some(request.offset + fetched);
    }
    None
}

/// Assemble a page, calling `count` only when the
/// total can not be inferred from the content.
pub async fn page_from<T, F, Fut>(content: Vec<T>, request: PageRequest, count: F) -> Result<Page<T>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<u64>>,
{
    let total = match inferred_total(request, content.len()) {
        Some(total) => {
            tracing::debug!(total, offset = request.offset, "count query elided");
            total
        }
        None => count().await?,
    };
    Ok(Page::new(content, request, total))
}
