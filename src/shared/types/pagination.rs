use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::pagination::{clamp_page, total_pages, PageItem, WindowPolicy};

use super::DomainError;

/// One page of a list plus the compact window of page buttons around it.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    pub pages: Vec<PageItem>,
}

impl<T> PaginatedResult<T> {
    /// Wrap an already sliced page. `page` is clamped to the computed page count.
    pub fn new(
        items: Vec<T>,
        total: u64,
        page: u32,
        limit: u32,
        max_visible: u32,
        policy: &WindowPolicy,
    ) -> Result<Self, DomainError> {
        let total_pages = total_pages(total, limit);
        let page = clamp_page(page, total_pages);
        let pages = policy.build(page, total_pages, max_visible)?;
        Ok(Self {
            items,
            total,
            page,
            limit,
            total_pages,
            pages,
        })
    }

    /// Slice `all` down to the requested page and wrap it.
    pub fn from_slice(
        all: &[T],
        page: u32,
        limit: u32,
        max_visible: u32,
        policy: &WindowPolicy,
    ) -> Result<Self, DomainError>
    where
        T: Clone,
    {
        if limit == 0 {
            return Err(DomainError::Validation("limit must be at least 1".into()));
        }
        let total = all.len() as u64;
        let page = clamp_page(page, total_pages(total, limit));
        let start = (page as usize - 1).saturating_mul(limit as usize).min(all.len());
        let end = start.saturating_add(limit as usize).min(all.len());
        Self::new(
            all[start..end].to_vec(),
            total,
            page,
            limit,
            max_visible,
            policy,
        )
    }
}
