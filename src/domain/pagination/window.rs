//! Compact pagination window builder
//!
//! Turns `(current_page, total_pages, max_visible)` into the ordered list of
//! page buttons and gap markers a paginated view renders. The list stays
//! bounded in width no matter how many pages exist.

use std::collections::BTreeSet;

use crate::shared::types::DomainError;

use super::model::{PageItem, WindowPolicy};

/// Build the compact window with the default edge policy.
///
/// Returns every page when `total_pages <= max_visible`. Otherwise returns
/// the first and last pages, the neighbours of `current_page`, and (near
/// either end) a widened contiguous band, separated by gap markers.
pub fn build_compact_pagination(
    current_page: u32,
    total_pages: u32,
    max_visible: u32,
) -> Result<Vec<PageItem>, DomainError> {
    WindowPolicy::default().build(current_page, total_pages, max_visible)
}

impl WindowPolicy {
    /// Build the compact window using this policy's edge constants.
    ///
    /// `current_page` is clamped into `[1, total_pages]` before framing.
    pub fn build(
        &self,
        current_page: u32,
        total_pages: u32,
        max_visible: u32,
    ) -> Result<Vec<PageItem>, DomainError> {
        if total_pages < 1 {
            return Err(DomainError::InvalidTotalPages(total_pages));
        }
        if max_visible < 1 {
            return Err(DomainError::InvalidMaxVisible(max_visible));
        }

        if total_pages <= max_visible {
            return Ok((1..=total_pages).map(PageItem::page).collect());
        }

        let current = current_page.clamp(1, total_pages);
        let candidates = self.candidates(current, total_pages);

        let mut items = Vec::with_capacity(candidates.len() * 2);
        let mut previous: Option<u32> = None;
        for page in candidates {
            if let Some(prev) = previous {
                if page - prev > 1 {
                    items.push(PageItem::Gap);
                }
            }
            items.push(PageItem::page(page));
            previous = Some(page);
        }

        Ok(items)
    }

    /// Sorted, deduplicated pages to show. All values lie in `[1, total]`.
    fn candidates(&self, current: u32, total: u32) -> BTreeSet<u32> {
        let mut set = BTreeSet::new();
        let mut add = |page: i64| {
            if page >= 1 && page <= i64::from(total) {
                set.insert(page as u32);
            }
        };

        let current = i64::from(current);
        let last = i64::from(total);
        let threshold = i64::from(self.edge_threshold);
        let fill = i64::from(self.edge_fill);

        for page in [1, last, current - 1, current, current + 1] {
            add(page);
        }

        // fill never reaches past the far end, whatever the policy says
        if current <= threshold {
            (2..=(1 + fill).min(last)).for_each(&mut add);
        }
        if current >= last - (threshold - 1) {
            (1..=fill.min(last - 1)).for_each(|offset| add(last - offset));
        }

        set
    }
}
