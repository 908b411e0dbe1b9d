//! Page math shared by list endpoints and the CLI

use crate::config::PaginationConfig;

/// Number of pages needed for `total_items` at `limit` per page.
///
/// An empty list still renders a single page, and a zero limit counts as one.
pub fn total_pages(total_items: u64, limit: u32) -> u32 {
    let limit = u64::from(limit.max(1));
    let pages = total_items.div_ceil(limit).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// Viewport class used to pick how many page slots fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Narrow,
    Wide,
}

impl Viewport {
    pub fn from_width(width_px: u32, config: &PaginationConfig) -> Self {
        if width_px < config.narrow_breakpoint_px {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    pub fn max_visible(self, config: &PaginationConfig) -> u32 {
        match self {
            Self::Narrow => config.max_visible_narrow,
            Self::Wide => config.max_visible_wide,
        }
    }
}

/// Slot count for a viewport width: 5 below the breakpoint, 7 otherwise (by default).
pub fn max_visible_for_width(width_px: u32, config: &PaginationConfig) -> u32 {
    Viewport::from_width(width_px, config).max_visible(config)
}
