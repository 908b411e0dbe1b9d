//! Pagination window types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Glyph used when a gap marker is rendered as text.
pub const GAP_GLYPH: &str = "…";

/// One slot of a rendered pagination bar.
///
/// Serialized as `{"kind": "page", "page": 3}` or `{"kind": "gap"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageItem {
    /// A navigable, 1-based page index
    Page {
        page: u32,
    },
    /// Non-navigable placeholder for an elided run of pages
    Gap,
}

impl PageItem {
    pub fn page(page: u32) -> Self {
        Self::Page { page }
    }

    /// Page index, `None` for a gap marker.
    pub fn as_page(&self) -> Option<u32> {
        match self {
            Self::Page { page } => Some(*page),
            Self::Gap => None,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, Self::Gap)
    }
}

impl std::fmt::Display for PageItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page { page } => write!(f, "{}", page),
            Self::Gap => f.write_str(GAP_GLYPH),
        }
    }
}

/// Tuning constants for the near-edge widening rule.
///
/// When the current page sits within `edge_threshold` pages of either end,
/// `edge_fill` extra pages next to that end are added to the window so the
/// contiguous band does not shrink as the user approaches the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPolicy {
    pub edge_threshold: u32,
    pub edge_fill: u32,
}

impl WindowPolicy {
    pub const fn new(edge_threshold: u32, edge_fill: u32) -> Self {
        Self {
            edge_threshold,
            edge_fill,
        }
    }
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self::new(3, 3)
    }
}

/// Render a window as plain text, bracketing the current page.
///
/// `[1, Gap, 9, 10, 11, Gap, 20]` at page 10 becomes `1 … 9 [10] 11 … 20`.
pub fn render_text(items: &[PageItem], current_page: u32) -> String {
    items
        .iter()
        .map(|item| match item.as_page() {
            Some(page) if page == current_page => format!("[{}]", page),
            _ => item.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
