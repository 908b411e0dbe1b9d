//! Pagination aggregate
//!
//! Compact window builder, page math, and viewport-driven slot counts.

pub mod model;
pub mod page;
pub mod window;

pub use model::{render_text, PageItem, WindowPolicy, GAP_GLYPH};
pub use page::{clamp_page, max_visible_for_width, total_pages, Viewport};
pub use window::build_compact_pagination;
