//! Dashboard query handlers.
//!
//! Read-only handlers that assemble page views from datasets and catalog
//! figures.

mod get_trend_points;
mod list_pages;
mod render_page;

pub use get_trend_points::GetTrendPointsHandler;
pub use list_pages::{ListPagesHandler, PageSummary};
pub use render_page::{PageError, RenderPageHandler, RenderPageQuery};
