//! Dashboard HTTP adapter module.
//!
//! Serves the rendered pages, their JSON view models, and image assets.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, HealthResponse, PageParams};
pub use handlers::{DashboardApiError, DashboardAppState};
pub use routes::{dashboard_router, dashboard_routes};
