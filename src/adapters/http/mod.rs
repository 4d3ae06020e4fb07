//! HTTP adapters - Axum routes over the application handlers.

pub mod dashboard;

// Re-export key types for convenience
pub use dashboard::{dashboard_router, dashboard_routes, DashboardAppState, ErrorResponse};
