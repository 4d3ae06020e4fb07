//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod dashboard;

pub use dashboard::{
    GetTrendPointsHandler, ListPagesHandler, PageError, PageSummary, RenderPageHandler,
    RenderPageQuery,
};
