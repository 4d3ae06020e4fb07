//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to the outside world:
//! - `csv` - dataset files on disk, with a process-wide cache
//! - `assets` - image lookup on the filesystem
//! - `render` - HTML documents and inline SVG charts
//! - `http` - Axum routes

pub mod assets;
pub mod csv;
pub mod http;
pub mod render;

pub use assets::FsAssetProbe;
pub use csv::{CachedDatasetReader, CsvDatasetReader, WarmSummary};
pub use http::{dashboard_router, DashboardAppState};
