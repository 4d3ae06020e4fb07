//! Domain layer containing the dashboard's data and view types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (pages, growth rates, errors)
//! - `datasets` - Tables loaded from the CSV files
//! - `catalog` - Hardcoded research figures
//! - `analysis` - Reshapes and orderings applied before charting
//! - `dashboard` - Page view models and builders

pub mod analysis;
pub mod catalog;
pub mod dashboard;
pub mod datasets;
pub mod foundation;
