//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the dashboard domain.

mod errors;
mod growth_rate;
mod page;

pub use errors::ValidationError;
pub use growth_rate::GrowthRate;
pub use page::Page;
