//! Hardcoded market research figures shown alongside the CSV data.
//!
//! Values are reproduced verbatim from the published research; nothing
//! here is computed.

mod capability;
mod market;

pub use capability::{capability_matrix, use_case_shares, CapabilityMatrix, UseCaseShare};
pub use market::{
    cagr_by_segment, country_forecasts, global_market_size, key_metrics, CagrEntry,
    CountryForecast, DeltaDirection, KeyMetric, MarketSizeSeries,
};
