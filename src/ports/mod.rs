//! Ports - Interfaces the application layer depends on.
//!
//! Adapters provide the implementations: CSV files on disk for datasets,
//! the filesystem for image assets.

mod asset_probe;
mod dataset_reader;

pub use asset_probe::AssetProbe;
pub use dataset_reader::{DatasetError, DatasetReader};
