//! Data source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Locations of the CSV datasets and image assets.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory holding the CSV files
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Wide table of market size per technology trend and year
    #[serde(default = "default_trends_file")]
    pub trends_file: String,

    /// Annual private AI investment per region
    #[serde(default = "default_investment_file")]
    pub investment_file: String,

    /// Directory served under `/assets/images`
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
}

impl DataConfig {
    pub fn trends_path(&self) -> PathBuf {
        self.dir.join(&self.trends_file)
    }

    pub fn investment_path(&self) -> PathBuf {
        self.dir.join(&self.investment_file)
    }

    /// Image directory; relative paths resolve under `dir`.
    pub fn images_path(&self) -> PathBuf {
        self.dir.join(&self.images_dir)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.trends_file.trim().is_empty() {
            return Err(ValidationError::MissingRequired("data.trends_file"));
        }
        if self.investment_file.trim().is_empty() {
            return Err(ValidationError::MissingRequired("data.investment_file"));
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            trends_file: default_trends_file(),
            investment_file: default_investment_file(),
            images_dir: default_images_dir(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_trends_file() -> String {
    "trends.csv".to_string()
}

fn default_investment_file() -> String {
    "ai_healthcare_investment.csv".to_string()
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("images")
}
