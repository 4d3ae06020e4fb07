//! Dashboard presentation settings

use serde::Deserialize;

use super::error::ValidationError;

/// Page chrome and highlight settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Browser tab and heading title
    #[serde(default = "default_title")]
    pub title: String,

    /// Emoji shown next to the title
    #[serde(default = "default_icon")]
    pub icon: String,

    /// Number of countries in the top growth markets table
    #[serde(default = "default_top_growth_limit")]
    pub top_growth_limit: usize,
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=20).contains(&self.top_growth_limit) {
            return Err(ValidationError::InvalidTopGrowthLimit(
                self.top_growth_limit,
            ));
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            icon: default_icon(),
            top_growth_limit: default_top_growth_limit(),
        }
    }
}

fn default_title() -> String {
    "Artificial Intelligence in Healthcare".to_string()
}

fn default_icon() -> String {
    "🏥".to_string()
}

fn default_top_growth_limit() -> usize {
    5
}
