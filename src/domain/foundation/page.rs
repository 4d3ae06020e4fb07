//! Page enum representing the five sidebar views.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The five dashboard views, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Overview,
    IndustryTrends,
    AiHealthcareMarket,
    ImpactOfAi,
    AiUseCases,
}

impl Page {
    /// Returns all pages in sidebar order.
    pub fn all() -> &'static [Page] {
        &[
            Page::Overview,
            Page::IndustryTrends,
            Page::AiHealthcareMarket,
            Page::ImpactOfAi,
            Page::AiUseCases,
        ]
    }

    /// Returns the label shown in the sidebar.
    pub fn display_name(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::IndustryTrends => "Industry Trends",
            Page::AiHealthcareMarket => "AI Healthcare Market",
            Page::ImpactOfAi => "Impact of AI",
            Page::AiUseCases => "AI Use Cases",
        }
    }

    /// Returns the URL path segment for this page.
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::IndustryTrends => "industry-trends",
            Page::AiHealthcareMarket => "ai-healthcare-market",
            Page::ImpactOfAi => "impact-of-ai",
            Page::AiUseCases => "ai-use-cases",
        }
    }

    /// Returns the canonical path of the rendered page.
    pub fn path(&self) -> String {
        format!("/pages/{}", self.slug())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Page {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::all()
            .iter()
            .copied()
            .find(|p| p.slug() == s)
            .ok_or_else(|| ValidationError::invalid_format("page", format!("unknown page '{}'", s)))
    }
}
