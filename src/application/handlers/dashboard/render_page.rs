//! RenderPageHandler - Query handler that assembles one dashboard page.
//!
//! Loads whatever datasets the selected page needs and hands them to the
//! page builder. Pages built only from hardcoded figures never touch the
//! dataset reader.

use std::sync::Arc;

use crate::domain::dashboard::{
    ai_market, impact, industry_trends, overview, use_cases, PageView, Toggles, ViewError,
};
use crate::domain::foundation::Page;
use crate::ports::{AssetProbe, DatasetError, DatasetReader};

/// Query to render a single page.
#[derive(Debug, Clone, Default)]
pub struct RenderPageQuery {
    pub page: Page,
    /// Year selected on the Industry Trends page.
    pub year: Option<i32>,
    pub toggles: Toggles,
}

/// Errors that can occur while rendering a page.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    View(#[from] ViewError),
}

/// Handler for rendering a page view.
#[derive(Clone)]
pub struct RenderPageHandler {
    reader: Arc<dyn DatasetReader>,
    assets: Arc<dyn AssetProbe>,
    top_growth_limit: usize,
}

impl RenderPageHandler {
    pub fn new(
        reader: Arc<dyn DatasetReader>,
        assets: Arc<dyn AssetProbe>,
        top_growth_limit: usize,
    ) -> Self {
        Self {
            reader,
            assets,
            top_growth_limit,
        }
    }

    pub async fn handle(&self, query: RenderPageQuery) -> Result<PageView, PageError> {
        tracing::debug!(page = %query.page, year = ?query.year, "Rendering page");

        let view = match query.page {
            Page::Overview => overview::build(),
            Page::IndustryTrends => {
                let trends = self.reader.trends().await?;
                industry_trends::build(&trends, query.year)?
            }
            Page::AiHealthcareMarket => {
                let investment = self.reader.investment().await?;
                let raw = self.reader.raw_investment().await?;
                ai_market::build(&investment, &raw, query.toggles, self.top_growth_limit)?
            }
            Page::ImpactOfAi => impact::build(query.toggles),
            Page::AiUseCases => {
                let how_it_works = self.assets.exists(use_cases::HOW_IT_WORKS_IMAGE).await;
                let sample_output = self.assets.exists(use_cases::SAMPLE_OUTPUT_IMAGE).await;
                if !(how_it_works && sample_output) {
                    tracing::warn!(
                        how_it_works,
                        sample_output,
                        "Showcase images missing; rendering placeholders"
                    );
                }
                use_cases::build(|name| match name {
                    use_cases::HOW_IT_WORKS_IMAGE => how_it_works,
                    use_cases::SAMPLE_OUTPUT_IMAGE => sample_output,
                    _ => false,
                })
            }
        };

        Ok(view)
    }
}
