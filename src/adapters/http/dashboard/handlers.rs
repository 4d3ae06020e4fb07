//! HTTP handlers for dashboard endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.
//! Page routes answer with HTML, `/api` routes with JSON.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde_json::json;

use crate::adapters::render::{render_error, render_page, Chrome};
use crate::application::{
    GetTrendPointsHandler, ListPagesHandler, PageError, PageSummary, RenderPageHandler,
    RenderPageQuery,
};
use crate::domain::dashboard::{PageView, ViewError};
use crate::domain::datasets::TrendPoint;
use crate::domain::foundation::Page;
use crate::ports::{AssetProbe, DatasetError, DatasetReader};

use super::dto::{ErrorResponse, HealthResponse, PageParams};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Dashboard API error that implements IntoResponse.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardApiError {
    BadRequest(String),
    InvalidYear { message: String, available: Vec<i32> },
    NotFound { resource: &'static str, id: String },
    Internal(String),
}

impl DashboardApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            DashboardApiError::BadRequest(_) | DashboardApiError::InvalidYear { .. } => {
                StatusCode::BAD_REQUEST
            }
            DashboardApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            DashboardApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            DashboardApiError::BadRequest(msg) => ErrorResponse::bad_request(msg.clone()),
            DashboardApiError::InvalidYear { message, available } => {
                ErrorResponse::bad_request(message.clone())
                    .with_details(json!({ "available": available }))
            }
            DashboardApiError::NotFound { resource, id } => ErrorResponse::not_found(resource, id),
            DashboardApiError::Internal(msg) => ErrorResponse::internal(msg.clone()),
        }
    }

    /// Render as a full HTML error page.
    pub fn into_html(self, chrome: &Chrome) -> Response {
        let status = self.status();
        let message = self.body().message;
        (status, Html(render_error(status, &message, chrome))).into_response()
    }
}

impl IntoResponse for DashboardApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

impl From<DatasetError> for DashboardApiError {
    fn from(error: DatasetError) -> Self {
        tracing::error!(error = %error, "Dataset unavailable");
        DashboardApiError::Internal(error.to_string())
    }
}

impl From<PageError> for DashboardApiError {
    fn from(error: PageError) -> Self {
        match error {
            PageError::Dataset(err) => err.into(),
            PageError::View(ref err @ ViewError::InvalidYear { ref available, .. }) => {
                DashboardApiError::InvalidYear {
                    message: err.to_string(),
                    available: available.clone(),
                }
            }
            PageError::View(ViewError::Validation(err)) => {
                tracing::error!(error = %err, "Catalog figures failed validation");
                DashboardApiError::Internal(err.to_string())
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing dashboard dependencies.
#[derive(Clone)]
pub struct DashboardAppState {
    pub reader: Arc<dyn DatasetReader>,
    pub assets: Arc<dyn AssetProbe>,
    pub chrome: Chrome,
    pub top_growth_limit: usize,
}

impl DashboardAppState {
    pub fn new(
        reader: Arc<dyn DatasetReader>,
        assets: Arc<dyn AssetProbe>,
        chrome: Chrome,
        top_growth_limit: usize,
    ) -> Self {
        Self {
            reader,
            assets,
            chrome,
            top_growth_limit,
        }
    }

    pub fn render_page_handler(&self) -> RenderPageHandler {
        RenderPageHandler::new(
            self.reader.clone(),
            self.assets.clone(),
            self.top_growth_limit,
        )
    }

    pub fn list_pages_handler(&self) -> ListPagesHandler {
        ListPagesHandler
    }

    pub fn trend_points_handler(&self) -> GetTrendPointsHandler {
        GetTrendPointsHandler::new(self.reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

async fn build_view(
    state: &DashboardAppState,
    slug: &str,
    params: &PageParams,
) -> Result<PageView, DashboardApiError> {
    let page: Page = slug.parse().map_err(|_| DashboardApiError::NotFound {
        resource: "Page",
        id: slug.to_string(),
    })?;
    let year = params.year().map_err(DashboardApiError::BadRequest)?;

    let query = RenderPageQuery {
        page,
        year,
        toggles: params.toggles().map_err(DashboardApiError::BadRequest)?,
    };
    Ok(state.render_page_handler().handle(query).await?)
}

/// GET /
pub async fn redirect_home() -> Redirect {
    Redirect::to(&Page::default().path())
}

/// GET /pages/:page
///
/// Renders one dashboard page as HTML.
pub async fn get_page_html(
    State(state): State<DashboardAppState>,
    Path(slug): Path<String>,
    Query(params): Query<PageParams>,
) -> Response {
    match build_view(&state, &slug, &params).await {
        Ok(view) => Html(render_page(&view, &state.chrome)).into_response(),
        Err(err) => err.into_html(&state.chrome),
    }
}

/// GET /api/pages/:page
///
/// Returns the page view model as JSON.
pub async fn get_page_json(
    State(state): State<DashboardAppState>,
    Path(slug): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<Json<PageView>, DashboardApiError> {
    Ok(Json(build_view(&state, &slug, &params).await?))
}

/// GET /api/pages
pub async fn list_pages(State(state): State<DashboardAppState>) -> Json<Vec<PageSummary>> {
    Json(state.list_pages_handler().handle())
}

/// GET /api/datasets/trends/long
///
/// Returns the trends table melted to one point per trend and year.
pub async fn get_trend_points(
    State(state): State<DashboardAppState>,
) -> Result<Json<Vec<TrendPoint>>, DashboardApiError> {
    Ok(Json(state.trend_points_handler().handle().await?))
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Fallback for unmatched routes.
pub async fn not_found(State(state): State<DashboardAppState>, uri: Uri) -> Response {
    let error = DashboardApiError::NotFound {
        resource: "Route",
        id: uri.path().to_string(),
    };
    if uri.path().starts_with("/api/") {
        error.into_response()
    } else {
        error.into_html(&state.chrome)
    }
}
