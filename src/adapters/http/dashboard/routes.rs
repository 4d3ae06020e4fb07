//! HTTP routes for dashboard endpoints.

use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::domain::dashboard::use_cases::IMAGE_ROUTE;

use super::handlers::{
    get_page_html, get_page_json, get_trend_points, health, list_pages, not_found, redirect_home,
    DashboardAppState,
};

/// Creates the dashboard router with all routes.
pub fn dashboard_routes(state: DashboardAppState) -> Router {
    Router::new()
        // GET / -> /pages/overview
        .route("/", get(redirect_home))
        // GET /pages/:page?year=&raw=&forecast=&tasks=
        .route("/pages/:page", get(get_page_html))
        // GET /api/pages
        .route("/api/pages", get(list_pages))
        // GET /api/pages/:page
        .route("/api/pages/:page", get(get_page_json))
        // GET /api/datasets/trends/long
        .route("/api/datasets/trends/long", get(get_trend_points))
        // GET /api/health
        .route("/api/health", get(health))
        .fallback(not_found)
        .with_state(state)
}

/// Full application router: routes, image assets and middleware.
pub fn dashboard_router(state: DashboardAppState, config: &AppConfig) -> Router {
    let timeout = Duration::from_secs(config.server.request_timeout_secs);

    dashboard_routes(state)
        .nest_service(IMAGE_ROUTE, ServeDir::new(config.data.images_path()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(timeout)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::render::Chrome;
    use crate::domain::datasets::{InvestmentRow, InvestmentTable, RawTable, TrendTable};
    use crate::ports::{AssetProbe, DatasetError, DatasetReader};

    // ───────────────────────────────────────────────────────────────
    // Mock implementations
    // ───────────────────────────────────────────────────────────────

    struct StubDatasetReader {
        fail: bool,
    }

    fn investment_raw() -> RawTable {
        RawTable::new(
            vec![
                "Year".to_string(),
                "World".to_string(),
                "United States".to_string(),
                "European Union & UK".to_string(),
                "China".to_string(),
            ],
            vec![
                vec!["2020", "8.1", "5.2", "1.4", "1.0"],
                vec!["2021", "12.7", "8.5", "2.2", "1.6"],
            ]
            .into_iter()
            .map(|r| r.into_iter().map(String::from).collect())
            .collect(),
        )
    }

    #[async_trait]
    impl DatasetReader for StubDatasetReader {
        async fn trends(&self) -> Result<Arc<TrendTable>, DatasetError> {
            if self.fail {
                return Err(DatasetError::NotFound("data/trends.csv".into()));
            }
            let raw = RawTable::new(
                vec!["Trend".to_string(), "2018".to_string(), "2019".to_string()],
                vec![
                    vec!["Telemedicine".to_string(), "10".to_string(), "12".to_string()],
                    vec!["Wearables".to_string(), "5".to_string(), "7".to_string()],
                ],
            );
            Ok(Arc::new(TrendTable::from_raw(&raw).unwrap()))
        }

        async fn investment(&self) -> Result<Arc<InvestmentTable>, DatasetError> {
            if self.fail {
                return Err(DatasetError::NotFound("data/investment.csv".into()));
            }
            Ok(Arc::new(InvestmentTable::new(vec![InvestmentRow {
                year: 2021,
                world: 12.7,
                united_states: 8.5,
                eu_uk: 2.2,
                china: 1.6,
            }])))
        }

        async fn raw_investment(&self) -> Result<Arc<RawTable>, DatasetError> {
            if self.fail {
                return Err(DatasetError::NotFound("data/investment.csv".into()));
            }
            Ok(Arc::new(investment_raw()))
        }
    }

    struct NoImages;

    #[async_trait]
    impl AssetProbe for NoImages {
        async fn exists(&self, _name: &str) -> bool {
            false
        }
    }

    fn state(fail: bool) -> DashboardAppState {
        DashboardAppState::new(
            Arc::new(StubDatasetReader { fail }),
            Arc::new(NoImages),
            Chrome::new("Artificial Intelligence in Healthcare", "🏥"),
            5,
        )
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    // ───────────────────────────────────────────────────────────────
    // Tests
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn root_redirects_to_overview() {
        let (status, headers, _) = get(dashboard_routes(state(false)), "/").await;
        assert!(status.is_redirection());
        assert_eq!(headers[header::LOCATION], "/pages/overview");
    }

    #[tokio::test]
    async fn every_page_renders_html() {
        for slug in [
            "overview",
            "industry-trends",
            "ai-healthcare-market",
            "impact-of-ai",
            "ai-use-cases",
        ] {
            let (status, headers, body) =
                get(dashboard_routes(state(false)), &format!("/pages/{}", slug)).await;
            assert_eq!(status, StatusCode::OK, "page {}", slug);
            assert!(headers[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html"));
            assert!(body.contains("Artificial Intelligence in Healthcare"));
        }
    }

    #[tokio::test]
    async fn raw_toggle_reveals_investment_table() {
        let app = dashboard_routes(state(false));
        let (_, _, closed) = get(app.clone(), "/pages/ai-healthcare-market").await;
        let (_, _, open) = get(app, "/pages/ai-healthcare-market?raw=true").await;
        assert!(!closed.contains("<td>8.1</td>"));
        assert!(!closed.contains("Raw Investment Data"));
        assert!(open.contains("<td>8.1</td>"));
        assert!(open.contains("<h3>Raw Investment Data</h3>"));
    }

    #[tokio::test]
    async fn selected_year_drives_comparison_chart() {
        let (status, _, body) =
            get(dashboard_routes(state(false)), "/pages/industry-trends?year=2019").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Market Size Comparison for 2019"));
    }

    #[tokio::test]
    async fn unknown_page_is_html_404() {
        let (status, _, body) = get(dashboard_routes(state(false)), "/pages/settings").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("404 Not Found"));
        assert!(body.contains("Page not found: settings"));
    }

    #[tokio::test]
    async fn invalid_year_is_400() {
        let app = dashboard_routes(state(false));
        let (status, _, _) = get(app.clone(), "/pages/industry-trends?year=1999").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _, body) = get(app.clone(), "/api/pages/industry-trends?year=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["code"], "BAD_REQUEST");

        let (status, _, body) = get(app, "/api/pages/industry-trends?year=1999").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["details"]["available"], serde_json::json!([2018, 2019]));
    }

    #[tokio::test]
    async fn checkbox_style_toggle_values_are_accepted() {
        let app = dashboard_routes(state(false));
        for query in ["raw=1", "raw=on", "raw=yes"] {
            let (status, _, body) =
                get(app.clone(), &format!("/pages/ai-healthcare-market?{}", query)).await;
            assert_eq!(status, StatusCode::OK, "{}", query);
            assert!(body.contains("<td>8.1</td>"), "{}", query);
        }

        let (status, _, body) = get(app, "/api/pages/ai-healthcare-market?raw=maybe").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["code"], "BAD_REQUEST");
        assert_eq!(json["message"], "Invalid value 'maybe' for raw");
    }

    #[tokio::test]
    async fn dataset_failure_is_500() {
        let app = dashboard_routes(state(true));
        let (status, _, body) = get(app.clone(), "/pages/industry-trends").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Navigation"));

        let (status, _, body) = get(app.clone(), "/api/datasets/trends/long").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["code"], "INTERNAL_ERROR");

        // Static pages do not touch the datasets.
        let (status, _, _) = get(app, "/pages/overview").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn api_lists_pages_and_views() {
        let app = dashboard_routes(state(false));
        let (status, _, body) = get(app.clone(), "/api/pages").await;
        assert_eq!(status, StatusCode::OK);
        let pages: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(pages.as_array().unwrap().len(), 5);
        assert_eq!(pages[1]["path"], "/pages/industry-trends");

        let (status, _, body) = get(app, "/api/pages/impact-of-ai?tasks=true").await;
        assert_eq!(status, StatusCode::OK);
        let view: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(view["page"], "impact-of-ai");
        assert!(view["blocks"]
            .as_array()
            .unwrap()
            .iter()
            .any(|b| b["type"] == "toggle" && b["open"] == true));
    }

    #[tokio::test]
    async fn trend_points_are_melted() {
        let (status, _, body) =
            get(dashboard_routes(state(false)), "/api/datasets/trends/long").await;
        assert_eq!(status, StatusCode::OK);
        let points: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(points.as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, _, body) = get(dashboard_routes(state(false)), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn unknown_api_route_is_json_404() {
        let (status, _, body) = get(dashboard_routes(state(false)), "/api/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn full_router_serves_images_and_sets_request_id() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join("images/Output.png"), b"png").unwrap();

        let mut config = AppConfig::default();
        config.data.dir = dir.path().to_path_buf();
        let app = dashboard_router(state(false), &config);

        let (status, headers, body) = get(app.clone(), "/assets/images/Output.png").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "png");
        assert!(headers.contains_key("x-request-id"));

        let (status, _, _) = get(app, "/assets/images/missing.png").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
