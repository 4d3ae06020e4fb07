//! Integration tests for the dashboard over real CSV files.
//!
//! These tests wire the full stack the way the binary does:
//! 1. CSV files on disk are read through the cached reader
//! 2. The router renders every page from those tables
//! 3. Broken or missing files surface as errors, not panics

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use healthcare_ai_dashboard::adapters::render::Chrome;
use healthcare_ai_dashboard::adapters::{
    dashboard_router, CachedDatasetReader, CsvDatasetReader, DashboardAppState, FsAssetProbe,
};
use healthcare_ai_dashboard::config::AppConfig;
use healthcare_ai_dashboard::ports::{DatasetError, DatasetReader};

// =============================================================================
// Test Infrastructure
// =============================================================================

const TRENDS: &str = "\
Trend,2018,2019,2020
AI/ML in Healthcare,1.9,2.8,4.3
Telemedicine,38.1,49.2,63.4
\"Health Apps (mHealth)\",28.3,39.1,54.1
";

const INVESTMENT: &str = "\
Year,World,United States,European Union & UK,China
2019,5.6,3.6,0.8,0.8
2020,8.1,5.2,1.4,1.0
2021,12.7,8.5,2.2,1.6
2022,7.2,4.9,1.2,0.8
";

fn write_fixtures(dir: &Path, trends: Option<&str>, investment: Option<&str>) {
    if let Some(trends) = trends {
        std::fs::write(dir.join("trends.csv"), trends).unwrap();
    }
    if let Some(investment) = investment {
        std::fs::write(dir.join("ai_healthcare_investment.csv"), investment).unwrap();
    }
    std::fs::create_dir_all(dir.join("images")).unwrap();
}

fn config_for(dir: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.data.dir = dir.to_path_buf();
    config
}

fn app(config: &AppConfig) -> Router {
    let reader: Arc<dyn DatasetReader> = Arc::new(CachedDatasetReader::new(
        CsvDatasetReader::from_config(&config.data),
    ));
    let state = DashboardAppState::new(
        reader,
        Arc::new(FsAssetProbe::new(config.data.images_path())),
        Chrome::from_config(&config.dashboard),
        config.dashboard.top_growth_limit,
    );
    dashboard_router(state, config)
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn warm_reports_dataset_shape() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path(), Some(TRENDS), Some(INVESTMENT));
    let config = config_for(dir.path());

    let cache = CachedDatasetReader::new(CsvDatasetReader::from_config(&config.data));
    assert!(cache.loaded_at().is_none());

    let summary = cache.warm().await.unwrap();
    assert_eq!(summary.trend_rows, 3);
    assert_eq!(summary.trend_years, 3);
    assert_eq!(summary.investment_rows, 4);
    assert!(cache.loaded_at().is_some());
}

#[tokio::test]
async fn industry_trends_page_uses_csv_years() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path(), Some(TRENDS), Some(INVESTMENT));
    let app = app(&config_for(dir.path()));

    let (status, body) = get(app.clone(), "/pages/industry-trends").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Market Size Comparison for 2018"));
    assert!(body.contains(r#"<option value="2020">2020</option>"#));
    assert!(body.contains("Health Apps (mHealth)"));

    let (status, body) = get(app, "/pages/industry-trends?year=2020").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Market Size Comparison for 2020"));
}

#[tokio::test]
async fn market_page_highlights_peak_investment() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path(), Some(TRENDS), Some(INVESTMENT));
    let app = app(&config_for(dir.path()));

    let (status, body) = get(app, "/pages/ai-healthcare-market?raw=true").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<strong>Peak global investment:</strong> $12.7 billion in 2021"));
    assert!(body.contains("<strong>Peak US investment:</strong> $8.5 billion in 2021"));
    assert!(body.contains("<th>European Union &amp; UK</th>"));
}

#[tokio::test]
async fn trend_points_api_melts_csv() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path(), Some(TRENDS), Some(INVESTMENT));
    let app = app(&config_for(dir.path()));

    let (status, body) = get(app, "/api/datasets/trends/long").await;
    assert_eq!(status, StatusCode::OK);
    let points: serde_json::Value = serde_json::from_str(&body).unwrap();
    let points = points.as_array().unwrap();
    assert_eq!(points.len(), 9);
    assert_eq!(points[0]["trend"], "AI/ML in Healthcare");
    assert_eq!(points[0]["year"], 2018);
}

#[tokio::test]
async fn missing_trends_file_fails_only_dependent_pages() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path(), None, Some(INVESTMENT));
    let app = app(&config_for(dir.path()));

    let (status, body) = get(app.clone(), "/pages/industry-trends").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("Data file not found"));

    for page in ["overview", "ai-healthcare-market", "impact-of-ai", "ai-use-cases"] {
        let (status, _) = get(app.clone(), &format!("/pages/{}", page)).await;
        assert_eq!(status, StatusCode::OK, "page {}", page);
    }
}

#[tokio::test]
async fn malformed_csv_fails_warm_with_line_number() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(
        dir.path(),
        Some("Trend,2018,2019\nTelemedicine,1.0\n"),
        Some(INVESTMENT),
    );
    let config = config_for(dir.path());

    let cache = CachedDatasetReader::new(CsvDatasetReader::from_config(&config.data));
    match cache.warm().await {
        Err(DatasetError::Malformed { file, line, .. }) => {
            assert_eq!(file, "trends.csv");
            assert_eq!(line, 2);
        }
        other => panic!("expected malformed error, got {:?}", other),
    }
}

#[tokio::test]
async fn use_cases_page_shows_available_images() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path(), Some(TRENDS), Some(INVESTMENT));
    std::fs::write(dir.path().join("images/Gpt2-Medi.png"), b"png").unwrap();
    let app = app(&config_for(dir.path()));

    let (status, body) = get(app.clone(), "/pages/ai-use-cases").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<img src="/assets/images/Gpt2-Medi.png""#));
    assert!(body.contains("Image not available: Output.png"));

    let (status, body) = get(app, "/assets/images/Gpt2-Medi.png").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "png");
}
