#![forbid(unsafe_code)]

use std::process::ExitCode;
use std::sync::Arc;

use healthcare_ai_dashboard::adapters::render::Chrome;
use healthcare_ai_dashboard::adapters::{
    dashboard_router, CachedDatasetReader, CsvDatasetReader, DashboardAppState, FsAssetProbe,
};
use healthcare_ai_dashboard::config::{AppConfig, ServerConfig};
use healthcare_ai_dashboard::ports::{AssetProbe, DatasetReader};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("failed to register SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    info!("shutdown signal received");
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    if server.json_logs() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn run(config: AppConfig) -> Result<(), String> {
    let addr = config
        .server
        .socket_addr()
        .map_err(|e| format!("invalid bind address: {e}"))?;

    let cache = Arc::new(CachedDatasetReader::new(CsvDatasetReader::from_config(
        &config.data,
    )));
    let summary = cache
        .warm()
        .await
        .map_err(|e| format!("failed to load datasets from {}: {e}", config.data.dir.display()))?;
    info!(
        trend_rows = summary.trend_rows,
        investment_rows = summary.investment_rows,
        "datasets ready"
    );

    let mut chrome = Chrome::from_config(&config.dashboard);
    if let Some(loaded_at) = cache.loaded_at() {
        chrome = chrome.with_loaded_at(loaded_at);
    }

    let images = config.data.images_path();
    if !images.is_dir() {
        tracing::warn!(path = %images.display(), "image directory missing; pages will show placeholders");
    }

    let reader: Arc<dyn DatasetReader> = cache;
    let assets: Arc<dyn AssetProbe> = Arc::new(FsAssetProbe::new(images));
    let state = DashboardAppState::new(
        reader,
        assets,
        chrome,
        config.dashboard.top_growth_limit,
    );
    let app = dashboard_router(state, &config);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("bind {addr} failed: {e}"))?;
    info!(
        environment = ?config.server.environment,
        "healthcare-ai-dashboard listening on http://{addr}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    init_tracing(&config.server);

    match run(config).await {
        Ok(()) => {
            info!("server stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
