//! Crop Advisor Server
//!
//! HTTP API for crop recommendation. Loads the trained classifier and
//! label decoder at startup, then serves predictions with fertilizer
//! advice, a justification, and an optionally localized summary.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crop_advisor::classifier::CropPredictor;
use crop_advisor::config::ServiceConfig;
use crop_advisor::recommend::Recommender;
use crop_advisor::routes;
use crop_advisor::state::AppState;
use crop_advisor::translate::HttpTranslator;

/// Crop Advisor Server
#[derive(Parser, Debug)]
#[command(name = "crop-advisor")]
#[command(version = "0.1.0")]
#[command(about = "HTTP API for crop recommendation")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "CROP_ADVISOR_PORT")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0", env = "CROP_ADVISOR_HOST")]
    host: String,

    /// Path to the trained classifier model
    #[arg(long, env = "CROP_ADVISOR_MODEL")]
    model: Option<PathBuf>,

    /// Path to the label decoder
    #[arg(long, env = "CROP_ADVISOR_LABELS")]
    labels: Option<PathBuf>,

    /// Base URL of the translation backend
    #[arg(long, env = "CROP_ADVISOR_TRANSLATOR_URL")]
    translator_url: Option<String>,

    /// Timeout for a single translation request, in seconds
    #[arg(long, env = "CROP_ADVISOR_TRANSLATOR_TIMEOUT")]
    translator_timeout: Option<u64>,

    /// Allowed CORS origin (repeatable); none allows any origin
    #[arg(long = "cors-origin", env = "CROP_ADVISOR_CORS_ORIGIN")]
    cors_origin: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .init();

    // Build configuration
    let mut config = ServiceConfig::default();

    if let Some(model) = cli.model {
        config.model_path = model;
    }
    if let Some(labels) = cli.labels {
        config.labels_path = labels;
    }
    if let Some(url) = cli.translator_url {
        config.translator_url = url;
    }
    if let Some(timeout) = cli.translator_timeout {
        config.translator_timeout_secs = timeout;
    }
    config.cors_origins = cli.cors_origin;

    info!("Crop Advisor Server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration:");
    info!("  Model:      {:?}", config.model_path);
    info!("  Labels:     {:?}", config.labels_path);
    info!("  Translator: {}", config.translator_url);

    // Artifact load failure is fatal: never serve without a classifier.
    let predictor = CropPredictor::load(&config.model_path, &config.labels_path)?;
    let translator = HttpTranslator::new(&config.translator_url, config.translator_timeout())?;

    let recommender = Recommender::new(predictor, Arc::new(translator));
    let state = Arc::new(AppState::new(recommender));

    // Build router
    let app = Router::new()
        .route("/", get(routes::health::health_check))
        .route("/predict", post(routes::predict::predict))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(&config.cors_origins)?);

    // Start server
    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_cors(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let layer = if origins.is_empty() {
        CorsLayer::new().allow_origin(Any)
    } else {
        let parsed = origins
            .iter()
            .map(|origin| origin.parse())
            .collect::<Result<Vec<HeaderValue>, _>>()?;
        CorsLayer::new().allow_origin(AllowOrigin::list(parsed))
    };

    Ok(layer.allow_methods(Any).allow_headers(Any))
}
