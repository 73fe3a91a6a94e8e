use server::clients::gemini::GeminiClient;
use server::config::Config;
use server::prompt::PromptTemplate;
use server::routes;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();

    // The coaching instructions must exist before any request is served
    tracing::info!("Loading prompt template from {}", config.prompt_path);
    let template = PromptTemplate::load(&config.prompt_path)
        .expect("Failed to load prompt template");

    let gemini = GeminiClient::new(&config);

    // CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(routes::pages::index))
        .route("/health", get(routes::health::health_check))
        .route("/api/analyze", post(routes::analyze::analyze_game))
        // Shared state
        .layer(Extension(config.clone()))
        .layer(Extension(template))
        .layer(Extension(gemini))
        .layer(cors);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}
