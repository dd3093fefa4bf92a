use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use people_search_api::state::AppState;
use people_search_api::{cache, config, database, handlers};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, REDIS_URL, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting People Search API in {:?} mode", config.environment);

    let pool = database::connect_pool(&config.database)
        .await
        .unwrap_or_else(|e| panic!("failed to connect database: {}", e));

    database::run_migrations(&pool)
        .await
        .unwrap_or_else(|e| panic!("failed to run migrations: {}", e));

    let result_cache = cache::ResultCache::connect(&config.cache)
        .await
        .unwrap_or_else(|e| panic!("failed to connect result cache: {}", e));

    let state = AppState::new(pool, result_cache, config.delivery.base_url.clone());
    let app = app(state);

    // Allow tests or deployments to override port via env
    let port = std::env::var("PEOPLE_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(config.server.port);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("People Search API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(search_routes())
        .merge(cache_routes())
        .merge(receipt_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn search_routes() -> Router<AppState> {
    use handlers::search;

    Router::new().route("/search-csv", get(search::search_csv))
}

fn cache_routes() -> Router<AppState> {
    use handlers::cache;

    Router::new().route("/redis/:key", get(cache::get_value).put(cache::put_value))
}

fn receipt_routes() -> Router<AppState> {
    use handlers::receipts;

    // One route for both: matchit requires a single parameter name per
    // segment, and Path extraction is positional anyway.
    Router::new().route("/db/:id", get(receipts::get_receipt).put(receipts::put_receipt))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "People Search API",
            "version": version,
            "description": "Asynchronous people search service backed by Postgres and Redis",
            "endpoints": {
                "home": "/",
                "search": "/search-csv?name=&city=&quantity= (dispatches a detached search)",
                "results": "/redis/:key (GET cached value, PUT JSON value)",
                "receipts": "/db/:hash (PUT), /db/:id (GET)",
            }
        }
    }))
}

async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::health_check(&state.pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
