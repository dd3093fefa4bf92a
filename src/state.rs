use sqlx::PgPool;

use crate::cache::ResultCache;

/// Shared handles built once at startup and injected into handlers and the
/// detached search task via axum state.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub cache: ResultCache,
    pub http: reqwest::Client,
    pub delivery_base_url: String,
}

impl AppState {
    pub fn new(pool: PgPool, cache: ResultCache, delivery_base_url: impl Into<String>) -> Self {
        Self {
            pool,
            cache,
            http: reqwest::Client::new(),
            delivery_base_url: delivery_base_url.into(),
        }
    }
}
