use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /redis/:key - read a cached value back as text (empty when absent)
pub async fn get_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let value = state.cache.get(&key).await?;
    let result = value
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default();

    Ok(Json(json!({ "result": result })))
}

/// PUT /redis/:key - store a JSON body under an arbitrary key
pub async fn put_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let payload = serde_json::to_string(&body)?;
    state.cache.set(&key, payload).await?;

    Ok(Json(json!({ "message": "Data stored successfully" })))
}
