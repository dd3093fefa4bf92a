use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::database::Receipt;
use crate::error::ApiError;
use crate::state::AppState;

/// PUT /db/:hash - store a hash receipt; false when the hash already exists
pub async fn put_receipt(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let stored = Receipt::insert(&state.pool, &hash).await?;

    Ok(Json(json!({ "result": stored })))
}

/// GET /db/:id - read a hash receipt back by row id (empty when absent)
pub async fn get_receipt(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    let receipt = Receipt::find(&state.pool, id).await?;
    let hash = receipt.map(|r| r.hash).unwrap_or_default();

    Ok(Json(json!({ "hash": hash })))
}
