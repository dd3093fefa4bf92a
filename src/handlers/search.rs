use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::collections::HashMap;
use uuid::Uuid;

use crate::error::ApiError;
use crate::search::{self, SearchCriteria};
use crate::state::AppState;

/// GET /search-csv - validate the filter set and dispatch a detached
/// search task. Replies immediately; results arrive in the cache under
/// the returned transaction id.
pub async fn search_csv(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("Entering search endpoint");

    let criteria = SearchCriteria::from_query(&params)?;

    // Generated before the task starts, so polling clients see either
    // "absent" or the complete result, never a partial write.
    let transaction_id = Uuid::new_v4().to_string();

    tokio::spawn(search::process_search(
        state,
        criteria,
        transaction_id.clone(),
    ));

    tracing::info!(%transaction_id, "Search request successfully initiated");

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({
            "message": "Search request received",
            "transaction_id": transaction_id,
        })),
    ))
}
