pub mod criteria;
pub mod delivery;
pub mod executor;

pub use criteria::{CriteriaError, SearchCriteria};

use thiserror::Error;
use tracing::{error, info};

use crate::database::DatabaseError;
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Delivery(#[from] delivery::DeliveryError),
}

/// Detached search-and-deliver task. Runs independently of the request that
/// dispatched it; failures are logged and swallowed, leaving the transaction
/// key unpopulated.
pub async fn process_search(state: AppState, criteria: SearchCriteria, transaction_id: String) {
    if let Err(e) = run(&state, &criteria, &transaction_id).await {
        error!(%transaction_id, "Search task failed: {}", e);
    }
}

async fn run(
    state: &AppState,
    criteria: &SearchCriteria,
    transaction_id: &str,
) -> Result<(), SearchError> {
    match &criteria.name {
        Some(name) => info!(%transaction_id, "Name filter: {}", name),
        None => info!(%transaction_id, "No filter applied for name"),
    }
    match &criteria.city {
        Some(city) => info!(%transaction_id, "City filter: {}", city),
        None => info!(%transaction_id, "No filter applied for city"),
    }

    let results = executor::execute(&state.pool, criteria).await?;
    delivery::deliver(&state.http, &state.delivery_base_url, transaction_id, &results).await?;

    info!(%transaction_id, "Listing {} results", results.len());
    Ok(())
}
