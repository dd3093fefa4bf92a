use thiserror::Error;
use url::form_urlencoded;

use crate::database::Person;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Cache address for a transaction: the fixed /redis/ prefix plus the
/// form-urlencoded transaction identifier.
pub fn cache_key_url(base_url: &str, transaction_id: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(transaction_id.as_bytes()).collect();
    format!("{}/redis/{}", base_url.trim_end_matches('/'), encoded)
}

/// PUT the serialized result set into the result cache under the
/// transaction key. Non-2xx upstream responses are errors.
pub async fn deliver(
    http: &reqwest::Client,
    base_url: &str,
    transaction_id: &str,
    results: &[Person],
) -> Result<(), DeliveryError> {
    let url = cache_key_url(base_url, transaction_id);

    http.put(&url)
        .json(&results)
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}
