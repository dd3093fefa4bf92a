mod common;

use std::time::{Duration, Instant};

use anyhow::Result;
use reqwest::StatusCode;

// These tests verify the search dispatch surface: validation, the 202
// contract, and out-of-band delivery into the cache endpoint.

#[tokio::test]
async fn dispatch_returns_202_with_transaction_id() -> Result<()> {
    if !common::env_configured() {
        eprintln!("skipping: DATABASE_URL/REDIS_URL not configured");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/search-csv?name=glen", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::ACCEPTED, "unexpected status: {}", res.status());

    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["message"], "Search request received");
    let transaction_id = payload["transaction_id"].as_str().unwrap_or_default();
    assert!(!transaction_id.is_empty(), "missing transaction_id: {}", payload);

    Ok(())
}

#[tokio::test]
async fn unknown_parameter_returns_400_naming_the_field() -> Result<()> {
    if !common::env_configured() {
        eprintln!("skipping: DATABASE_URL/REDIS_URL not configured");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/search-csv?not_exists=glen", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST, "unexpected status: {}", res.status());

    let payload = res.json::<serde_json::Value>().await?;
    let message = payload["message"].as_str().unwrap_or_default();
    assert!(message.contains("not_exists"), "message does not name the field: {}", payload);

    Ok(())
}

#[tokio::test]
async fn malformed_quantity_returns_400() -> Result<()> {
    if !common::env_configured() {
        eprintln!("skipping: DATABASE_URL/REDIS_URL not configured");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/search-csv?quantity=many", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST, "unexpected status: {}", res.status());

    Ok(())
}

#[tokio::test]
async fn delivered_result_is_pollable_under_the_transaction_id() -> Result<()> {
    if !common::env_configured() {
        eprintln!("skipping: DATABASE_URL/REDIS_URL not configured");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // A city filter that cannot match makes the delivered payload an empty
    // JSON array regardless of what is seeded in the store.
    let res = client
        .get(format!(
            "{}/search-csv?name=glen&city=no_such_city_zzz",
            server.base_url
        ))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::ACCEPTED);

    let payload = res.json::<serde_json::Value>().await?;
    let transaction_id = payload["transaction_id"].as_str().unwrap_or_default().to_string();
    assert!(!transaction_id.is_empty());

    // Poll the mailbox until the detached task delivers
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        let res = client
            .get(format!("{}/redis/{}", server.base_url, transaction_id))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::OK);

        let body = res.json::<serde_json::Value>().await?;
        let result = body["result"].as_str().unwrap_or_default();
        if !result.is_empty() {
            assert_eq!(result, "[]", "expected empty result set: {}", body);
            return Ok(());
        }

        if Instant::now() > deadline {
            anyhow::bail!("result for {} was never delivered", transaction_id);
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
}
