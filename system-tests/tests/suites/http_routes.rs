// system-tests/tests/suites/http_routes.rs
// ============================================================================
// Module: HTTP Route Tests
// Description: Live-socket scenarios for the demo routes.
// Purpose: Ensure greeting and traveller routes answer correctly end to end.
// Dependencies: system-tests helpers, testbench-checks
// ============================================================================

//! HTTP client scenarios for the traveller demo server. Every request runs
//! under the group timeout through the client; a connection failure fails
//! only its own scenario.

use std::error::Error;

use helpers::harness::spawn_server;
use helpers::readiness::wait_for_server_ready;
use serde_json::Value;
use serde_json::json;
use system_tests::config;
use testbench_checks::deep_eq;
use testbench_checks::strict_eq;
use testbench_checks::string_contains;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn get_hello_without_a_name() -> Result<(), Box<dyn Error>> {
    let server = spawn_server().await?;
    let client = server.client(config::group_timeout())?;
    wait_for_server_ready(&client, server.base_url(), config::group_timeout()).await?;

    let response = client.get(format!("{}/hello", server.base_url())).send().await?;
    strict_eq(
        &json!(response.status().as_u16()),
        &json!(200),
        Some("response status should be 200"),
    )?;
    strict_eq(
        &json!(response.text().await?),
        &json!("hello Guest"),
        Some("response text should be \"hello Guest\""),
    )?;

    server.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn get_hello_with_a_name() -> Result<(), Box<dyn Error>> {
    let server = spawn_server().await?;
    let client = server.client(config::group_timeout())?;
    wait_for_server_ready(&client, server.base_url(), config::group_timeout()).await?;

    let response = client.get(format!("{}/hello?name=Mevinu", server.base_url())).send().await?;
    strict_eq(
        &json!(response.status().as_u16()),
        &json!(200),
        Some("response status should be 200"),
    )?;
    strict_eq(
        &json!(response.text().await?),
        &json!("hello Mevinu"),
        Some("response text should be \"hello Mevinu\""),
    )?;

    server.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn put_traveller_colombo() -> Result<(), Box<dyn Error>> {
    let server = spawn_server().await?;
    let client = server.client(config::group_timeout())?;
    wait_for_server_ready(&client, server.base_url(), config::group_timeout()).await?;

    let response = client
        .put(format!("{}/travellers", server.base_url()))
        .json(&json!({ "surname": "Colombo" }))
        .send()
        .await?;
    strict_eq(
        &json!(response.status().as_u16()),
        &json!(200),
        Some("response status should be 200"),
    )?;
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    string_contains(
        &content_type,
        "application/json",
        Some("response type should be application/json"),
    )?;
    let body: Value = response.json().await?;
    deep_eq(
        &body,
        &json!({ "surname": "Colombo" }),
        Some("response body should echo the sent surname"),
    )?;

    server.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn put_traveller_da_verrazzano() -> Result<(), Box<dyn Error>> {
    let server = spawn_server().await?;
    let client = server.client(config::group_timeout())?;
    wait_for_server_ready(&client, server.base_url(), config::group_timeout()).await?;

    let response = client
        .put(format!("{}/travellers", server.base_url()))
        .json(&json!({ "surname": "da Verrazzano" }))
        .send()
        .await?;
    strict_eq(
        &json!(response.status().as_u16()),
        &json!(200),
        Some("response status should be 200"),
    )?;
    let body: Value = response.json().await?;
    strict_eq(
        &body["surname"],
        &json!("da Verrazzano"),
        Some("response body should contain the sent surname"),
    )?;

    server.shutdown().await;
    Ok(())
}
