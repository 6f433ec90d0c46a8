// system-tests/tests/suites/browser_form.rs
// ============================================================================
// Module: Browser Form Tests
// Description: Simulated-browser scenarios for the traveller form.
// Purpose: Ensure form submissions land in the surname display element.
// Dependencies: system-tests helpers, testbench-checks
// ============================================================================

//! Simulated-browser scenarios: load the index page, fill the surname
//! field, press the submit control, and read the updated display element.

use std::error::Error;

use helpers::browser::Browser;
use helpers::harness::ServerHandle;
use helpers::harness::spawn_server;
use helpers::readiness::wait_for_server_ready;
use serde_json::json;
use system_tests::config;
use testbench_checks::is_truthy;
use testbench_checks::strict_eq;

use crate::helpers;

/// Spawns a server and a browser already pointed at the index page.
async fn browser_on_index() -> Result<(ServerHandle, Browser), Box<dyn Error>> {
    let server = spawn_server().await?;
    let client = server.client(config::group_timeout())?;
    wait_for_server_ready(&client, server.base_url(), config::group_timeout()).await?;

    let mut browser = Browser::new(server.base_url(), config::group_timeout())?;
    browser.visit("/").await?;
    Ok((server, browser))
}

#[tokio::test(flavor = "multi_thread")]
async fn browser_reports_its_site() -> Result<(), Box<dyn Error>> {
    let (server, browser) = browser_on_index().await?;

    is_truthy(&json!(browser.site()), Some("the browser should know its site"))?;
    strict_eq(
        &json!(browser.status_code()),
        &json!(200),
        Some("the index page should load cleanly"),
    )?;

    server.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn submit_the_surname_colombo() -> Result<(), Box<dyn Error>> {
    let (server, mut browser) = browser_on_index().await?;

    browser.fill("surname", "Colombo")?;
    browser.press_button("submit").await?;

    strict_eq(
        &json!(browser.status_code()),
        &json!(200),
        Some("response status should be 200"),
    )?;
    strict_eq(
        &json!(browser.text("surname")?),
        &json!("Colombo"),
        Some("the display element should echo the submitted surname"),
    )?;

    server.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn submit_the_surname_vespucci() -> Result<(), Box<dyn Error>> {
    let (server, mut browser) = browser_on_index().await?;

    browser.fill("surname", "Vespucci")?;
    browser.press_button("submit").await?;

    strict_eq(
        &json!(browser.status_code()),
        &json!(200),
        Some("response status should be 200"),
    )?;
    strict_eq(
        &json!(browser.text("surname")?),
        &json!("Vespucci"),
        Some("the display element should echo the submitted surname"),
    )?;

    server.shutdown().await;
    Ok(())
}
