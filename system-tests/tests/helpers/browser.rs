// system-tests/tests/helpers/browser.rs
// ============================================================================
// Module: Simulated Browser
// Description: Form-driving browser stand-in for functional tests.
// Purpose: Load pages, fill fields, and submit forms without a renderer.
// Dependencies: reqwest, serde_json
// ============================================================================

//! ## Overview
//! A test-only browser stand-in: it loads HTML over the real socket, stages
//! named form-field values, and on submit honors the form's declared
//! `action` and `method` attributes (including `method="put"`, sent as a
//! JSON body of the staged fields). Response JSON fields whose key matches
//! an element id update that element's visible text, mirroring what the
//! page's script would do. HTML attribute scanning is string-level and
//! deliberately minimal; there is no rendering engine.

use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::Value;

/// One loaded page plus the text updates applied after submissions.
struct Page {
    /// Raw HTML as served.
    html: String,
    /// Element-id to text overrides applied from submission responses.
    text_overrides: BTreeMap<String, String>,
}

/// Simulated browser bound to one site.
pub struct Browser {
    /// HTTP client used for navigation and submissions.
    client: reqwest::Client,
    /// Site base URL.
    site: String,
    /// Status code of the last navigation or submission.
    status: Option<u16>,
    /// Currently loaded page.
    page: Option<Page>,
    /// Staged form-field values, by field name.
    staged: BTreeMap<String, String>,
}

impl Browser {
    /// Builds a browser for the given site.
    pub fn new(site: impl Into<String>, timeout: Duration) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| format!("failed to build browser client: {err}"))?;
        Ok(Self {
            client,
            site: site.into(),
            status: None,
            page: None,
            staged: BTreeMap::new(),
        })
    }

    /// Returns the site base URL.
    pub fn site(&self) -> &str {
        &self.site
    }

    /// Returns the status code of the last navigation or submission.
    pub fn status_code(&self) -> Option<u16> {
        self.status
    }

    /// Loads a page and discards any staged fields.
    pub async fn visit(&mut self, path: &str) -> Result<(), String> {
        let response = self
            .client
            .get(format!("{}{path}", self.site))
            .send()
            .await
            .map_err(|err| format!("navigation failed: {err}"))?;
        self.status = Some(response.status().as_u16());
        let html = response.text().await.map_err(|err| format!("page read failed: {err}"))?;
        self.page = Some(Page {
            html,
            text_overrides: BTreeMap::new(),
        });
        self.staged.clear();
        Ok(())
    }

    /// Stages a value for the named form field on the loaded page.
    pub fn fill(&mut self, field: &str, value: &str) -> Result<(), String> {
        let page = self.page.as_ref().ok_or("no page loaded")?;
        if !page.html.contains(&format!("name=\"{field}\"")) {
            return Err(format!("page has no field named {field:?}"));
        }
        self.staged.insert(field.to_owned(), value.to_owned());
        Ok(())
    }

    /// Submits the page's form through the named submit control.
    pub async fn press_button(&mut self, name: &str) -> Result<(), String> {
        let (action, method) = {
            let page = self.page.as_ref().ok_or("no page loaded")?;
            if !page.html.contains(&format!("name=\"{name}\"")) {
                return Err(format!("page has no submit control named {name:?}"));
            }
            let action = attribute_value(&page.html, "action")
                .ok_or("form declares no action attribute")?;
            let method = attribute_value(&page.html, "method")
                .ok_or("form declares no method attribute")?;
            (action, method)
        };

        let url = format!("{}{action}", self.site);
        let response = match method.to_ascii_lowercase().as_str() {
            "put" => {
                let body: BTreeMap<&str, &str> =
                    self.staged.iter().map(|(key, value)| (key.as_str(), value.as_str())).collect();
                self.client
                    .put(url)
                    .json(&body)
                    .send()
                    .await
                    .map_err(|err| format!("form submission failed: {err}"))?
            }
            other => return Err(format!("unsupported form method {other:?}")),
        };

        self.status = Some(response.status().as_u16());
        let payload: Value = response
            .json()
            .await
            .map_err(|err| format!("submission response was not JSON: {err}"))?;
        let page = self.page.as_mut().ok_or("no page loaded")?;
        if let Value::Object(fields) = payload {
            for (key, value) in fields {
                if page.html.contains(&format!("id=\"{key}\"")) {
                    page.text_overrides.insert(key, rendered_text(&value));
                }
            }
        }
        self.staged.clear();
        Ok(())
    }

    /// Returns the visible text of the element with the given id.
    pub fn text(&self, id: &str) -> Result<String, String> {
        let page = self.page.as_ref().ok_or("no page loaded")?;
        if let Some(updated) = page.text_overrides.get(id) {
            return Ok(updated.clone());
        }
        element_text(&page.html, id).ok_or_else(|| format!("page has no element with id {id:?}"))
    }
}

/// Extracts the first occurrence of `attr="..."` from the HTML.
fn attribute_value(html: &str, attr: &str) -> Option<String> {
    let marker = format!("{attr}=\"");
    let start = html.find(&marker)? + marker.len();
    let rest = &html[start..];
    let end = rest.find('"')?;
    Some(rest[..end].to_owned())
}

/// Extracts the inner text of the element carrying `id="..."`.
fn element_text(html: &str, id: &str) -> Option<String> {
    let marker = format!("id=\"{id}\"");
    let tag_start = html.find(&marker)?;
    let rest = &html[tag_start..];
    let open_end = rest.find('>')? + 1;
    let inner = &rest[open_end..];
    let close = inner.find('<')?;
    Some(inner[..close].trim().to_owned())
}

/// Renders a JSON response field as element text.
fn rendered_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
