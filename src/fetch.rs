//! Resource Fetching
//!
//! `GET` of JSON documents through the browser fetch API.

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::SiteError;

/// Fetch `path` and return the response body as text
pub async fn fetch_text(path: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("no window available")?;
    let response = JsFuture::from(window.fetch_with_str(path)).await.map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(format!("HTTP {} {}", response.status(), response.status_text()));
    }
    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string().ok_or_else(|| "response body is not text".to_string())
}

/// Fetch `path` and deserialize its JSON body
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, SiteError> {
    let body = fetch_text(path).await.map_err(|reason| SiteError::Fetch {
        path: path.to_string(),
        reason,
    })?;
    parse_json(path, &body)
}

/// Deserialize a JSON body, tagging failures with the resource path
pub fn parse_json<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, SiteError> {
    serde_json::from_str(body).map_err(|e| SiteError::Parse {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
