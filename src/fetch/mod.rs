//! Bundle download.
//!
//! One GET per run; no retries. Redirects follow reqwest's default policy.

use std::time::Duration;

use crate::error::ConvertError;

pub const DEFAULT_BUNDLE_URL: &str = "https://raw.githubusercontent.com/prometheus-operator/prometheus-operator/{version}/bundle.yaml";

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Substitute every `{version}` in `template`.
pub fn bundle_url(template: &str, version: &str) -> String {
    template.replace("{version}", version)
}

/// Fetch the bundle body as text. Any non-2xx status is an error.
pub async fn fetch_bundle(url: &str, timeout: Duration) -> Result<String, ConvertError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()?;

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(ConvertError::FetchStatus {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    let body = response.text().await?;
    tracing::debug!(url, bytes = body.len(), "Downloaded bundle");
    Ok(body)
}
