//! The single blocking fetch against the report API.

use std::time::Duration;

use somato_core::models::payload::ReportPayload;
use thiserror::Error;
use ureq::Agent;

/// The upstream service rejects requests without a browser-like agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("report service returned status {0}")]
    Status(u16),

    #[error("transport failure: {0}")]
    Transport(#[source] ureq::Error),

    #[error("undecodable report payload: {0}")]
    Decode(#[source] ureq::Error),
}

pub fn agent() -> Agent {
    Agent::config_builder()
        .timeout_global(Some(TIMEOUT))
        .build()
        .new_agent()
}

/// GET the payload JSON. Any non-success status or transport error is a
/// [`FetchError`]; nothing is retried.
pub fn fetch_report(agent: &Agent, url: &str) -> Result<ReportPayload, FetchError> {
    tracing::info!(url, "fetching report payload");
    let mut response = agent
        .get(url)
        .header("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| match e {
            ureq::Error::StatusCode(code) => FetchError::Status(code),
            other => FetchError::Transport(other),
        })?;

    response.body_mut().read_json().map_err(FetchError::Decode)
}
