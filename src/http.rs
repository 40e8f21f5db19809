//! Shared HTTP client for remote content requests.

use std::time::Duration;

use crate::config::RemoteConfig;
use crate::error::SiteError;

/// User-Agent sent with every remote request.
pub const USER_AGENT: &str = concat!("cikadu/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] for the remote content source.
///
/// The client has:
/// - Timeout from config
/// - A fixed `cikadu/<version>` User-Agent
/// - A bounded redirect policy
///
/// # Errors
///
/// Returns [`SiteError::FetchUnavailable`] if the client cannot be constructed.
pub fn build_client(config: &RemoteConfig) -> Result<reqwest::Client, SiteError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| SiteError::FetchUnavailable(format!("failed to build HTTP client: {e}")))
}
