//! REST table source (PostgREST / Supabase shape).
//!
//! Lists a table with `GET {base}/rest/v1/{table}?select=*&order=created_at.desc`,
//! authenticating with the project's public key in both the `apikey` and
//! `Authorization` headers.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use url::Url;

use cikadu_query::Record;

use crate::config::RemoteConfig;
use crate::error::{Result, SiteError};
use crate::http::build_client;

use super::{RecordSource, narrow_rows};

/// A remote table whose rows deserialize into `R`.
#[derive(Debug, Clone)]
pub struct RemoteSource<R> {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
    table: String,
    _record: PhantomData<fn() -> R>,
}

impl<R> RemoteSource<R> {
    /// Build a source for `table` under the project at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] if `base_url` is not a valid URL, or
    /// [`SiteError::FetchUnavailable`] if the HTTP client cannot be built.
    pub fn new(config: &RemoteConfig, base_url: &str, api_key: &str, table: &str) -> Result<Self> {
        let endpoint = table_endpoint(base_url, table)?;
        let client = build_client(config)?;
        Ok(Self {
            client,
            endpoint,
            api_key: api_key.to_owned(),
            table: table.to_owned(),
            _record: PhantomData,
        })
    }

    /// Build a source from configuration, or `None` when the remote is not
    /// configured.
    ///
    /// # Errors
    ///
    /// Same as [`RemoteSource::new`].
    pub fn from_config(config: &RemoteConfig, table: &str) -> Result<Option<Self>> {
        if !config.is_configured() {
            return Ok(None);
        }
        match (config.url.as_deref(), config.anon_key.as_deref()) {
            (Some(url), Some(key)) => Self::new(config, url.trim(), key.trim(), table).map(Some),
            _ => Ok(None),
        }
    }

    /// The full list URL, including query parameters.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The remote table name.
    pub fn table(&self) -> &str {
        &self.table
    }
}

impl<R> RecordSource<R> for RemoteSource<R>
where
    R: Record + DeserializeOwned + Send,
{
    async fn list(&self) -> Result<Vec<R>> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SiteError::FetchUnavailable(format!("{}: {e}", self.table)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SiteError::FetchUnavailable(format!(
                "{}: HTTP {status}",
                self.table
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SiteError::FetchUnavailable(format!("{}: invalid body: {e}", self.table)))?;

        match body {
            serde_json::Value::Array(rows) => Ok(narrow_rows(rows, &self.table)),
            serde_json::Value::Null => Err(SiteError::FetchUnavailable(format!(
                "{}: empty response",
                self.table
            ))),
            _ => Err(SiteError::FetchUnavailable(format!(
                "{}: expected a JSON array",
                self.table
            ))),
        }
    }

    fn name(&self) -> &str {
        &self.table
    }
}

/// `{base}/rest/v1/{table}?select=*&order=created_at.desc`
fn table_endpoint(base_url: &str, table: &str) -> Result<Url> {
    let mut base =
        Url::parse(base_url).map_err(|e| SiteError::Config(format!("remote url is invalid: {e}")))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    let mut endpoint = base
        .join(&format!("rest/v1/{table}"))
        .map_err(|e| SiteError::Config(format!("invalid table name {table:?}: {e}")))?;
    endpoint
        .query_pairs_mut()
        .append_pair("select", "*")
        .append_pair("order", "created_at.desc");
    Ok(endpoint)
}
