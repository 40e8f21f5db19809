//! Record sources: where listings get their records from.
//!
//! A listing asks a [`FallbackLoader`] for records. The loader tries the
//! remote table when one is configured and substitutes the built-in
//! fallback set when the remote is unconfigured or fails. Both cases take
//! the same path; only the log line differs.

pub mod remote;

use std::collections::HashSet;
use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;

use cikadu_query::Record;

use crate::error::Result;

pub use remote::RemoteSource;

/// A pluggable source of records.
///
/// Implementations return records ordered newest first. All
/// implementations must be `Send + Sync` so loaders can be shared across
/// tasks.
pub trait RecordSource<R>: Send + Sync {
    /// Fetch the full record list.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::FetchUnavailable`](crate::SiteError::FetchUnavailable)
    /// when the source cannot produce a list.
    fn list(&self) -> impl Future<Output = Result<Vec<R>>> + Send;

    /// Short name used in logs.
    fn name(&self) -> &str;
}

/// A fixed in-memory record set.
#[derive(Debug, Clone)]
pub struct StaticSource<R> {
    name: String,
    records: Vec<R>,
}

impl<R> StaticSource<R> {
    /// Create a source named `name` that always returns `records`.
    pub fn new(name: impl Into<String>, records: Vec<R>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }
}

impl<R: Clone + Send + Sync> RecordSource<R> for StaticSource<R> {
    async fn list(&self) -> Result<Vec<R>> {
        Ok(self.records.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Where a loaded record set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordOrigin {
    /// Returned by the remote source.
    Remote,
    /// The built-in fallback set.
    Fallback,
}

/// A record set plus its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRecords<R> {
    pub records: Vec<R>,
    pub origin: RecordOrigin,
}

impl<R> LoadedRecords<R> {
    /// Records returned by the remote source.
    pub fn remote(records: Vec<R>) -> Self {
        Self {
            records,
            origin: RecordOrigin::Remote,
        }
    }

    /// The built-in fallback records.
    pub fn fallback(records: Vec<R>) -> Self {
        Self {
            records,
            origin: RecordOrigin::Fallback,
        }
    }
}

/// Loads records from an optional remote source, substituting a fixed
/// fallback set when the remote is missing or fails.
#[derive(Debug, Clone)]
pub struct FallbackLoader<R, S = RemoteSource<R>> {
    resource: String,
    remote: Option<S>,
    fallback: Vec<R>,
}

impl<R, S> FallbackLoader<R, S>
where
    R: Clone,
    S: RecordSource<R>,
{
    /// Create a loader for `resource`. `remote` is `None` when no remote
    /// source is configured.
    pub fn new(resource: impl Into<String>, remote: Option<S>, fallback: Vec<R>) -> Self {
        Self {
            resource: resource.into(),
            remote,
            fallback,
        }
    }

    /// Whether a remote source is attached.
    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// The fallback record set.
    pub fn fallback_records(&self) -> &[R] {
        &self.fallback
    }

    /// Load records.
    ///
    /// Never fails: an unconfigured or failing remote yields the fallback
    /// set. A remote that answers with an empty list yields an empty list.
    pub async fn load(&self) -> LoadedRecords<R> {
        let Some(remote) = self.remote.as_ref() else {
            tracing::info!(
                resource = %self.resource,
                "remote source not configured, using fallback records"
            );
            return LoadedRecords::fallback(self.fallback.clone());
        };

        match remote.list().await {
            Ok(records) => {
                tracing::debug!(
                    resource = %self.resource,
                    source = remote.name(),
                    count = records.len(),
                    "remote source returned records"
                );
                LoadedRecords::remote(records)
            }
            Err(err) => {
                tracing::warn!(
                    resource = %self.resource,
                    source = remote.name(),
                    error = %err,
                    "remote source failed, using fallback records"
                );
                LoadedRecords::fallback(self.fallback.clone())
            }
        }
    }
}

/// Narrow untyped JSON rows into records.
///
/// Rows that do not deserialize into `R` are skipped with a warning. When
/// several rows share an id, the first one wins.
pub fn narrow_rows<R>(rows: Vec<serde_json::Value>, resource: &str) -> Vec<R>
where
    R: Record + DeserializeOwned,
{
    let total = rows.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(total);
    let mut records = Vec::with_capacity(total);

    for (index, row) in rows.into_iter().enumerate() {
        let record: R = match serde_json::from_value(row) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(resource, index, error = %err, "skipping malformed row");
                continue;
            }
        };
        if !seen.insert(record.id().to_owned()) {
            tracing::warn!(resource, id = record.id(), "skipping duplicate row");
            continue;
        }
        records.push(record);
    }

    if records.len() < total {
        tracing::debug!(resource, total, kept = records.len(), "narrowed remote rows");
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        id: String,
        name: String,
        created_at: String,
    }

    impl Record for Row {
        fn id(&self) -> &str {
            &self.id
        }

        fn field(&self, name: &str) -> Option<&str> {
            (name == "name").then_some(self.name.as_str())
        }

        fn category(&self) -> Option<&str> {
            None
        }

        fn created_at(&self) -> &str {
            &self.created_at
        }
    }

    fn row(id: &str) -> Row {
        Row {
            id: id.into(),
            name: format!("Row {id}"),
            created_at: "2024-01-01".into(),
        }
    }

    struct FailingSource;

    impl RecordSource<Row> for FailingSource {
        async fn list(&self) -> Result<Vec<Row>> {
            Err(SiteError::FetchUnavailable("connection refused".into()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[tokio::test]
    async fn unconfigured_remote_uses_fallback() {
        let loader: FallbackLoader<Row, StaticSource<Row>> =
            FallbackLoader::new("rows", None, vec![row("f1")]);
        assert!(!loader.has_remote());
        let loaded = loader.load().await;
        assert_eq!(loaded.origin, RecordOrigin::Fallback);
        assert_eq!(loaded.records, vec![row("f1")]);
    }

    #[tokio::test]
    async fn failing_remote_uses_fallback() {
        let loader = FallbackLoader::new("rows", Some(FailingSource), vec![row("f1"), row("f2")]);
        let loaded = loader.load().await;
        assert_eq!(loaded.origin, RecordOrigin::Fallback);
        assert_eq!(loaded.records, loader.fallback_records());
    }

    #[tokio::test]
    async fn working_remote_is_used() {
        let remote = StaticSource::new("static", vec![row("r1")]);
        let loader = FallbackLoader::new("rows", Some(remote), vec![row("f1")]);
        let loaded = loader.load().await;
        assert_eq!(loaded.origin, RecordOrigin::Remote);
        assert_eq!(loaded.records, vec![row("r1")]);
    }

    #[tokio::test]
    async fn empty_remote_list_is_kept_empty() {
        let remote: StaticSource<Row> = StaticSource::new("static", vec![]);
        let loader = FallbackLoader::new("rows", Some(remote), vec![row("f1")]);
        let loaded = loader.load().await;
        assert_eq!(loaded.origin, RecordOrigin::Remote);
        assert!(loaded.records.is_empty());
    }

    #[test]
    fn narrow_rows_skips_malformed_rows() {
        let rows = vec![
            json!({"id": "1", "name": "Satu", "created_at": "2024-01-01"}),
            json!({"id": "2", "created_at": "2024-01-01"}),
            json!("not an object"),
            json!({"id": "3", "name": "Tiga", "created_at": "2024-01-03"}),
        ];
        let records: Vec<Row> = narrow_rows(rows, "rows");
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn narrow_rows_keeps_first_duplicate() {
        let rows = vec![
            json!({"id": "1", "name": "Pertama", "created_at": "2024-01-01"}),
            json!({"id": "1", "name": "Kedua", "created_at": "2024-01-02"}),
        ];
        let records: Vec<Row> = narrow_rows(rows, "rows");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Pertama");
    }

    #[test]
    fn loaded_records_constructors_set_origin() {
        assert_eq!(LoadedRecords::remote(vec![row("a")]).origin, RecordOrigin::Remote);
        assert_eq!(LoadedRecords::<Row>::fallback(vec![]).origin, RecordOrigin::Fallback);
    }
}
