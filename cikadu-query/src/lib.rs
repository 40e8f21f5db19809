//! # cikadu-query
//!
//! In-memory list querying for the Desa Cikadu listings.
//!
//! Every listing page (news, business directory) runs the same shape of
//! logic over the records it has loaded: keep records whose text fields
//! contain the search term, keep records in the selected category, order
//! them, and cut out the visible window. This crate is that logic, once.
//!
//! ## Design
//!
//! - [`Record`] exposes named text fields, a category and a timestamp
//! - [`FieldMapping`] says which fields a listing searches and sorts on
//! - [`Query`] is plain data owned by the caller
//! - [`ListQueryEngine::evaluate`] is pure: no I/O, no mutation, no errors
//!
//! Malformed query input degrades to "no filter" or "input order" rather
//! than failing.

pub mod engine;
pub mod error;
pub mod query;
pub mod timestamp;
pub mod types;

pub use engine::{ListQueryEngine, QueryOutcome};
pub use error::{QueryError, Result};
pub use query::{CategoryFilter, Pagination, Query, SortKey, ALL_CATEGORIES};
pub use timestamp::parse_timestamp;
pub use types::{FieldMapping, Record};

/// Evaluate `query` against `records` with a one-off engine.
///
/// Convenience wrapper around [`ListQueryEngine::evaluate`] for callers
/// that do not keep an engine around.
///
/// # Examples
///
/// ```
/// use cikadu_query::{evaluate, FieldMapping, Query, Record};
///
/// struct Shop { id: String, name: String }
///
/// impl Record for Shop {
///     fn id(&self) -> &str { &self.id }
///     fn field(&self, name: &str) -> Option<&str> {
///         (name == "name").then_some(self.name.as_str())
///     }
///     fn category(&self) -> Option<&str> { None }
///     fn created_at(&self) -> &str { "2024-01-01" }
/// }
///
/// let shops = vec![
///     Shop { id: "1".into(), name: "Kebun Hijau".into() },
///     Shop { id: "2".into(), name: "Sanggar Emas".into() },
/// ];
/// let mapping = FieldMapping::new(&["name"], "name", "name");
/// let hits = evaluate(&mapping, &shops, &Query::new().with_search("sang"));
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].id(), "2");
/// ```
pub fn evaluate<'a, R: Record>(mapping: &FieldMapping, records: &'a [R], query: &Query) -> Vec<&'a R> {
    ListQueryEngine::new(mapping.clone()).evaluate(records, query)
}
