//! The list query engine: filter, sort, paginate.
//!
//! [`ListQueryEngine::evaluate`] is a pure function of its inputs. It borrows
//! the record slice and returns references into it, so the result is always
//! a subset of the input and the input is never reordered or mutated.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::query::{Query, SortKey};
use crate::timestamp::parse_timestamp;
use crate::types::{FieldMapping, Record};

/// Items for one evaluation plus the counts a "load more" control needs.
#[derive(Debug, Serialize)]
pub struct QueryOutcome<'a, R> {
    /// Matching records in output order, limited to the page window.
    pub items: Vec<&'a R>,
    /// Number of records matching the filters before pagination.
    pub total_matches: usize,
    /// Whether matches exist after the returned window.
    pub has_more: bool,
}

/// Filters, sorts and paginates records according to a [`Query`].
///
/// One engine is configured per listing with the [`FieldMapping`] that says
/// which fields are searched and which ones the sort keys read.
#[derive(Debug, Clone)]
pub struct ListQueryEngine {
    mapping: FieldMapping,
}

impl ListQueryEngine {
    /// Create an engine for the given field mapping.
    pub fn new(mapping: FieldMapping) -> Self {
        Self { mapping }
    }

    /// The field mapping this engine was built with.
    pub fn mapping(&self) -> &FieldMapping {
        &self.mapping
    }

    /// Evaluate `query` against `records`.
    ///
    /// # Pipeline
    ///
    /// 1. Keep records passing the category filter and the search predicate
    /// 2. Stable-sort by the query's sort key (none keeps filtered order)
    /// 3. Slice to the page window, if any
    pub fn evaluate<'a, R: Record>(&self, records: &'a [R], query: &Query) -> Vec<&'a R> {
        self.evaluate_outcome(records, query).items
    }

    /// Like [`evaluate`](Self::evaluate), also reporting the total match
    /// count and whether more matches follow the window.
    pub fn evaluate_outcome<'a, R: Record>(
        &self,
        records: &'a [R],
        query: &Query,
    ) -> QueryOutcome<'a, R> {
        let term = query.normalized_term();
        tracing::trace!(term = %term, category = query.category.as_param(), "evaluating query");

        // 1. Filter.
        let mut matched: Vec<&'a R> = records
            .iter()
            .filter(|record| self.matches_term(*record, &term))
            .filter(|record| query.category.accepts(record.category()))
            .collect();

        // 2. Sort.
        if let Some(key) = query.sort {
            self.sort(&mut matched, key);
        }

        let total_matches = matched.len();
        tracing::debug!(
            total = records.len(),
            matched = total_matches,
            "query filtered records"
        );

        // 3. Paginate.
        let (items, has_more) = match query.pagination {
            Some(pagination) => {
                let window = pagination.window(total_matches);
                let has_more = window.end < total_matches;
                (matched[window].to_vec(), has_more)
            }
            None => (matched, false),
        };

        QueryOutcome {
            items,
            total_matches,
            has_more,
        }
    }

    /// Whether `record` passes both the search and category predicates.
    pub fn matches<R: Record>(&self, record: &R, query: &Query) -> bool {
        self.matches_term(record, &query.normalized_term())
            && query.category.accepts(record.category())
    }

    /// `term` must already be lowercased.
    fn matches_term<R: Record>(&self, record: &R, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        self.mapping.search_fields.iter().any(|name| {
            record
                .field(name)
                .is_some_and(|value| value.to_lowercase().contains(term))
        })
    }

    fn sort<R: Record>(&self, records: &mut Vec<&R>, key: SortKey) {
        match key {
            SortKey::PrimaryAscending => sort_by_text(records, &self.mapping.primary_field),
            SortKey::SecondaryAscending => sort_by_text(records, &self.mapping.secondary_field),
            SortKey::RecencyDescending => sort_by_recency(records),
        }
    }
}

/// Case-insensitive A–Z on one field; a missing field sorts as empty text.
fn sort_by_text<R: Record>(records: &mut Vec<&R>, field: &str) {
    let mut keyed: Vec<(String, &R)> = records
        .drain(..)
        .map(|record| {
            let key = record.field(field).unwrap_or_default().to_lowercase();
            (key, record)
        })
        .collect();
    // `sort_by` is stable: equal keys keep filtered-set order.
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    records.extend(keyed.into_iter().map(|(_, record)| record));
}

/// Newest first; unparseable timestamps go after all parseable ones.
fn sort_by_recency<R: Record>(records: &mut Vec<&R>) {
    let mut keyed: Vec<(Option<DateTime<Utc>>, &R)> = records
        .drain(..)
        .map(|record| (parse_timestamp(record.created_at()), record))
        .collect();
    keyed.sort_by(|a, b| compare_recency(a.0, b.0));
    records.extend(keyed.into_iter().map(|(_, record)| record));
}

fn compare_recency(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    // `None < Some`, so reversing puts newest first and unparseable last.
    b.cmp(&a)
}
