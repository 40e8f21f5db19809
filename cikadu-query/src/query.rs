//! Query shape: search term, category filter, sort key, pagination window.
//!
//! [`Query`] is plain data owned by the caller and handed to the engine on
//! every evaluation. Use the builder methods for typed construction or
//! [`Query::from_params`] for raw UI/CLI strings, where anything malformed
//! degrades to "no filter" instead of failing.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, Result};

/// Sentinel category value meaning "do not filter by category".
pub const ALL_CATEGORIES: &str = "all";

/// Exact-match category filter.
///
/// Serialized as the plain parameter string (`"all"` or the category value).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Every record passes.
    #[default]
    All,
    /// Only records whose category equals this value pass.
    Only(String),
}

impl CategoryFilter {
    /// Parse a raw category value. `"all"`, the empty string and
    /// whitespace map to [`CategoryFilter::All`].
    pub fn parse(value: &str) -> Self {
        if is_all_sentinel(value) {
            Self::All
        } else {
            Self::Only(value.trim().to_owned())
        }
    }

    /// Whether a record with the given category passes this filter.
    ///
    /// `Only` holding the `"all"` sentinel or a blank value accepts
    /// everything, same as [`CategoryFilter::All`].
    pub fn accepts(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) if is_all_sentinel(wanted) => true,
            Self::Only(wanted) => category == Some(wanted.as_str()),
        }
    }

    /// The value as it appears in query parameters.
    pub fn as_param(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(value) => value,
        }
    }
}

fn is_all_sentinel(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == ALL_CATEGORIES
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_param().to_owned()
    }
}

/// Supported orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Primary text field (title/name), A–Z.
    PrimaryAscending,
    /// Secondary field (location/author), A–Z.
    SecondaryAscending,
    /// Creation timestamp, newest first.
    RecencyDescending,
}

impl SortKey {
    /// The canonical parameter name for this key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PrimaryAscending => "name",
            Self::SecondaryAscending => "location",
            Self::RecencyDescending => "created_at",
        }
    }

    /// Returns all sort keys.
    pub fn all() -> &'static [SortKey] {
        &[
            Self::PrimaryAscending,
            Self::SecondaryAscending,
            Self::RecencyDescending,
        ]
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" | "title" | "primary" => Ok(Self::PrimaryAscending),
            "location" | "author" | "secondary" => Ok(Self::SecondaryAscending),
            "created_at" | "recent" | "latest" | "newest" => Ok(Self::RecencyDescending),
            other => Err(QueryError::UnknownSortKey(other.to_owned())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A 1-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page number. Page 0 is read as page 1.
    pub page: usize,
    /// Items per page. Zero disables pagination.
    pub page_size: usize,
}

impl Pagination {
    /// Create a window for `page` of `page_size` items.
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// First page of `page_size` items.
    pub fn first(page_size: usize) -> Self {
        Self::new(1, page_size)
    }

    /// Index range of this window within a sequence of `len` items.
    ///
    /// A window starting past the end yields an empty range. A zero
    /// `page_size` yields the whole sequence.
    pub fn window(&self, len: usize) -> Range<usize> {
        if self.page_size == 0 {
            return 0..len;
        }
        let page = self.page.max(1);
        let start = (page - 1).saturating_mul(self.page_size).min(len);
        let end = start.saturating_add(self.page_size).min(len);
        start..end
    }
}

/// Search term, category filter, sort key and optional page window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    /// Case-insensitive substring; empty matches everything.
    pub search_term: String,
    /// Exact-match category filter.
    pub category: CategoryFilter,
    /// Ordering. `None` keeps filtered-set order.
    pub sort: Option<SortKey>,
    /// Page window. `None` returns every match.
    pub pagination: Option<Pagination>,
}

impl Query {
    /// An empty query: no search, all categories, input order, no paging.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Set the category filter from a raw value (see [`CategoryFilter::parse`]).
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = CategoryFilter::parse(category);
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the page window.
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Build a query from raw parameters, degrading instead of failing.
    ///
    /// - `search`: `None` means no search.
    /// - `category`: `None`, empty or `"all"` means no category filter.
    /// - `sort`: unknown names keep input order.
    /// - `page`/`page_size`: pagination only when `page_size` is a positive
    ///   number; a missing or unparseable `page` means page 1.
    pub fn from_params(
        search: Option<&str>,
        category: Option<&str>,
        sort: Option<&str>,
        page: Option<&str>,
        page_size: Option<&str>,
    ) -> Self {
        let sort = sort.and_then(|raw| match raw.parse::<SortKey>() {
            Ok(key) => Some(key),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring sort parameter");
                None
            }
        });

        let page_size = page_size
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|size| *size > 0);
        let pagination = page_size.map(|size| {
            let page = page
                .and_then(|raw| raw.trim().parse::<usize>().ok())
                .unwrap_or(1);
            Pagination::new(page, size)
        });

        Self {
            search_term: search.unwrap_or_default().to_owned(),
            category: category.map_or(CategoryFilter::All, CategoryFilter::parse),
            sort,
            pagination,
        }
    }

    /// The search term normalised for matching: lowercased, whitespace
    /// kept as typed. Empty means "match everything".
    pub fn normalized_term(&self) -> String {
        self.search_term.to_lowercase()
    }
}
