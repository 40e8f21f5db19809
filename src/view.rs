//! Listing views: the state one listing page owns.
//!
//! A [`ListingView`] holds the current record set, the current query and how
//! many pages of results are revealed. It re-runs the engine on every read,
//! so results always reflect the latest record set and query. Record sets
//! replace each other wholesale (last write wins).

use cikadu_query::{ListQueryEngine, Pagination, Query, QueryOutcome, Record, SortKey};

use crate::content::{business, news, Business, CategoryCount, CategoryOption, NewsArticle};
use crate::source::{LoadedRecords, RecordOrigin};

/// Per-page listing state.
#[derive(Debug, Clone)]
pub struct ListingView<R> {
    engine: ListQueryEngine,
    records: Vec<R>,
    origin: Option<RecordOrigin>,
    query: Query,
    page_size: usize,
    revealed_pages: usize,
    loading: bool,
}

/// News listing state.
pub type NewsView = ListingView<NewsArticle>;

/// Business directory state.
pub type BusinessView = ListingView<Business>;

impl<R: Record> ListingView<R> {
    /// Create an empty view in the loading state.
    ///
    /// `default_query` supplies the initial search, category and sort; its
    /// pagination is ignored in favour of `page_size` windows.
    pub fn new(engine: ListQueryEngine, default_query: Query, page_size: usize) -> Self {
        Self {
            engine,
            records: Vec::new(),
            origin: None,
            query: Query {
                pagination: None,
                ..default_query
            },
            page_size,
            revealed_pages: 1,
            loading: true,
        }
    }

    /// Mark a fetch as in flight. The current records stay visible.
    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// Replace the record set with a freshly loaded one.
    pub fn replace_records(&mut self, loaded: LoadedRecords<R>) {
        tracing::debug!(count = loaded.records.len(), origin = ?loaded.origin, "listing records replaced");
        self.records = loaded.records;
        self.origin = Some(loaded.origin);
        self.loading = false;
        self.revealed_pages = 1;
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Origin of the current record set, `None` before the first load.
    pub fn origin(&self) -> Option<RecordOrigin> {
        self.origin
    }

    /// All loaded records in load order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// The current query (without the page window).
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Set the search term and collapse to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.revealed_pages = 1;
    }

    /// Select a category; `"all"` or empty clears the filter.
    pub fn set_category(&mut self, category: &str) {
        self.query = std::mem::take(&mut self.query).with_category(category);
        self.revealed_pages = 1;
    }

    /// Set the sort key; `None` keeps input order.
    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.query.sort = sort;
        self.revealed_pages = 1;
    }

    /// Select a sort by its parameter name; unknown names keep input order.
    pub fn set_sort_param(&mut self, raw: &str) {
        let sort = Query::from_params(None, None, Some(raw), None, None).sort;
        self.set_sort(sort);
    }

    /// Engine output for the current query and revealed window.
    pub fn outcome(&self) -> QueryOutcome<'_, R> {
        let visible = self.page_size.saturating_mul(self.revealed_pages);
        let query = self
            .query
            .clone()
            .with_pagination(Pagination::first(visible));
        self.engine.evaluate_outcome(&self.records, &query)
    }

    /// Visible results in display order.
    pub fn results(&self) -> Vec<&R> {
        self.outcome().items
    }

    /// The highlighted first result.
    pub fn featured(&self) -> Option<&R> {
        self.results().into_iter().next()
    }

    /// Visible results after the featured one.
    pub fn remaining(&self) -> Vec<&R> {
        self.results().into_iter().skip(1).collect()
    }

    /// Number of records matching the query, ignoring the window.
    pub fn total_matches(&self) -> usize {
        self.outcome().total_matches
    }

    /// Whether more matches exist beyond the revealed window.
    pub fn has_more(&self) -> bool {
        self.outcome().has_more
    }

    /// Reveal one more page. Returns `false` if nothing was left to reveal.
    pub fn load_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.revealed_pages += 1;
        true
    }

    /// Loaded, and the query matched nothing.
    pub fn is_empty_state(&self) -> bool {
        !self.loading && self.total_matches() == 0
    }

    /// How many loaded records each category option covers.
    pub fn category_counts(&self, options: &[CategoryOption]) -> Vec<CategoryCount> {
        options
            .iter()
            .map(|option| {
                let filter = cikadu_query::CategoryFilter::parse(option.value);
                let count = self
                    .records
                    .iter()
                    .filter(|record| filter.accepts(record.category()))
                    .count();
                CategoryCount {
                    value: option.value,
                    label: option.label,
                    count,
                }
            })
            .collect()
    }
}

impl NewsView {
    /// News listing: all categories, newest first.
    pub fn news(page_size: usize) -> Self {
        Self::new(
            ListQueryEngine::new(news::field_mapping()),
            Query::new()
                .with_category(cikadu_query::ALL_CATEGORIES)
                .with_sort(SortKey::RecencyDescending),
            page_size,
        )
    }

    /// Category options with counts over the loaded articles.
    pub fn news_categories(&self) -> Vec<CategoryCount> {
        self.category_counts(news::CATEGORIES)
    }
}

impl BusinessView {
    /// Business directory: sorted by name.
    pub fn businesses(page_size: usize) -> Self {
        let default_sort = business::SORT_OPTIONS
            .first()
            .map_or(SortKey::PrimaryAscending, |option| option.key);
        Self::new(
            ListQueryEngine::new(business::field_mapping()),
            Query::new().with_sort(default_sort),
            page_size,
        )
    }
}
