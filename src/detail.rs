//! Article detail: lookup by id, reading time, related articles.

use scraper::Html;
use serde::Serialize;

use crate::content::NewsArticle;

/// Reading speed used for the "n menit baca" estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Everything the article page shows besides the article itself.
#[derive(Debug, Serialize)]
pub struct ArticleDetail<'a> {
    pub article: &'a NewsArticle,
    pub reading_minutes: usize,
    pub published: String,
    pub related: Vec<&'a NewsArticle>,
}

impl<'a> ArticleDetail<'a> {
    /// Build the detail for article `id`, or `None` if no such article is
    /// loaded (the caller routes back to the listing).
    pub fn build(records: &'a [NewsArticle], id: &str, related_count: usize) -> Option<Self> {
        let article = find_article(records, id)?;
        Some(Self {
            article,
            reading_minutes: reading_time_minutes(&article.content),
            published: crate::content::format_date_id(&article.created_at),
            related: related_articles(records, id, related_count),
        })
    }
}

/// Find an article by id.
pub fn find_article<'a>(records: &'a [NewsArticle], id: &str) -> Option<&'a NewsArticle> {
    records.iter().find(|article| article.id == id)
}

/// Visible text of an HTML fragment.
pub fn plain_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    fragment.root_element().text().collect::<Vec<_>>().join(" ")
}

/// Minutes to read an HTML body at [`WORDS_PER_MINUTE`], rounded up, at
/// least one.
pub fn reading_time_minutes(content_html: &str) -> usize {
    let words = plain_text(content_html).split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Other articles in record order, at most `limit`.
pub fn related_articles<'a>(
    records: &'a [NewsArticle],
    current_id: &str,
    limit: usize,
) -> Vec<&'a NewsArticle> {
    records
        .iter()
        .filter(|article| article.id != current_id)
        .take(limit)
        .collect()
}
