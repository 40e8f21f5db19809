//! Site content: record types, fallback data and display helpers.

pub mod business;
pub mod news;

use chrono::Datelike;
use serde::Serialize;

pub use business::Business;
pub use news::NewsArticle;

/// A category choice offered by a listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOption {
    /// Value matched against record categories (`all` matches everything).
    pub value: &'static str,
    /// Display label.
    pub label: &'static str,
}

impl CategoryOption {
    /// An option with parameter `value` shown as `label`.
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// A category choice together with how many loaded records it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub value: &'static str,
    pub label: &'static str,
    pub count: usize,
}

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Long Indonesian date for a timestamp, e.g. `15 Januari 2024`.
///
/// Returns the input unchanged if it cannot be parsed.
pub fn format_date_id(created_at: &str) -> String {
    match cikadu_query::parse_timestamp(created_at) {
        Some(dt) => {
            let month = MONTHS_ID[dt.month0() as usize];
            format!("{} {} {}", dt.day(), month, dt.year())
        }
        None => created_at.to_owned(),
    }
}
