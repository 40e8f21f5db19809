//! Cikadu: content core for the Desa Cikadu village profile site.
//!
//! Listing pages follow one shape: load records from the remote content
//! tables or fall back to built-in records, then filter, sort and page them
//! in memory for display.
//!
//! # Architecture
//!
//! - **Content**: news articles and businesses, their built-in fallback sets
//! - **Sources**: remote REST tables with fallback substitution
//! - **Views**: per-page state (records + query) evaluated by `cikadu-query`
//! - **Detail**: article lookup, reading time, related articles

pub mod config;
pub mod content;
pub mod detail;
pub mod error;
pub mod http;
pub mod site;
pub mod source;
pub mod view;

pub use config::SiteConfig;
pub use content::{Business, NewsArticle};
pub use detail::ArticleDetail;
pub use error::{Result, SiteError};
pub use site::Site;
pub use source::{FallbackLoader, LoadedRecords, RecordOrigin, RecordSource};
pub use view::{BusinessView, ListingView, NewsView};
