//! Wiring: configuration → loaders → views.

use crate::config::SiteConfig;
use crate::content::business::fallback_businesses;
use crate::content::news::fallback_articles;
use crate::content::{Business, NewsArticle};
use crate::error::Result;
use crate::source::{FallbackLoader, LoadedRecords, RemoteSource};
use crate::view::{BusinessView, NewsView};

/// The site's content loaders, built once from configuration.
#[derive(Debug, Clone)]
pub struct Site {
    config: SiteConfig,
    news: FallbackLoader<NewsArticle>,
    businesses: FallbackLoader<Business>,
}

impl Site {
    /// Validate `config` and build a loader per listing.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`](crate::SiteError::Config) if the
    /// configuration is invalid. An unconfigured remote is not an error.
    pub fn from_config(config: SiteConfig) -> Result<Self> {
        config.validate()?;

        let news_remote = RemoteSource::from_config(&config.remote, &config.listing.news_table)?;
        let business_remote =
            RemoteSource::from_config(&config.remote, &config.listing.business_table)?;

        if news_remote.is_none() {
            tracing::info!("no remote content source configured; serving built-in records");
        }

        Ok(Self {
            news: FallbackLoader::new("news", news_remote, fallback_articles()),
            businesses: FallbackLoader::new("businesses", business_remote, fallback_businesses()),
            config,
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Load news articles (remote or fallback).
    pub async fn load_articles(&self) -> LoadedRecords<NewsArticle> {
        self.news.load().await
    }

    /// Load businesses (remote or fallback).
    pub async fn load_businesses(&self) -> LoadedRecords<Business> {
        self.businesses.load().await
    }

    /// A news view populated with freshly loaded articles.
    pub async fn news_view(&self) -> NewsView {
        let mut view = NewsView::news(self.config.listing.page_size);
        view.replace_records(self.load_articles().await);
        view
    }

    /// A business view populated with freshly loaded businesses.
    pub async fn business_view(&self) -> BusinessView {
        let mut view = BusinessView::businesses(self.config.listing.page_size);
        view.replace_records(self.load_businesses().await);
        view
    }
}
