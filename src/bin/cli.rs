//! CLI binary for cikadu.

use cikadu::content::format_date_id;
use cikadu::{ArticleDetail, Site, SiteConfig};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Cikadu: browse Desa Cikadu news and the business directory.
#[derive(Parser)]
#[command(name = "cikadu", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// List news articles.
    News {
        /// Case-insensitive search in title and excerpt.
        #[arg(short, long)]
        search: Option<String>,
        /// Category value, or `all`.
        #[arg(short = 'k', long)]
        category: Option<String>,
        /// How many pages of results to show.
        #[arg(short, long, default_value_t = 1)]
        pages: usize,
    },

    /// List businesses.
    Businesses {
        /// Case-insensitive search in name, description and location.
        #[arg(short, long)]
        search: Option<String>,
        /// Sort by `name`, `location` or `created_at`.
        #[arg(long)]
        sort: Option<String>,
        /// How many pages of results to show.
        #[arg(short, long, default_value_t = 1)]
        pages: usize,
    },

    /// Show one article with related articles.
    Article {
        /// Article id.
        id: String,
    },

    /// Show news categories with article counts.
    Categories,

    /// Print the default config file path.
    ConfigPath,
}

#[derive(Serialize)]
struct ListingOutput<'a, R> {
    origin: Option<cikadu::RecordOrigin>,
    total_matches: usize,
    has_more: bool,
    items: Vec<&'a R>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cikadu=info,cikadu_query=info")),
        )
        .init();

    let cli = Cli::parse();

    if let Command::ConfigPath = cli.command {
        println!("{}", SiteConfig::default_config_path().display());
        return Ok(());
    }

    let config = load_config(cli.config.as_deref())?;
    let site = Site::from_config(config)?;

    match cli.command {
        Command::News {
            search,
            category,
            pages,
        } => {
            let mut view = site.news_view().await;
            if let Some(term) = search {
                view.set_search_term(term);
            }
            if let Some(ref category) = category {
                view.set_category(category);
            }
            reveal(&mut view, pages);
            if cli.json {
                print_json(&listing_output(&view))?;
            } else {
                print_articles(&view);
            }
        }
        Command::Businesses {
            search,
            sort,
            pages,
        } => {
            let mut view = site.business_view().await;
            if let Some(term) = search {
                view.set_search_term(term);
            }
            if let Some(ref sort) = sort {
                view.set_sort_param(sort);
            }
            reveal(&mut view, pages);
            if cli.json {
                print_json(&listing_output(&view))?;
            } else {
                print_businesses(&view);
            }
        }
        Command::Article { id } => {
            let loaded = site.load_articles().await;
            let related = site.config().listing.related_count;
            match ArticleDetail::build(&loaded.records, &id, related) {
                Some(detail) if cli.json => print_json(&detail)?,
                Some(detail) => print_article(&detail),
                None => anyhow::bail!("article {id} not found"),
            }
        }
        Command::Categories => {
            let view = site.news_view().await;
            let counts = view.news_categories();
            if cli.json {
                print_json(&counts)?;
            } else {
                for count in counts {
                    println!("{:<14} {} ({})", count.value, count.label, count.count);
                }
            }
        }
        Command::ConfigPath => {}
    }

    Ok(())
}

/// Explicit path, else the default path if it exists, else defaults.
/// Environment overrides apply last.
fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<SiteConfig> {
    let config = match path {
        Some(path) => SiteConfig::from_file(path)?,
        None => {
            let default_path = SiteConfig::default_config_path();
            if default_path.exists() {
                SiteConfig::from_file(&default_path)?
            } else {
                SiteConfig::default()
            }
        }
    };
    Ok(config.with_env_overrides())
}

fn reveal<R: cikadu_query::Record>(view: &mut cikadu::ListingView<R>, pages: usize) {
    for _ in 1..pages.max(1) {
        if !view.load_more() {
            break;
        }
    }
}

fn listing_output<R: cikadu_query::Record>(view: &cikadu::ListingView<R>) -> ListingOutput<'_, R> {
    let outcome = view.outcome();
    ListingOutput {
        origin: view.origin(),
        total_matches: outcome.total_matches,
        has_more: outcome.has_more,
        items: outcome.items,
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_articles(view: &cikadu::NewsView) {
    let results = view.results();
    if results.is_empty() {
        println!("Tidak ada berita yang ditemukan.");
        return;
    }
    for (index, article) in results.iter().enumerate() {
        let marker = if index == 0 { "★" } else { "-" };
        println!(
            "{marker} [{}] {} ({}, {})",
            article.id,
            article.title,
            article.category.to_uppercase(),
            format_date_id(&article.created_at)
        );
        println!("    {}", article.excerpt);
    }
    if view.has_more() {
        println!("… {} berita lainnya", view.total_matches() - results.len());
    }
}

fn print_businesses(view: &cikadu::BusinessView) {
    let results = view.results();
    if results.is_empty() {
        println!("Tidak ada usaha yang ditemukan.");
        return;
    }
    for (index, business) in results.iter().enumerate() {
        let marker = if index == 0 { "★" } else { "-" };
        println!("{marker} [{}] {} - {}", business.id, business.name, business.location);
        println!("    {}  {}", business.contact, business.tel_link());
    }
    if view.has_more() {
        println!("… {} usaha lainnya", view.total_matches() - results.len());
    }
}

fn print_article(detail: &ArticleDetail<'_>) {
    let article = detail.article;
    println!("{}", article.title);
    println!(
        "{} · {} · {} menit baca",
        article.author, detail.published, detail.reading_minutes
    );
    println!();
    println!("{}", cikadu::detail::plain_text(&article.content));
    if !detail.related.is_empty() {
        println!();
        println!("Berita terkait:");
        for related in &detail.related {
            println!("- [{}] {}", related.id, related.title);
        }
    }
}
