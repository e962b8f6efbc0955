//! newsfeed-rs: fetch a news listing from a JSON content API and turn it into
//! display-ready records.
//!
//! The pipeline is linear: request URL → one GET (15 s connect / 10 s read
//! timeout) → `200 OK` body → [`NewsItem`]s. Absent fields are replaced by fixed
//! placeholder strings such as [`NO_TITLE`] rather than failing the parse.
//!
//! The lenient entry points ([`fetch_news`], [`NewsBuilder::fetch`],
//! [`extract_news`]) log problems and return an empty or partial list. The
//! `try_*` variants return a [`NewsError`] instead.
//!
//! ```no_run
//! use newsfeed_rs::NewsClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = NewsClient::builder().build()?;
//! let items = client
//!     .news("https://content.guardianapis.com/search?q=climate&show-tags=contributor&show-fields=thumbnail&api-key=test")
//!     .try_fetch()
//!     .await?;
//! println!("{} articles", items.len());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod news;

pub use crate::core::{NewsClient, NewsClientBuilder, NewsError};
pub use news::{
    NO_IMAGE, NO_NEWS_LINK, NO_PUBLICATION_DATE, NO_SECTION_NAME, NO_TITLE, NewsBuilder,
    NewsItem, UNKNOWN_AUTHOR, extract_news, fetch_news, fetch_news_blocking, try_extract_news,
};

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls are no-ops.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
