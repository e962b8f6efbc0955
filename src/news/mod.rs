mod api;
mod extract;
mod model;
mod wire;

pub use extract::{extract_news, try_extract_news};
pub use model::{
    NO_IMAGE, NO_NEWS_LINK, NO_PUBLICATION_DATE, NO_SECTION_NAME, NO_TITLE, NewsItem,
    UNKNOWN_AUTHOR,
};

use crate::core::{NewsClient, NewsError, net};

/// A builder for fetching one news listing.
///
/// The request URL is used as given; assembling the query string (API key,
/// search terms, `show-fields=thumbnail`, `show-tags=contributor`, ...) is up to
/// the caller.
pub struct NewsBuilder {
    client: NewsClient,
    url: String,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for a complete request URL.
    pub fn new(client: &NewsClient, url: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            url: url.into(),
        }
    }

    /// Executes the request and returns whatever could be read.
    ///
    /// Failures are logged, not returned: a bad URL, a network error or a
    /// non-200 status give an empty list, and a broken body gives the items
    /// parsed before the problem.
    #[tracing::instrument(skip(self), fields(url = net::without_query(&self.url)))]
    pub async fn fetch(self) -> Vec<NewsItem> {
        match api::fetch_body(&self.client, &self.url).await {
            Ok(body) => extract_news(&body).unwrap_or_default(),
            Err(NewsError::Status { status, url }) => {
                tracing::warn!(status, url = %url, "news request did not return 200");
                Vec::new()
            }
            Err(e @ NewsError::Url(_)) => {
                tracing::error!(error = %e, "problem building the URL");
                Vec::new()
            }
            Err(e) => {
                tracing::error!(error = %e, "problem making the HTTP request");
                Vec::new()
            }
        }
    }

    /// Executes the request and reports every failure to the caller.
    ///
    /// # Errors
    ///
    /// Returns a `NewsError` if the URL does not parse, the request fails, the
    /// status is not `200`, or the body is not a well-formed listing.
    #[tracing::instrument(skip(self), err, fields(url = net::without_query(&self.url)))]
    pub async fn try_fetch(self) -> Result<Vec<NewsItem>, NewsError> {
        let body = api::fetch_body(&self.client, &self.url).await?;
        try_extract_news(&body)
    }

    /// Synchronous form of [`NewsBuilder::fetch`].
    ///
    /// Drives the request on a private current-thread runtime. Inside an async
    /// context no request is made: the call is logged and returns an empty list.
    pub fn fetch_blocking(self) -> Vec<NewsItem> {
        if tokio::runtime::Handle::try_current().is_ok() {
            tracing::error!(
                url = net::without_query(&self.url),
                "blocking fetch called from inside an async runtime"
            );
            return Vec::new();
        }
        match blocking_runtime() {
            Ok(rt) => rt.block_on(self.fetch()),
            Err(e) => {
                tracing::error!(error = %e, "could not start runtime for blocking fetch");
                Vec::new()
            }
        }
    }
}

fn blocking_runtime() -> Result<tokio::runtime::Runtime, NewsError> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

fn default_client() -> Option<NewsClient> {
    NewsClient::builder()
        .build()
        .inspect_err(|e| tracing::error!(error = %e, "could not build HTTP client"))
        .ok()
}

/// Fetch and parse a news listing with the default timeouts.
///
/// Never fails; see [`NewsBuilder::fetch`] for how problems are handled.
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() {
/// let url = "https://content.guardianapis.com/search?q=rust&show-tags=contributor&show-fields=thumbnail&api-key=test";
/// for item in newsfeed_rs::fetch_news(url).await {
///     println!("{} | {} | {}", item.publication_date, item.section_name, item.title);
/// }
/// # }
/// ```
pub async fn fetch_news(url: &str) -> Vec<NewsItem> {
    match default_client() {
        Some(client) => client.news(url).fetch().await,
        None => Vec::new(),
    }
}

/// Blocking form of [`fetch_news`], for callers that manage their own worker thread.
pub fn fetch_news_blocking(url: &str) -> Vec<NewsItem> {
    match default_client() {
        Some(client) => client.news(url).fetch_blocking(),
        None => Vec::new(),
    }
}
