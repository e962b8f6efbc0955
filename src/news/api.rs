use reqwest::StatusCode;
use url::Url;

use crate::core::{NewsClient, NewsError, net};

/// Perform the single GET and return the body of a `200 OK` response.
pub(super) async fn fetch_body(client: &NewsClient, url: &str) -> Result<String, NewsError> {
    let url = Url::parse(url)?;
    let key = net::fixture_key(&url);

    // reqwest errors carry the full URL; strip it so the API key never reaches a log line.
    let resp = client
        .http()
        .get(url)
        .send()
        .await
        .map_err(reqwest::Error::without_url)?;

    // Anything but a plain 200 is treated as "no data", redirects are followed by reqwest.
    if resp.status() != StatusCode::OK {
        return Err(NewsError::Status {
            status: resp.status().as_u16(),
            url: net::without_query(resp.url().as_str()).to_string(),
        });
    }

    let body = net::get_text(resp, "news", &key, "json")
        .await
        .map_err(reqwest::Error::without_url)?;
    tracing::debug!(bytes = body.len(), "read news response body");
    Ok(body)
}
