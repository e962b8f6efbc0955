#[cfg(feature = "test-mode")]
use std::env;

/// Read the response body as text and release the connection.
/// In `test-mode`, if `NF_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("NF_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, _ext, &text)
        {
            tracing::warn!(key = _key, error = %e, "NF_RECORD: failed to write fixture");
        }
    }

    Ok(text)
}

/// A filesystem-friendly label for a request, used to name recorded fixtures.
pub(crate) fn fixture_key(url: &url::Url) -> String {
    let host = url.host_str().unwrap_or("local");
    let path = url.path().trim_matches('/').replace('/', "_");
    if path.is_empty() {
        host.to_string()
    } else {
        format!("{host}_{path}")
    }
}

/// The request URL without its query string or fragment, safe to log.
pub(crate) fn without_query(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    &url[..end]
}
