use crate::core::NewsError;
use crate::news::model::{
    NO_IMAGE, NO_NEWS_LINK, NO_PUBLICATION_DATE, NO_SECTION_NAME, NO_TITLE, NewsItem,
    UNKNOWN_AUTHOR,
};
use crate::news::wire;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse a `response.results[]` document into news items, never failing.
///
/// Returns `None` for an empty input. Otherwise returns every item that could be
/// read before the first structural problem; the problem itself is logged. A body
/// that is not JSON at all therefore yields `Some(vec![])`.
///
/// ```
/// let body = r#"{"response":{"results":[{"webTitle":"Hello","webPublicationDate":"2017-06-14T09:00:00Z"}]}}"#;
/// let items = newsfeed_rs::extract_news(body).unwrap();
/// assert_eq!(items[0].title, "Hello");
/// assert_eq!(items[0].publication_date, "2017-06-14");
/// assert_eq!(items[0].author, "Unknown Author");
/// ```
pub fn extract_news(json: &str) -> Option<Vec<NewsItem>> {
    if json.is_empty() {
        return None;
    }

    let mut items = Vec::new();
    if let Err(e) = walk(json, &mut items) {
        tracing::error!(error = %e, parsed = items.len(), "problem parsing the news JSON results");
    }
    Some(items)
}

/// Strict counterpart of [`extract_news`].
///
/// An empty input is an empty listing. Any problem in the document is returned
/// instead of being logged, so callers can tell "no articles" from "broken body".
///
/// # Errors
///
/// Returns [`NewsError::Json`] if the body is not JSON, or [`NewsError::Data`] if
/// the document, `response`, a result entry, a tag or `fields` is not an object.
pub fn try_extract_news(json: &str) -> Result<Vec<NewsItem>, NewsError> {
    let mut items = Vec::new();
    if json.is_empty() {
        return Ok(items);
    }
    walk(json, &mut items)?;
    Ok(items)
}

fn walk(json: &str, out: &mut Vec<NewsItem>) -> Result<(), NewsError> {
    let root: Value = serde_json::from_str(json)?;
    let envelope: wire::NewsEnvelope = object(root, "document")?;

    let results = match envelope.response {
        Some(response) => object::<wire::NewsResponse>(response, "response")?
            .results
            .unwrap_or_default(),
        None => Vec::new(),
    };

    for (index, raw) in results.into_iter().enumerate() {
        let at = format!("results[{index}]");
        let entry: wire::ResultItem = object(raw, &at)?;
        out.push(into_item(entry, &at)?);
    }
    Ok(())
}

/// Decode `value` only if it is a JSON object.
fn object<T: DeserializeOwned>(value: Value, at: &str) -> Result<T, NewsError> {
    if !value.is_object() {
        return Err(NewsError::Data(format!("{at}: expected a JSON object")));
    }
    serde_json::from_value(value).map_err(|e| NewsError::Data(format!("{at}: {e}")))
}

fn into_item(entry: wire::ResultItem, at: &str) -> Result<NewsItem, NewsError> {
    let author = author_of(entry.tags, at)?;

    let image_url = match entry.fields {
        Some(fields) => {
            let fields: wire::Fields = object(fields, &format!("{at}.fields"))?;
            text_or(fields.thumbnail, NO_IMAGE)
        }
        None => NO_IMAGE.to_string(),
    };

    Ok(NewsItem {
        image_url,
        title: text_or(entry.web_title, NO_TITLE),
        author,
        section_name: text_or(entry.section_name, NO_SECTION_NAME),
        publication_date: entry
            .web_publication_date
            .map_or_else(|| NO_PUBLICATION_DATE.to_string(), |t| date_part(t.into())),
        web_url: text_or(entry.web_url, NO_NEWS_LINK),
    })
}

fn text_or(value: Option<wire::Text>, fallback: &str) -> String {
    value.map_or_else(|| fallback.to_string(), String::from)
}

// Every tag is checked, but each one overwrites the previous name: only the
// last tag is reported, even for multi-author pieces.
fn author_of(tags: Option<Vec<Value>>, at: &str) -> Result<String, NewsError> {
    let mut author = UNKNOWN_AUTHOR.to_string();
    for (index, raw) in tags.unwrap_or_default().into_iter().enumerate() {
        let tag: wire::Tag = object(raw, &format!("{at}.tags[{index}]"))?;
        author = format!(
            "{} {}",
            text_or(tag.first_name, ""),
            text_or(tag.last_name, "")
        );
    }
    Ok(author)
}

/// Everything before the first `T` of an ISO-8601 timestamp.
fn date_part(timestamp: String) -> String {
    match timestamp.split_once('T') {
        Some((date, _)) => date.to_string(),
        None => timestamp,
    }
}
