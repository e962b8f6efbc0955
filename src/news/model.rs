use chrono::NaiveDate;
use serde::Serialize;

/// Placeholder for an entry without `sectionName`.
pub const NO_SECTION_NAME: &str = "No section name";
/// Placeholder for an entry without `webPublicationDate`.
pub const NO_PUBLICATION_DATE: &str = "No publication date";
/// Placeholder for an entry without `webTitle`.
pub const NO_TITLE: &str = "No title";
/// Placeholder for an entry without `webUrl`.
pub const NO_NEWS_LINK: &str = "No news link";
/// Placeholder for an entry without a `fields.thumbnail` image.
pub const NO_IMAGE: &str = "No image";
/// Placeholder for an entry whose `tags` list is absent or empty.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// A single news item, ready for display.
///
/// Every field is plain text. When the upstream document lacks a value, the
/// matching placeholder constant (e.g. [`NO_TITLE`]) is stored instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    /// Thumbnail image URL.
    pub image_url: String,
    /// The headline.
    pub title: String,
    /// Display name of the (last listed) contributor.
    pub author: String,
    /// Section the article belongs to (e.g. "World news").
    pub section_name: String,
    /// Publication date, `YYYY-MM-DD` when the upstream timestamp is ISO-8601.
    pub publication_date: String,
    /// Link to the article page.
    pub web_url: String,
}

impl NewsItem {
    /// The publication date as a calendar date, if it parses as `YYYY-MM-DD`.
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.publication_date, "%Y-%m-%d").ok()
    }

    /// Whether a thumbnail URL was present upstream.
    pub fn has_image(&self) -> bool {
        self.image_url != NO_IMAGE
    }
}
