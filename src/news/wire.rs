use serde::Deserialize;
use serde_json::Value;

// Nested containers stay raw: derived structs would also accept a JSON array
// positionally, so every object is checked before it is decoded.

#[derive(Deserialize)]
pub(crate) struct NewsEnvelope {
    pub(crate) response: Option<Value>,
}

#[derive(Deserialize)]
pub(crate) struct NewsResponse {
    pub(crate) results: Option<Vec<Value>>,
}

#[derive(Deserialize)]
pub(crate) struct ResultItem {
    #[serde(rename = "sectionName")]
    pub(crate) section_name: Option<Text>,
    #[serde(rename = "webPublicationDate")]
    pub(crate) web_publication_date: Option<Text>,
    #[serde(rename = "webTitle")]
    pub(crate) web_title: Option<Text>,
    #[serde(rename = "webUrl")]
    pub(crate) web_url: Option<Text>,
    pub(crate) tags: Option<Vec<Value>>,
    pub(crate) fields: Option<Value>,
}

#[derive(Deserialize)]
pub(crate) struct Tag {
    #[serde(rename = "firstName")]
    pub(crate) first_name: Option<Text>,
    #[serde(rename = "lastName")]
    pub(crate) last_name: Option<Text>,
}

#[derive(Deserialize)]
pub(crate) struct Fields {
    pub(crate) thumbnail: Option<Text>,
}

/// Any non-null JSON value read as text. Strings are taken as is, everything
/// else keeps its compact JSON spelling (`42`, `true`, `{"a":1}`).
#[derive(Deserialize)]
#[serde(transparent)]
pub(crate) struct Text(Value);

impl From<Text> for String {
    fn from(t: Text) -> Self {
        match t.0 {
            Value::String(s) => s,
            other => other.to_string(),
        }
    }
}
