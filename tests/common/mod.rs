#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use std::{env, fs, path::Path};

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{endpoint}_{key}.{ext}");
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn search_fixture() -> String {
    fixture("news", "content.guardianapis.com_search", "json")
}

pub fn mock_search<'a>(server: &'a MockServer, status: u16, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("q", "android")
            .query_param("api-key", "test");
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn search_url(server: &MockServer) -> String {
    format!("{}/search?q=android&api-key=test", server.base_url())
}

pub fn live_or_record_enabled() -> bool {
    env::var("NF_LIVE").ok().as_deref() == Some("1") || is_recording()
}

pub fn is_recording() -> bool {
    env::var("NF_RECORD").ok().as_deref() == Some("1")
}
