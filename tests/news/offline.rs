use newsfeed_rs::{NO_IMAGE, NO_TITLE, NewsClient, UNKNOWN_AUTHOR, fetch_news};

use crate::common::{mock_search, search_fixture, search_url, setup_server};

#[tokio::test]
async fn offline_news_uses_recorded_fixture() {
    let server = setup_server();
    let mock = mock_search(&server, 200, &search_fixture());

    let items = fetch_news(&search_url(&server)).await;
    mock.assert();

    assert_eq!(items.len(), 3);

    let first = &items[0];
    assert_eq!(first.title, "Android developers get a new favourite language");
    assert_eq!(first.section_name, "Technology");
    assert_eq!(first.author, "Samuel Gibbs");
    assert_eq!(first.publication_date, "2017-06-14");
    assert_eq!(first.image_url, "https://media.guim.co.uk/android/500.jpg");
    assert_eq!(
        first.web_url,
        "https://www.theguardian.com/technology/2017/jun/14/android-developers-kotlin"
    );
    assert!(first.has_image());
}

#[tokio::test]
async fn offline_news_keeps_only_last_contributor() {
    let server = setup_server();
    let _mock = mock_search(&server, 200, &search_fixture());

    let items = fetch_news(&search_url(&server)).await;

    assert_eq!(items[1].author, "John Roe");
}

#[tokio::test]
async fn offline_news_fills_placeholders() {
    let server = setup_server();
    let _mock = mock_search(&server, 200, &search_fixture());

    let items = fetch_news(&search_url(&server)).await;
    let last = &items[2];

    assert_eq!(last.title, NO_TITLE);
    assert_eq!(last.image_url, NO_IMAGE);
    assert_eq!(last.author, UNKNOWN_AUTHOR);
    assert_eq!(last.section_name, "News");
    assert_eq!(last.publication_date, "2017-06-13");
}

#[tokio::test]
async fn offline_try_fetch_matches_lenient_fetch() {
    let server = setup_server();
    let mock = mock_search(&server, 200, &search_fixture());

    let client = NewsClient::builder().build().unwrap();
    let strict = client.news(search_url(&server)).try_fetch().await.unwrap();
    let lenient = client.news(search_url(&server)).fetch().await;

    mock.assert_hits(2);
    assert_eq!(strict, lenient);
}

#[tokio::test]
async fn offline_empty_body_yields_empty_list() {
    let server = setup_server();
    let _mock = mock_search(&server, 200, "");

    assert!(fetch_news(&search_url(&server)).await.is_empty());
}

#[tokio::test]
async fn offline_invalid_json_yields_empty_list() {
    let server = setup_server();
    let _mock = mock_search(&server, 200, "{\"response\": {\"results\": [");

    assert!(fetch_news(&search_url(&server)).await.is_empty());

    let client = NewsClient::builder().build().unwrap();
    let err = client.news(search_url(&server)).try_fetch().await.unwrap_err();
    assert!(matches!(err, newsfeed_rs::NewsError::Json(_)), "got {err:?}");
}
