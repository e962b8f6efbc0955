use std::time::Duration;

use newsfeed_rs::{NewsClient, NewsError, fetch_news};

use crate::common::{mock_search, search_fixture, search_url, setup_server};

#[tokio::test]
async fn non_200_status_yields_empty_list() {
    let server = setup_server();
    let mock = mock_search(&server, 500, "oops");

    let items = fetch_news(&search_url(&server)).await;
    mock.assert();

    assert!(items.is_empty());
}

#[tokio::test]
async fn non_200_status_is_reported_by_try_fetch() {
    let server = setup_server();
    let mock = mock_search(&server, 403, &search_fixture());

    let client = NewsClient::builder().build().unwrap();
    let err = client.news(search_url(&server)).try_fetch().await.unwrap_err();
    mock.assert();

    match err {
        NewsError::Status { status, url } => {
            assert_eq!(status, 403);
            assert!(url.ends_with("/search"), "{url}");
            assert!(!url.contains("api-key"), "{url}");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn success_other_than_200_is_still_no_data() {
    let server = setup_server();
    let _mock = mock_search(&server, 204, "");

    assert!(fetch_news(&search_url(&server)).await.is_empty());
}

#[tokio::test]
async fn malformed_url_yields_empty_list() {
    assert!(fetch_news("not a url").await.is_empty());

    let client = NewsClient::builder().build().unwrap();
    let err = client.news("not a url").try_fetch().await.unwrap_err();
    assert!(matches!(err, NewsError::Url(_)), "got {err:?}");
}

#[tokio::test]
async fn connection_failure_yields_empty_list() {
    let client = NewsClient::builder()
        .connect_timeout(Duration::from_millis(500))
        .build()
        .unwrap();

    // Port 9 (discard) on localhost is not expected to be listening.
    let items = client.news("http://127.0.0.1:9/search").fetch().await;
    assert!(items.is_empty());

    let err = client
        .news("http://127.0.0.1:9/search?api-key=secret")
        .try_fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, NewsError::Http(_)), "got {err:?}");
    assert!(!err.to_string().contains("secret"), "{err}");
}

#[tokio::test]
async fn read_timeout_yields_empty_list() {
    let server = setup_server();
    let _mock = server.mock(|when, then| {
        when.path("/slow");
        then.status(200)
            .delay(Duration::from_millis(1500))
            .body(search_fixture());
    });

    let client = NewsClient::builder()
        .read_timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let items = client.news(format!("{}/slow", server.base_url())).fetch().await;
    assert!(items.is_empty());
}
