//! Integration tests for the paginator: page transitions and immutability.

use gd_client::{Error, GdClientBuilder};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE_0: &str = "1:Alex:2:855736:16:98006|1:RobTop:2:16:16:71#25:0:10";
const PAGE_1: &str = "1:Zoe:2:4242:16:777#25:10:10";

async fn mount_search_pages(mock_server: &MockServer) {
    // `page` is always followed by another form field, so the trailing `&`
    // keeps `page=1` from matching `page=10`.
    Mock::given(method("POST"))
        .and(path("/getGJUsers20.php"))
        .and(body_string_contains("page=0&"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE_0))
        .expect(1)
        .mount(mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/getGJUsers20.php"))
        .and(body_string_contains("page=1&"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE_1))
        .expect(1)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_next_page_dispatches_with_incremented_page() {
    let mock_server = MockServer::start().await;
    mount_search_pages(&mock_server).await;

    let client = GdClientBuilder::new()
        .host(mock_server.uri())
        .build()
        .unwrap();

    let page0 = client.search_users("anyone", 0).await.unwrap();
    assert_eq!(page0.page(), 0);
    assert_eq!(page0.items().len(), 2);
    assert_eq!(page0.total(), 25);
    assert!(page0.has_next());

    let page1 = page0.next_page().await.unwrap();
    assert_eq!(page1.page(), 1);
    assert_eq!(page1.items().len(), 1);
    assert_eq!(page1.items()[0].username, "Zoe");

    // The earlier snapshot is untouched by the advance.
    assert_eq!(page0.page(), 0);
    assert_eq!(page0.items().len(), 2);
    assert_eq!(page0.items()[0].username, "Alex");

    mock_server.verify().await;
}

#[tokio::test]
async fn test_end_of_pagination_is_missing_access() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getGJUsers20.php"))
        .and(body_string_contains("page=0&"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            // Trailer says this is everything there is.
            "1:Alex:2:855736:16:98006#1:0:10",
        ))
        .mount(&mock_server)
        .await;

    // Past the end the server answers with its usual sentinel.
    Mock::given(method("POST"))
        .and(path("/getGJUsers20.php"))
        .and(body_string_contains("page=1&"))
        .respond_with(ResponseTemplate::new(200).set_body_string("-1"))
        .mount(&mock_server)
        .await;

    let client = GdClientBuilder::new()
        .host(mock_server.uri())
        .build()
        .unwrap();

    let page0 = client.search_users("alex", 0).await.unwrap();
    assert!(!page0.has_next());

    // Fetching anyway is indistinguishable from a denied request.
    let err = page0.next_page().await.unwrap_err();
    assert!(matches!(err, Error::MissingAccess), "got {err:?}");
}

#[tokio::test]
async fn test_pages_are_cached_independently() {
    let mock_server = MockServer::start().await;
    mount_search_pages(&mock_server).await;

    let client = GdClientBuilder::new()
        .host(mock_server.uri())
        .build()
        .unwrap();

    let page0 = client.search_users("anyone", 0).await.unwrap();
    let _page1 = page0.next_page().await.unwrap();

    // Both pages again: served from cache, no further dispatches (the
    // mounted mocks expect exactly one call each).
    let page0_again = client.search_users("anyone", 0).await.unwrap();
    let _page1_again = page0_again.next_page().await.unwrap();

    mock_server.verify().await;
}
