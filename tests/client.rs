//! `HttpBrowserApi` against a mock HTTP server

use s3_browser::client::{BrowserApi, ClientError, HttpBrowserApi};
use s3_browser::store::ListObjectsOptions;
use s3_browser::views::{BucketDetailView, BucketListView, DetailPhase, LOAD_OBJECTS_FAILED};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn lists_buckets() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/buckets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"Name": "demo", "CreationDate": "2024-01-02T03:04:05Z"},
            {"Name": "logs"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpBrowserApi::new(&server.uri()).unwrap();
    let buckets = api.list_buckets().await.unwrap();
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].name, "demo");
    assert!(buckets[0].creation_date.is_some());
    assert!(buckets[1].creation_date.is_none());
}

#[tokio::test]
async fn base_url_path_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/browser/api/buckets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"Name": "demo"}])))
        .expect(2)
        .mount(&server)
        .await;

    for base in [format!("{}/browser", server.uri()), format!("{}/browser/", server.uri())] {
        let api = HttpBrowserApi::new(&base).unwrap();
        let buckets = api.list_buckets().await.unwrap();
        assert_eq!(buckets[0].name, "demo");
    }
}

#[tokio::test]
async fn create_bucket_posts_name_and_surfaces_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/buckets"))
        .and(body_json(json!({"bucketName": "demo"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"message": "Bucket demo created successfully"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/buckets"))
        .and(body_json(json!({"bucketName": "taken"})))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "Error processing your request"})),
        )
        .mount(&server)
        .await;

    let api = HttpBrowserApi::new(&server.uri()).unwrap();
    assert_eq!(
        api.create_bucket("demo").await.unwrap(),
        "Bucket demo created successfully"
    );

    match api.create_bucket("taken").await {
        Err(ClientError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Error processing your request");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn list_objects_sends_typed_options_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/objects"))
        .and(query_param("bucketName", "demo"))
        .and(query_param("prefix", "images/"))
        .and(query_param("delimiter", "/"))
        .and(query_param("continuationToken", "abc+/="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Name": "demo",
            "Contents": [{"Key": "images/a.png", "Size": 10, "LastModified": "2024-01-02T03:04:05Z"}],
            "CommonPrefixes": [{"Prefix": "images/sub/"}],
            "NextContinuationToken": "next"
        })))
        .mount(&server)
        .await;

    let api = HttpBrowserApi::new(&server.uri()).unwrap();
    let options = ListObjectsOptions::default()
        .with_prefix("images/")
        .with_continuation_token(Some("abc+/=".to_string()));
    let page = api.list_objects("demo", &options).await.unwrap();

    assert_eq!(page.contents[0].key, "images/a.png");
    assert_eq!(page.common_prefixes[0].prefix, "images/sub/");
    assert_eq!(page.next_continuation_token.as_deref(), Some("next"));
}

#[tokio::test]
async fn root_listing_omits_prefix_and_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/objects"))
        .and(query_param("bucketName", "demo"))
        .and(query_param_is_missing("prefix"))
        .and(query_param_is_missing("continuationToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Name": "demo"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpBrowserApi::new(&server.uri()).unwrap();
    let page = api
        .list_objects("demo", &ListObjectsOptions::default())
        .await
        .unwrap();
    assert!(page.contents.is_empty());
    assert!(page.common_prefixes.is_empty());
}

#[tokio::test]
async fn download_url_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/download"))
        .and(query_param("bucketName", "demo"))
        .and(query_param("objectKey", "images/a b.png"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "http://localhost:4566/demo/images/a%20b.png?X-Amz-Expires=300"
        })))
        .mount(&server)
        .await;

    let api = HttpBrowserApi::new(&server.uri()).unwrap();
    let url = api.download_url("demo", "images/a b.png").await.unwrap();
    assert!(url.ends_with("X-Amz-Expires=300"));
}

#[tokio::test]
async fn non_json_error_falls_back_to_status_line() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/buckets"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let api = HttpBrowserApi::new(&server.uri()).unwrap();
    let err = api.list_buckets().await.unwrap_err();
    assert_eq!(err.to_string(), "Error: 502 Bad Gateway");
}

#[tokio::test]
async fn views_drive_the_http_api() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/buckets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"Name": "demo"}])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/objects"))
        .and(query_param("bucketName", "demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Contents": [{"Key": "docs/", "Size": 0}, {"Key": "docs/readme.md", "Size": 1536}],
            "CommonPrefixes": [{"Prefix": "docs/old/"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/objects"))
        .and(query_param("bucketName", "broken"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "Error processing your request"})))
        .mount(&server)
        .await;

    let api = HttpBrowserApi::new(&server.uri()).unwrap();

    let mut buckets = BucketListView::new();
    buckets.load(&api).await;
    assert_eq!(buckets.buckets()[0].name, "demo");

    let mut detail = BucketDetailView::new("demo", "docs/");
    detail.refresh(&api).await;
    assert_eq!(detail.phase(), &DetailPhase::Ready);
    let files = detail.file_rows();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "readme.md");
    assert_eq!(files[0].size, "1.5 KB");
    assert_eq!(detail.folder_rows()[0].name, "old");
    assert_eq!(detail.parent_prefix(), Some(String::new()));

    detail.open(&api, "broken", "").await;
    assert_eq!(detail.error(), Some(LOAD_OBJECTS_FAILED));
}
