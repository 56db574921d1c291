use crate::helpers::client::{test_config, TestClient};
use crate::helpers::fixtures::{ids, media_list};
use crate::helpers::mock_server::{unreachable_url, MockReply, MockServer};
use axum::http::StatusCode;
use serde_json::json;
use std::time::Duration;

/// 観点: トークン未設定なら 500 + "not configured" を返し、上流は呼ばない
#[tokio::test]
async fn test_not_configured() {
    let mock = MockServer::start_graph_api(MockReply::Media(json!([]))).await;
    let client = TestClient::with_config(test_config(None, &mock.base_url(), Duration::ZERO));
    assert!(client.state.config.access_token().is_none());

    for _ in 0..2 {
        let (status, body) = client.get_instagram().await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Instagram access token not configured");
        assert!(body.get("posts").is_none());
    }
    assert_eq!(mock.hits(), 0);
}

/// 観点: 空文字のトークンも未設定扱い
#[tokio::test]
async fn test_empty_token_is_not_configured() {
    let mock = MockServer::start_graph_api(MockReply::Media(json!([]))).await;
    let client = TestClient::with_instagram("", &mock.base_url());

    let (status, body) = client.get_instagram().await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("not configured"));
    assert_eq!(mock.hits(), 0);
}

/// 観点: 5件中 VIDEO 2件を除いた 3件を元の順序で返す
#[tokio::test]
async fn test_filters_videos_and_keeps_order() {
    let mock = MockServer::start_graph_api(MockReply::Media(media_list(&[
        ("101", "VIDEO"),
        ("102", "IMAGE"),
        ("103", "CAROUSEL_ALBUM"),
        ("104", "VIDEO"),
        ("105", "IMAGE"),
    ])))
    .await;
    let client = TestClient::with_instagram("IGQ-test-token", &mock.base_url());

    let (status, body) = client.get_instagram().await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["posts"]), vec!["102", "103", "105"]);
    assert_eq!(body["posts"][1]["media_type"], "CAROUSEL_ALBUM");
    assert_eq!(body["posts"][0]["caption"], "Post 102");
    assert_eq!(mock.hits(), 1);
}

/// 観点: 表示可能な投稿が多くても 3件に切り詰める
#[tokio::test]
async fn test_caps_at_three() {
    let entries: Vec<(String, &str)> = (1..=12)
        .map(|i| (format!("{}", 200 + i), if i % 4 == 0 { "VIDEO" } else { "IMAGE" }))
        .collect();
    let refs: Vec<(&str, &str)> = entries.iter().map(|(id, t)| (id.as_str(), *t)).collect();

    let mock = MockServer::start_graph_api(MockReply::Media(media_list(&refs))).await;
    let client = TestClient::with_instagram("IGQ-test-token", &mock.base_url());

    let (status, body) = client.get_instagram().await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["posts"]), vec!["201", "202", "203"]);
}

/// 観点: 表示可能な投稿が 3件未満ならその件数だけ返す (REELS など未知の種別も除外)
#[tokio::test]
async fn test_fewer_than_three() {
    let mock = MockServer::start_graph_api(MockReply::Media(media_list(&[
        ("301", "VIDEO"),
        ("302", "REELS"),
        ("303", "IMAGE"),
    ])))
    .await;
    let client = TestClient::with_instagram("IGQ-test-token", &mock.base_url());

    let (status, body) = client.get_instagram().await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["posts"]), vec!["303"]);
}

/// 観点: 除外される VIDEO の media_url が null でも、残りの投稿は返す
#[tokio::test]
async fn test_null_field_on_hidden_item() {
    let mock = MockServer::start_graph_api(MockReply::Media(json!([
        {
            "id": "351",
            "media_type": "VIDEO",
            "media_url": null,
            "permalink": "https://www.instagram.com/p/351/",
            "timestamp": "2024-05-03T10:00:00+0000"
        },
        {
            "id": "352",
            "media_type": "IMAGE",
            "media_url": "https://cdn.example.com/352.jpg",
            "permalink": "https://www.instagram.com/p/352/",
            "timestamp": "2024-05-02T10:00:00+0000"
        }
    ])))
    .await;
    let client = TestClient::with_instagram("IGQ-test-token", &mock.base_url());

    let (status, body) = client.get_instagram().await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["posts"]), vec!["352"]);
}

/// 観点: 上流が空なら空の posts を 200 で返す
#[tokio::test]
async fn test_empty_upstream() {
    let mock = MockServer::start_graph_api(MockReply::Media(json!([]))).await;
    let client = TestClient::with_instagram("IGQ-test-token", &mock.base_url());

    let (status, body) = client.get_instagram().await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "posts": [] }));
}

/// 観点: 上流へ渡すクエリ (トークン・件数・フィールド)
#[tokio::test]
async fn test_upstream_query() {
    let mock = MockServer::start_graph_api(MockReply::Media(json!([]))).await;
    let client = TestClient::with_instagram("IGQ-test-token", &mock.base_url());

    client.get_instagram().await;

    let query = mock.last_query().expect("upstream should be called");
    assert_eq!(query["access_token"], "IGQ-test-token");
    assert_eq!(query["limit"], "12");
    assert_eq!(
        query["fields"],
        "id,media_type,media_url,permalink,timestamp,caption"
    );
}

/// 観点: 上流のエラーメッセージをそのまま返す
#[tokio::test]
async fn test_upstream_error_message() {
    let mock = MockServer::start_graph_api(MockReply::Json(
        StatusCode::BAD_REQUEST,
        json!({
            "error": {
                "message": "Error validating access token: Session has expired",
                "type": "OAuthException",
                "code": 190
            }
        }),
    ))
    .await;
    let client = TestClient::with_instagram("IGQ-expired", &mock.base_url());

    let (status, body) = client.get_instagram().await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "Error validating access token: Session has expired"
    );
    assert_eq!(mock.hits(), 1, "リトライしないこと");
}

/// 観点: 上流のエラーが JSON でなければ汎用メッセージを返す
#[tokio::test]
async fn test_upstream_error_without_message() {
    let mock = MockServer::start_graph_api(MockReply::Text(
        StatusCode::BAD_GATEWAY,
        "<html>502 Bad Gateway</html>".to_string(),
    ))
    .await;
    let client = TestClient::with_instagram("IGQ-test-token", &mock.base_url());

    let (status, body) = client.get_instagram().await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch Instagram posts");
}

/// 観点: 成功ステータスでも data が無ければ 500
#[tokio::test]
async fn test_upstream_malformed_success() {
    let mock =
        MockServer::start_graph_api(MockReply::Json(StatusCode::OK, json!({ "paging": {} }))).await;
    let client = TestClient::with_instagram("IGQ-test-token", &mock.base_url());

    let (status, body) = client.get_instagram().await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to parse Instagram response");
}

/// 観点: 上流に接続できなければ 500
#[tokio::test]
async fn test_upstream_unreachable() {
    let client = TestClient::with_instagram("IGQ-test-token", &unreachable_url().await);

    let (status, body) = client.get_instagram().await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to reach Instagram API");
}

/// 観点: キャッシュ無効 (既定) ならリクエストごとに上流を 1回呼ぶ
#[tokio::test]
async fn test_no_cache_by_default() {
    let mock =
        MockServer::start_graph_api(MockReply::Media(media_list(&[("401", "IMAGE")]))).await;
    let client = TestClient::with_instagram("IGQ-test-token", &mock.base_url());

    for _ in 0..3 {
        let (status, _) = client.get_instagram().await;
        assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(mock.hits(), 3);
}

/// 観点: キャッシュ有効なら TTL 内の 2回目以降は上流を呼ばない
#[tokio::test]
async fn test_cache_enabled() {
    let mock =
        MockServer::start_graph_api(MockReply::Media(media_list(&[("501", "IMAGE")]))).await;
    let client = TestClient::with_config(test_config(
        Some("IGQ-test-token"),
        &mock.base_url(),
        Duration::from_secs(300),
    ));

    let (_, first) = client.get_instagram().await;
    let (_, second) = client.get_instagram().await;

    assert_eq!(first, second);
    assert_eq!(ids(&second["posts"]), vec!["501"]);
    assert_eq!(mock.hits(), 1);
}
