// Syllabus and system handler tests

use crate::tests::common::{get, offline_app};
use axum::http::StatusCode;

#[tokio::test]
async fn test_list_categories() {
    let (status, body) = get(offline_app(), "/api/categories").await;

    assert_eq!(status, StatusCode::OK);
    let categories = body.as_array().expect("categories array");
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0]["id"], "XINGCE");
    assert_eq!(categories[0]["displayName"], "行政职业能力测验");
    assert_eq!(categories[1]["id"], "ZONGHE");
    assert_eq!(categories[1]["strategyHeading"], "申论/综合应用策略");
}

#[tokio::test]
async fn test_list_syllabus_all_and_filtered() {
    let (status, body) = get(offline_app(), "/api/syllabus").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(10));

    let (status, body) = get(offline_app(), "/api/syllabus?category=xingce").await;
    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().expect("entries array");
    assert_eq!(entries.len(), 5);
    assert!(entries.iter().all(|e| e["category"] == "XINGCE"));
    assert_eq!(entries[0]["id"], "xc-1");
    assert_eq!(entries[0]["iconName"], "globe");
}

#[tokio::test]
async fn test_list_syllabus_unknown_category() {
    let (status, body) = get(offline_app(), "/api/syllabus?category=MIANSHI").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn test_get_syllabus_entry() {
    let (status, body) = get(offline_app(), "/api/syllabus/zh-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "ZONGHE");
    assert!(body["subTopics"].as_array().is_some_and(|t| !t.is_empty()));

    let (status, body) = get(offline_app(), "/api/syllabus/xc-99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn test_weight_distribution() {
    let (status, body) = get(offline_app(), "/api/syllabus/weights?category=ZONGHE").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "ZONGHE");
    assert_eq!(body["total"], 100);
    let slices = body["slices"].as_array().expect("slices array");
    assert_eq!(slices.len(), 5);
    let sum: u64 = slices.iter().filter_map(|s| s["value"].as_u64()).sum();
    assert_eq!(sum, 100);
}

#[tokio::test]
async fn test_weight_distribution_requires_category() {
    let (status, _) = get(offline_app(), "/api/syllabus/weights").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ai_status_without_credential() {
    let (status, body) = get(offline_app(), "/api/ai/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["provider"], "minimax");
    assert_eq!(body["model_name"], "abab6.5s-chat");
    assert_eq!(body["credential_present"], false);
}

#[tokio::test]
async fn test_health_and_ready() {
    let (status, body) = get(offline_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");

    let (status, body) = get(offline_app(), "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "READY");
}
