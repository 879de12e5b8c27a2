use serde_json::json;

use crate::helpers::{subscriber_entry, TestApp};

#[tokio::test]
async fn notify_returns_204_and_records_one_delivery_per_channel() {
    let test_app =
        TestApp::spawn_app(vec![subscriber_entry(1, &["SPORTS"], &["EMAIL", "PUSH"])]).await;

    let response = test_app
        .post_notification(json!({
            "category": "SPORTS",
            "content": "Big game tonight!"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 204);

    let history = test_app.get_history().await;
    assert_eq!(history.len(), 2);
    for record in &history {
        assert_eq!(record["status"], "SENT");
        assert_eq!(record["userId"], 1);
        assert_eq!(record["category"], "SPORTS");
        assert_eq!(record["content"], "Big game tonight!");
    }
    let mut channels: Vec<&str> = history
        .iter()
        .map(|record| record["channel"].as_str().unwrap())
        .collect();
    channels.sort();
    assert_eq!(channels, vec!["EMAIL", "PUSH"]);
}

#[tokio::test]
async fn only_subscribers_of_the_category_are_notified() {
    let test_app = TestApp::spawn_app(vec![
        subscriber_entry(1, &["SPORTS", "MOVIES"], &["EMAIL", "PUSH"]),
        subscriber_entry(2, &["FINANCIAL"], &["EMAIL", "SMS"]),
        subscriber_entry(3, &["SPORTS", "FINANCIAL", "MOVIES"], &["EMAIL", "SMS", "PUSH"]),
        subscriber_entry(4, &["MOVIES"], &["PUSH"]),
        subscriber_entry(5, &["FINANCIAL", "SPORTS"], &["EMAIL"]),
    ])
    .await;

    let response = test_app
        .post_notification(json!({
            "category": "FINANCIAL",
            "content": "Markets close early today"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 204);

    let history = test_app.get_history().await;
    let mut user_ids: Vec<i64> = history
        .iter()
        .map(|record| record["userId"].as_i64().unwrap())
        .collect();
    user_ids.sort();
    assert_eq!(user_ids, vec![2, 2, 3, 3, 3, 5]);
}

#[tokio::test]
async fn category_without_subscribers_records_nothing() {
    let test_app = TestApp::spawn_app(vec![subscriber_entry(4, &["MOVIES"], &["PUSH"])]).await;

    let response = test_app
        .post_notification(json!({
            "category": "SPORTS",
            "content": "Nobody is listening"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 204);
    assert!(test_app.get_history().await.is_empty());
}

#[tokio::test]
async fn history_lists_newest_first() {
    let test_app = TestApp::spawn_app(vec![subscriber_entry(1, &["SPORTS"], &["EMAIL"])]).await;

    for content in ["First", "Second", "Third"] {
        let response = test_app
            .post_notification(json!({ "category": "SPORTS", "content": content }))
            .await;
        assert_eq!(response.status().as_u16(), 204);
    }

    let history = test_app.get_history().await;
    let contents: Vec<&str> = history
        .iter()
        .map(|record| record["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["Third", "Second", "First"]);
    for record in &history {
        assert!(record.get("id").is_some());
        assert!(record.get("createdAt").is_some());
        assert!(record.get("updatedAt").is_some());
    }
}

#[tokio::test]
async fn unknown_category_is_rejected_with_accepted_values() {
    let test_app = TestApp::spawn_app(vec![subscriber_entry(1, &["SPORTS"], &["EMAIL"])]).await;

    let response = test_app
        .post_notification(json!({
            "category": "WEATHER",
            "content": "Storm incoming"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], 400);
    assert_eq!(body["error"], "Bad Request");
    assert_eq!(
        body["message"],
        "Invalid category 'WEATHER'. Accepted values are: SPORTS, FINANCIAL, MOVIES"
    );
    assert_eq!(body["path"], "/api/v1/notification");
    assert!(test_app.get_history().await.is_empty());
}

#[tokio::test]
async fn content_length_boundaries_are_enforced() {
    let test_app = TestApp::spawn_app(vec![subscriber_entry(1, &["SPORTS"], &["EMAIL"])]).await;
    let test_cases = vec![
        (String::new(), 400, "empty content"),
        (String::from("   "), 400, "blank content"),
        ("a".repeat(1001), 400, "content over 1000 characters"),
        (String::from("a"), 204, "single character content"),
        ("a".repeat(1000), 204, "content of exactly 1000 characters"),
    ];

    for (content, expected_status, description) in test_cases {
        let response = test_app
            .post_notification(json!({ "category": "SPORTS", "content": content }))
            .await;

        assert_eq!(
            expected_status,
            response.status().as_u16(),
            "The API did not answer {} when payload had {}",
            expected_status,
            description
        );
    }

    let response = test_app
        .post_notification(json!({ "category": "SPORTS", "content": "e\u{301}".repeat(1000) }))
        .await;
    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Content must be between 1 and 1000 characters");
    assert_eq!(body["path"], "/api/v1/notification");

    // Only the two accepted requests reached the fan-out.
    assert_eq!(test_app.get_history().await.len(), 2);
}

#[tokio::test]
async fn malformed_bodies_are_rejected_with_400() {
    let test_app = TestApp::spawn_app(vec![]).await;
    let test_cases = vec![
        (json!({ "content": "Big game tonight!" }), "missing category"),
        (json!({ "category": "SPORTS" }), "missing content"),
        (json!({ "category": 7, "content": "Big game tonight!" }), "numeric category"),
        (json!([]), "not an object"),
    ];

    for (invalid_body, description) in test_cases {
        let response = test_app.post_notification(invalid_body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 status when payload was {}",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            body["message"],
            "Invalid request body. Please check the JSON format and field values."
        );
        assert_eq!(body["path"], "/api/v1/notification");
    }
}
