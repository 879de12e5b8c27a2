use chrono::{DateTime, FixedOffset};
use serde_json::json;
use sqlx::Row;

use crate::helpers::{subscriber_entry, TestApp};

#[tokio::test]
#[ignore = "needs a Postgres server configured in config/base.yaml"]
async fn dispatch_persists_deliveries_in_postgres() {
    let test_app = TestApp::spawn_app_with_postgres(vec![subscriber_entry(
        1,
        &["SPORTS"],
        &["EMAIL", "PUSH"],
    )])
    .await;
    let db_pool = test_app.db_pool.as_ref().expect("Postgres pool missing.");

    let response = test_app
        .post_notification(json!({
            "category": "SPORTS",
            "content": "Big game tonight!"
        }))
        .await;
    assert_eq!(response.status().as_u16(), 204);

    let rows = sqlx::query("SELECT channel, status, user_id FROM deliveries ORDER BY id")
        .fetch_all(db_pool)
        .await
        .expect("Failed to fetch deliveries.");

    let saved: Vec<(String, String, i32)> = rows
        .iter()
        .map(|row| (row.get("channel"), row.get("status"), row.get("user_id")))
        .collect();
    assert_eq!(
        saved,
        vec![
            ("EMAIL".to_string(), "SENT".to_string(), 1),
            ("PUSH".to_string(), "SENT".to_string(), 1),
        ]
    );
}

#[tokio::test]
#[ignore = "needs a Postgres server configured in config/base.yaml"]
async fn postgres_history_lists_newest_first() {
    let test_app =
        TestApp::spawn_app_with_postgres(vec![subscriber_entry(5, &["FINANCIAL"], &["EMAIL"])])
            .await;

    for content in ["Opening bell", "Closing bell"] {
        test_app
            .post_notification(json!({ "category": "FINANCIAL", "content": content }))
            .await;
    }

    let history = test_app.get_history().await;
    let contents: Vec<&str> = history
        .iter()
        .map(|record| record["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["Closing bell", "Opening bell"]);
    for record in &history {
        let created_at = parse_timestamp(&record["createdAt"]);
        let updated_at = parse_timestamp(&record["updatedAt"]);
        assert!(updated_at > created_at);
    }
}

fn parse_timestamp(value: &serde_json::Value) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(value.as_str().expect("Timestamp is not a string."))
        .expect("Timestamp is not RFC 3339.")
}
