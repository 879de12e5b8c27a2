use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

use super::{DeliveryStore, StoreError};
use crate::domain::category::Category;
use crate::domain::channel::Channel;
use crate::domain::delivery::{DeliveryAttempt, DeliveryRecord};
use crate::domain::delivery_status::DeliveryStatus;
use crate::domain::notification_content::NotificationContent;
use crate::domain::subscriber_id::SubscriberId;

pub struct PgDeliveryStore {
    db_pool: PgPool,
}

impl PgDeliveryStore {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl DeliveryStore for PgDeliveryStore {
    #[tracing::instrument(
        name = "Insert a delivery record into the database",
        skip(self, attempt),
        fields(
            user_id = %attempt.user_id(),
            channel = %attempt.channel(),
            status = %attempt.status().as_ref()
        )
    )]
    async fn save(&self, attempt: &DeliveryAttempt) -> Result<DeliveryRecord, StoreError> {
        sqlx::query(
            r#"
            INSERT INTO deliveries (category, channel, content, status, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, category, channel, content, status, user_id, created_at, updated_at
            "#,
        )
        .bind(attempt.category().to_string())
        .bind(attempt.channel().to_string())
        .bind(attempt.content().as_ref())
        .bind(attempt.status().as_ref().to_owned())
        .bind(attempt.user_id().value())
        .bind(attempt.created_at())
        .bind(attempt.updated_at())
        .try_map(delivery_record_from_row)
        .fetch_one(&self.db_pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            StoreError::Query(err)
        })
    }

    #[tracing::instrument(name = "Fetch the delivery history", skip(self))]
    async fn list_newest_first(&self) -> Result<Vec<DeliveryRecord>, StoreError> {
        sqlx::query(
            r#"
            SELECT id, category, channel, content, status, user_id, created_at, updated_at
            FROM deliveries
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .try_map(delivery_record_from_row)
        .fetch_all(&self.db_pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            StoreError::Query(err)
        })
    }
}

fn delivery_record_from_row(row: PgRow) -> Result<DeliveryRecord, sqlx::Error> {
    Ok(DeliveryRecord {
        id: row.try_get("id")?,
        category: Category::parse(row.try_get("category")?).map_err(decode_error)?,
        channel: Channel::parse(row.try_get("channel")?).map_err(decode_error)?,
        content: NotificationContent::parse(row.try_get("content")?).map_err(decode_error)?,
        status: DeliveryStatus::parse(row.try_get("status")?).map_err(decode_error)?,
        user_id: SubscriberId::parse(row.try_get("user_id")?).map_err(decode_error)?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn decode_error(message: String) -> sqlx::Error {
    sqlx::Error::Decode(message.into())
}
