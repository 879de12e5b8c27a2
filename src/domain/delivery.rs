use chrono::{DateTime, Duration, Utc};

use crate::domain::category::Category;
use crate::domain::channel::Channel;
use crate::domain::delivery_status::DeliveryStatus;
use crate::domain::notification_content::NotificationContent;
use crate::domain::subscriber_id::SubscriberId;

/// A single (subscriber, channel) send that has not been persisted yet.
///
/// Starts out `PENDING` with `created_at == updated_at` and settles exactly
/// once to `SENT` or `FAILED`.
#[derive(Debug, Clone)]
pub struct DeliveryAttempt {
    category: Category,
    channel: Channel,
    content: NotificationContent,
    status: DeliveryStatus,
    user_id: SubscriberId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DeliveryAttempt {
    pub fn new(
        category: Category,
        channel: Channel,
        content: NotificationContent,
        user_id: SubscriberId,
    ) -> DeliveryAttempt {
        let now = Utc::now();

        DeliveryAttempt {
            category,
            channel,
            content,
            status: DeliveryStatus::Pending,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn mark_sent(&mut self) -> Result<(), String> {
        self.transition_to(DeliveryStatus::Sent)
    }

    pub fn mark_failed(&mut self) -> Result<(), String> {
        self.transition_to(DeliveryStatus::Failed)
    }

    fn transition_to(&mut self, next: DeliveryStatus) -> Result<(), String> {
        if !self.status.can_transition_to(next) {
            return Err(format!(
                "A {} delivery cannot move to {}",
                self.status.as_ref(),
                next.as_ref()
            ));
        }

        self.status = next;
        // Postgres keeps microseconds, so the bump has to survive a round trip.
        self.updated_at = Utc::now().max(self.updated_at + Duration::microseconds(1));

        Ok(())
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn content(&self) -> &NotificationContent {
        &self.content
    }

    pub fn status(&self) -> DeliveryStatus {
        self.status
    }

    pub fn user_id(&self) -> SubscriberId {
        self.user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Attaches the identity assigned by the store.
    pub fn into_record(self, id: i64) -> DeliveryRecord {
        DeliveryRecord {
            id,
            category: self.category,
            channel: self.channel,
            content: self.content,
            status: self.status,
            user_id: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A persisted delivery outcome, as listed in the notification history.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRecord {
    pub id: i64,
    pub category: Category,
    pub channel: Channel,
    pub content: NotificationContent,
    pub status: DeliveryStatus,
    pub user_id: SubscriberId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
