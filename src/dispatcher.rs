use std::sync::Arc;

use crate::directory::SubscriberDirectory;
use crate::domain::category::Category;
use crate::domain::channel::Channel;
use crate::domain::delivery::{DeliveryAttempt, DeliveryRecord};
use crate::domain::notification_content::NotificationContent;
use crate::domain::subscriber::Subscriber;
use crate::senders::ChannelSender;
use crate::store::{DeliveryStore, StoreError};

#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error("Failed to persist a delivery record.")]
    Store(#[source] StoreError),
    #[error("Delivery bookkeeping went wrong: {0}")]
    InvalidTransition(String),
}

/// Outcome counts of one dispatch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSummary {
    pub subscribers: usize,
    pub sent: usize,
    pub failed: usize,
}

impl DispatchSummary {
    pub fn attempts(&self) -> usize {
        self.sent + self.failed
    }
}

/// Fans a notification out to every (subscriber, channel) pair of a category.
pub struct Dispatcher {
    directory: Arc<dyn SubscriberDirectory>,
    senders: Vec<Arc<dyn ChannelSender>>,
    store: Arc<dyn DeliveryStore>,
}

impl Dispatcher {
    pub fn new(
        directory: Arc<dyn SubscriberDirectory>,
        senders: Vec<Arc<dyn ChannelSender>>,
        store: Arc<dyn DeliveryStore>,
    ) -> Self {
        Self {
            directory,
            senders,
            store,
        }
    }

    /// Attempts every pair in sequence and persists one record per attempt.
    ///
    /// A failing sender only marks its own record `FAILED`; the remaining
    /// pairs are still attempted. A failing store aborts the dispatch.
    #[tracing::instrument(
        name = "Dispatching a notification to subscribers",
        skip(self, content),
        fields(category = %category)
    )]
    pub async fn dispatch(
        &self,
        category: Category,
        content: &NotificationContent,
    ) -> Result<DispatchSummary, DispatchError> {
        let subscribers: Vec<Subscriber> = self
            .directory
            .list_all()
            .await
            .into_iter()
            .filter(|subscriber| subscriber.is_subscribed_to(category))
            .collect();

        tracing::info!(
            "Found {} subscribed users for category {}",
            subscribers.len(),
            category
        );

        let mut summary = DispatchSummary {
            subscribers: subscribers.len(),
            ..DispatchSummary::default()
        };

        if subscribers.is_empty() {
            tracing::warn!("No users subscribed to category {}", category);
            return Ok(summary);
        }

        for subscriber in &subscribers {
            for &channel in subscriber.channels() {
                for sender in self.senders.iter().filter(|s| s.supports(channel)) {
                    let record = self
                        .attempt(sender.as_ref(), subscriber, category, channel, content)
                        .await?;

                    if record.status.is_sent() {
                        summary.sent += 1;
                    } else {
                        summary.failed += 1;
                    }
                }
            }
        }

        tracing::info!(
            sent = summary.sent,
            failed = summary.failed,
            "Notification fan-out completed for {} users",
            summary.subscribers
        );

        Ok(summary)
    }

    async fn attempt(
        &self,
        sender: &dyn ChannelSender,
        subscriber: &Subscriber,
        category: Category,
        channel: Channel,
        content: &NotificationContent,
    ) -> Result<DeliveryRecord, DispatchError> {
        let mut delivery =
            DeliveryAttempt::new(category, channel, content.clone(), subscriber.id());

        let settled = match sender.send(subscriber, &delivery).await {
            Ok(()) => delivery.mark_sent(),
            Err(err) => {
                tracing::warn!(
                    "Failed to deliver via {} to user {}: {}",
                    channel,
                    subscriber.id(),
                    err
                );
                delivery.mark_failed()
            }
        };
        settled.map_err(DispatchError::InvalidTransition)?;

        self.store
            .save(&delivery)
            .await
            .map_err(DispatchError::Store)
    }
}
