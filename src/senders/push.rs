use async_trait::async_trait;

use super::{ChannelSender, SendError};
use crate::domain::channel::Channel;
use crate::domain::delivery::DeliveryAttempt;
use crate::domain::subscriber::Subscriber;

/// Push notifications address the subscriber by id, so no contact is needed.
pub struct PushSender;

#[async_trait]
impl ChannelSender for PushSender {
    fn supports(&self, channel: Channel) -> bool {
        channel == Channel::Push
    }

    #[tracing::instrument(
        name = "Send a push notification",
        skip(self, subscriber, delivery),
        fields(user_id = %subscriber.id())
    )]
    async fn send(
        &self,
        subscriber: &Subscriber,
        delivery: &DeliveryAttempt,
    ) -> Result<(), SendError> {
        tracing::info!(
            recipient = %subscriber.name().as_ref(),
            category = %delivery.category(),
            content = %delivery.content().as_ref(),
            "Sending PUSH notification"
        );

        Ok(())
    }
}
