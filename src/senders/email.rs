use async_trait::async_trait;

use super::{ChannelSender, SendError};
use crate::domain::channel::Channel;
use crate::domain::delivery::DeliveryAttempt;
use crate::domain::subscriber::Subscriber;

pub struct EmailSender;

#[async_trait]
impl ChannelSender for EmailSender {
    fn supports(&self, channel: Channel) -> bool {
        channel == Channel::Email
    }

    #[tracing::instrument(
        name = "Send an email notification",
        skip(self, subscriber, delivery),
        fields(user_id = %subscriber.id())
    )]
    async fn send(
        &self,
        subscriber: &Subscriber,
        delivery: &DeliveryAttempt,
    ) -> Result<(), SendError> {
        let email = subscriber
            .email()
            .ok_or(SendError::MissingContact(subscriber.id(), "email address"))?;

        tracing::info!(
            recipient = %subscriber.name().as_ref(),
            email = %email.as_ref(),
            category = %delivery.category(),
            content = %delivery.content().as_ref(),
            "Sending EMAIL notification"
        );

        Ok(())
    }
}
