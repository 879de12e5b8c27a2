use async_trait::async_trait;

use super::{ChannelSender, SendError};
use crate::domain::channel::Channel;
use crate::domain::delivery::DeliveryAttempt;
use crate::domain::subscriber::Subscriber;

pub struct SmsSender;

#[async_trait]
impl ChannelSender for SmsSender {
    fn supports(&self, channel: Channel) -> bool {
        channel == Channel::Sms
    }

    #[tracing::instrument(
        name = "Send an SMS notification",
        skip(self, subscriber, delivery),
        fields(user_id = %subscriber.id())
    )]
    async fn send(
        &self,
        subscriber: &Subscriber,
        delivery: &DeliveryAttempt,
    ) -> Result<(), SendError> {
        let phone = subscriber
            .phone()
            .ok_or(SendError::MissingContact(subscriber.id(), "phone number"))?;

        tracing::info!(
            recipient = %subscriber.name().as_ref(),
            phone = %phone.as_ref(),
            category = %delivery.category(),
            content = %delivery.content().as_ref(),
            "Sending SMS notification"
        );

        Ok(())
    }
}
