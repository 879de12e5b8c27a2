//! Channel senders: the pluggable delivery boundary of the fan-out.
//!
//! A sender advertises the channel it handles through [`ChannelSender::supports`]
//! and performs one delivery per [`ChannelSender::send`] call. The shipped
//! senders only emit a structured log event; a real transport is plugged in by
//! registering another implementation.

mod email;
mod push;
mod sms;

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::channel::Channel;
use crate::domain::delivery::DeliveryAttempt;
use crate::domain::subscriber::Subscriber;
use crate::domain::subscriber_id::SubscriberId;

pub use email::EmailSender;
pub use push::PushSender;
pub use sms::SmsSender;

#[derive(thiserror::Error, Debug)]
pub enum SendError {
    #[error("Subscriber {0} has no {1} to deliver to.")]
    MissingContact(SubscriberId, &'static str),
    #[error("The delivery transport failed: {0}")]
    Transport(String),
}

#[async_trait]
pub trait ChannelSender: Send + Sync {
    fn supports(&self, channel: Channel) -> bool;

    async fn send(
        &self,
        subscriber: &Subscriber,
        delivery: &DeliveryAttempt,
    ) -> Result<(), SendError>;
}

/// One sender per channel, in EMAIL, SMS, PUSH order.
pub fn default_senders() -> Vec<Arc<dyn ChannelSender>> {
    let senders: [Arc<dyn ChannelSender>; 3] = [
        Arc::new(EmailSender),
        Arc::new(SmsSender),
        Arc::new(PushSender),
    ];

    Vec::from(senders)
}
