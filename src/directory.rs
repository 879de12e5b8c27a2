use async_trait::async_trait;

use crate::domain::new_subscriber::SubscriberEntry;
use crate::domain::subscriber::Subscriber;

/// Read-only source of the subscribers a notification can reach.
#[async_trait]
pub trait SubscriberDirectory: Send + Sync {
    /// The full directory at call time, in directory order.
    async fn list_all(&self) -> Vec<Subscriber>;
}

/// Directory fixed at startup, usually from the `directory` configuration section.
#[derive(Debug)]
pub struct StaticSubscriberDirectory {
    subscribers: Vec<Subscriber>,
}

impl StaticSubscriberDirectory {
    pub fn new(subscribers: Vec<Subscriber>) -> Self {
        Self { subscribers }
    }

    pub fn from_entries(entries: Vec<SubscriberEntry>) -> Result<Self, String> {
        let subscribers = entries
            .into_iter()
            .map(Subscriber::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = std::collections::HashSet::new();
        if let Some(duplicate) = subscribers.iter().find(|s| !seen.insert(s.id())) {
            return Err(format!("Subscriber id {} is listed twice", duplicate.id()));
        }

        Ok(Self::new(subscribers))
    }
}

#[async_trait]
impl SubscriberDirectory for StaticSubscriberDirectory {
    async fn list_all(&self) -> Vec<Subscriber> {
        self.subscribers.clone()
    }
}
