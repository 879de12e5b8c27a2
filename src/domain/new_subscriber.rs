use serde::Deserialize;

use crate::domain::category::Category;
use crate::domain::channel::Channel;
use crate::domain::subscriber::Subscriber;
use crate::domain::subscriber_email::SubscriberEmail;
use crate::domain::subscriber_id::SubscriberId;
use crate::domain::subscriber_name::SubscriberName;
use crate::domain::subscriber_phone::SubscriberPhone;

/// Unvalidated directory entry as it appears in configuration.
#[derive(Deserialize, Debug, Clone)]
pub struct SubscriberEntry {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub categories: Vec<String>,
    pub channels: Vec<String>,
}

impl TryFrom<SubscriberEntry> for Subscriber {
    type Error = String;

    fn try_from(entry: SubscriberEntry) -> Result<Self, Self::Error> {
        let id = SubscriberId::parse(entry.id)?;
        let name = SubscriberName::parse(entry.name)?;
        let email = entry.email.map(SubscriberEmail::parse).transpose()?;
        let phone = entry.phone.map(SubscriberPhone::parse).transpose()?;
        let categories = entry
            .categories
            .into_iter()
            .map(Category::parse)
            .collect::<Result<Vec<_>, _>>()?;
        let channels = entry
            .channels
            .into_iter()
            .map(Channel::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Subscriber::new(id, name, email, phone, categories, channels)
    }
}
