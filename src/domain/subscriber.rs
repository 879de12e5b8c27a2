use crate::domain::category::Category;
use crate::domain::channel::Channel;
use crate::domain::subscriber_email::SubscriberEmail;
use crate::domain::subscriber_id::SubscriberId;
use crate::domain::subscriber_name::SubscriberName;
use crate::domain::subscriber_phone::SubscriberPhone;

/// A directory entry: who to reach, about what, and through which channels.
///
/// Categories and channels keep their declared order with duplicates removed.
/// Every enabled channel is backed by the contact it needs (email for
/// [`Channel::Email`], phone for [`Channel::Sms`]).
#[derive(Debug, Clone)]
pub struct Subscriber {
    id: SubscriberId,
    name: SubscriberName,
    email: Option<SubscriberEmail>,
    phone: Option<SubscriberPhone>,
    categories: Vec<Category>,
    channels: Vec<Channel>,
}

impl Subscriber {
    pub fn new(
        id: SubscriberId,
        name: SubscriberName,
        email: Option<SubscriberEmail>,
        phone: Option<SubscriberPhone>,
        categories: Vec<Category>,
        channels: Vec<Channel>,
    ) -> Result<Subscriber, String> {
        let channels = dedup_in_order(channels);

        if channels.contains(&Channel::Email) && email.is_none() {
            return Err(format!(
                "Subscriber {} enables EMAIL but has no email address",
                id
            ));
        }

        if channels.contains(&Channel::Sms) && phone.is_none() {
            return Err(format!(
                "Subscriber {} enables SMS but has no phone number",
                id
            ));
        }

        Ok(Self {
            id,
            name,
            email,
            phone,
            categories: dedup_in_order(categories),
            channels,
        })
    }

    pub fn id(&self) -> SubscriberId {
        self.id
    }

    pub fn name(&self) -> &SubscriberName {
        &self.name
    }

    pub fn email(&self) -> Option<&SubscriberEmail> {
        self.email.as_ref()
    }

    pub fn phone(&self) -> Option<&SubscriberPhone> {
        self.phone.as_ref()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn is_subscribed_to(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

fn dedup_in_order<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut unique = Vec::with_capacity(items.len());

    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }

    unique
}
