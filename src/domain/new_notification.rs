use actix_web::web;
use serde::Deserialize;

use crate::domain::category::Category;
use crate::domain::notification_content::NotificationContent;

pub struct NewNotification {
    pub category: Category,
    pub content: NotificationContent,
}

#[derive(Deserialize, Debug)]
pub struct NewNotificationBody {
    pub category: String,
    pub content: String,
}

impl TryFrom<web::Json<NewNotificationBody>> for NewNotification {
    type Error = String;

    fn try_from(body: web::Json<NewNotificationBody>) -> Result<Self, Self::Error> {
        let body = body.into_inner();
        let category = Category::parse(body.category)?;
        let content = NotificationContent::parse(body.content)?;

        Ok(NewNotification { category, content })
    }
}
