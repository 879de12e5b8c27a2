pub mod category;
pub mod channel;
pub mod delivery;
pub mod delivery_status;
pub mod new_notification;
pub mod new_subscriber;
pub mod notification_content;
pub mod subscriber;
pub mod subscriber_email;
pub mod subscriber_id;
pub mod subscriber_name;
pub mod subscriber_phone;
