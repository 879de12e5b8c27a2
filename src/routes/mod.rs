mod health_check;
mod notifications;

pub use health_check::health_check;
pub use notifications::{
    json_error_handler, list_notification_history, notify_subscribers, ErrorResponse,
    NotificationError,
};
