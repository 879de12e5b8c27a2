use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use chrono::{DateTime, Utc};

use crate::dispatcher::{DispatchError, Dispatcher};
use crate::domain::new_notification::{NewNotification, NewNotificationBody};
use crate::store::{DeliveryStore, StoreError};

#[derive(serde::Serialize, Debug)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: String, path: Option<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message,
            path,
        }
    }
}

#[tracing::instrument(
    name = "Notifying users subscribed to a category",
    skip(body, dispatcher, req),
    fields(
        category = %body.category
    )
)]
pub async fn notify_subscribers(
    body: web::Json<NewNotificationBody>,
    dispatcher: web::Data<Dispatcher>,
    req: HttpRequest,
) -> Result<HttpResponse, NotificationError> {
    let notification: NewNotification = body.try_into().map_err(|message: String| {
        tracing::warn!("Validation error: {}", message);
        NotificationError::Validation {
            message,
            path: req.path().to_string(),
        }
    })?;

    dispatcher
        .dispatch(notification.category, &notification.content)
        .await
        .map_err(|source| NotificationError::Dispatch {
            source,
            path: req.path().to_string(),
        })?;

    Ok(HttpResponse::NoContent().finish())
}

#[tracing::instrument(name = "Listing the notification history", skip(store, req))]
pub async fn list_notification_history(
    store: web::Data<dyn DeliveryStore>,
    req: HttpRequest,
) -> Result<HttpResponse, NotificationError> {
    let history = store
        .list_newest_first()
        .await
        .map_err(|source| NotificationError::History {
            source,
            path: req.path().to_string(),
        })?;

    tracing::info!("Found {} notifications in history", history.len());

    Ok(HttpResponse::Ok().json(history))
}

/// Maps body deserialization failures onto the JSON error body.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!("Failed to read request body: {}", err);

    let status = StatusCode::BAD_REQUEST;
    let body = ErrorResponse::new(
        status,
        String::from("Invalid request body. Please check the JSON format and field values."),
        Some(req.path().to_string()),
    );

    actix_web::error::InternalError::from_response(err, HttpResponse::build(status).json(body))
        .into()
}

/// Handler failures, each tagged with the request path it answers.
#[derive(thiserror::Error)]
pub enum NotificationError {
    #[error("{message}")]
    Validation { message: String, path: String },
    #[error("Failed to dispatch the notification.")]
    Dispatch {
        #[source]
        source: DispatchError,
        path: String,
    },
    #[error("Failed to read the notification history.")]
    History {
        #[source]
        source: StoreError,
        path: String,
    },
}

impl NotificationError {
    pub fn path(&self) -> &str {
        match self {
            NotificationError::Validation { path, .. }
            | NotificationError::Dispatch { path, .. }
            | NotificationError::History { path, .. } => path,
        }
    }
}

impl std::fmt::Debug for NotificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;

        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            write!(f, "\n\tCaused by: {}", cause)?;
            source = cause.source();
        }

        Ok(())
    }
}

impl ResponseError for NotificationError {
    fn status_code(&self) -> StatusCode {
        match self {
            NotificationError::Validation { .. } => StatusCode::BAD_REQUEST,
            NotificationError::Dispatch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            NotificationError::History { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            NotificationError::Validation { message, .. } => message.clone(),
            _ => {
                tracing::error!("Unexpected error occurred: {:?}", self);
                String::from("An unexpected error occurred. Please try again later.")
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse::new(
            self.status_code(),
            message,
            Some(self.path().to_string()),
        ))
    }
}
