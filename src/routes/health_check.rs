use actix_web::{HttpRequest, HttpResponse, Responder};

/// Liveness probe; never touches the delivery store.
#[tracing::instrument(name = "Health Check handler")]
pub async fn health_check(_: HttpRequest) -> impl Responder {
    HttpResponse::Ok().finish()
}
