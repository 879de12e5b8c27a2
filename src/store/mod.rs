mod memory;
mod postgres;

use async_trait::async_trait;

use crate::domain::delivery::{DeliveryAttempt, DeliveryRecord};

pub use memory::InMemoryDeliveryStore;
pub use postgres::PgDeliveryStore;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Failed to execute a query against the deliveries table.")]
    Query(#[from] sqlx::Error),
    #[error("The in-memory delivery store is poisoned.")]
    Poisoned,
}

/// Append-only storage of delivery outcomes.
#[async_trait]
pub trait DeliveryStore: Send + Sync {
    /// Persists one attempt and returns it with its assigned id.
    async fn save(&self, attempt: &DeliveryAttempt) -> Result<DeliveryRecord, StoreError>;

    /// Every record, newest `created_at` first (ties broken by newest id).
    async fn list_newest_first(&self) -> Result<Vec<DeliveryRecord>, StoreError>;
}
