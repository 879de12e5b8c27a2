use async_trait::async_trait;
use std::sync::Mutex;

use super::{DeliveryStore, StoreError};
use crate::domain::delivery::{DeliveryAttempt, DeliveryRecord};

/// Process-local store, used by the `memory` storage backend and in tests.
#[derive(Default)]
pub struct InMemoryDeliveryStore {
    records: Mutex<Vec<DeliveryRecord>>,
}

#[async_trait]
impl DeliveryStore for InMemoryDeliveryStore {
    async fn save(&self, attempt: &DeliveryAttempt) -> Result<DeliveryRecord, StoreError> {
        let mut records = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        let record = attempt.clone().into_record(records.len() as i64 + 1);

        records.push(record.clone());

        Ok(record)
    }

    async fn list_newest_first(&self) -> Result<Vec<DeliveryRecord>, StoreError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError::Poisoned)?
            .clone();

        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(records)
    }
}
