use async_trait::async_trait;

use models::customer::{Customer, CustomerRecord};

use crate::errors::ServiceError;

/// Persistence operations the customer service relies on.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Every stored customer, ascending by id.
    async fn find_all(&self) -> Result<Vec<Customer>, ServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError>;

    /// Insert when `record.id` is `None` (storage assigns the id), otherwise
    /// overwrite the stored customer with that id. Overwriting an id that is
    /// not stored is `ServiceError::NotFound`.
    async fn save(&self, record: CustomerRecord) -> Result<Customer, ServiceError>;

    /// Remove the customer if present; returns whether anything was removed.
    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError>;
}
