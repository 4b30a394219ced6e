use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::customer::{self, Customer, CustomerRecord};

use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, ServiceError> {
        Ok(customer::list(&self.db).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError> {
        Ok(customer::find(&self.db, id).await?)
    }

    async fn save(&self, record: CustomerRecord) -> Result<Customer, ServiceError> {
        match record.id {
            None => Ok(customer::insert(&self.db, record).await?),
            Some(id) => Ok(customer::replace(&self.db, id, record).await?),
        }
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(customer::delete(&self.db, id).await?)
    }
}
