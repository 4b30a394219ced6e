use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use models::customer::{Customer, CustomerRecord};

use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;

#[derive(Debug)]
struct Inner {
    rows: BTreeMap<i32, Customer>,
    next_id: i32,
}

/// Process-local repository. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct InMemoryCustomerRepository {
    inner: RwLock<Inner>,
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self { inner: RwLock::new(Inner { rows: BTreeMap::new(), next_id: 1 }) }
    }
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, ServiceError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, ServiceError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn save(&self, record: CustomerRecord) -> Result<Customer, ServiceError> {
        let mut inner = self.inner.write().await;
        let id = match record.id {
            Some(id) if inner.rows.contains_key(&id) => id,
            Some(id) => return Err(ServiceError::not_found("customer", id)),
            None => {
                let id = inner.next_id;
                inner.next_id = id
                    .checked_add(1)
                    .ok_or_else(|| ServiceError::Db("customer id space exhausted".into()))?;
                id
            }
        };
        let stored = record.with_id(id);
        inner.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.remove(&id).is_some())
    }
}
