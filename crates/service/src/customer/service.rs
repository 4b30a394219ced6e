use std::sync::Arc;

use tracing::{debug, info, instrument};

use models::customer::{Customer, CustomerRecord, CustomerRequest};

use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;

/// Application service for customers.
#[derive(Clone)]
pub struct CustomerService {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self { Self { repo } }

    pub async fn get_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        self.repo.find_all().await
    }

    /// Persist a new customer; no uniqueness checks on any field.
    #[instrument(skip(self, request))]
    pub async fn add_customer(&self, request: CustomerRequest) -> Result<Customer, ServiceError> {
        let created = self.repo.save(CustomerRecord::new(request)).await?;
        info!(event = "customer_created", id = created.id);
        Ok(created)
    }

    /// Delete by id. A missing id is accepted without error.
    #[instrument(skip(self))]
    pub async fn delete_customer(&self, id: i32) -> Result<(), ServiceError> {
        if self.repo.delete_by_id(id).await? {
            info!(event = "customer_deleted", id);
        } else {
            debug!(event = "customer_delete_miss", id, "no customer with this id");
        }
        Ok(())
    }

    /// Replace name, email and age of customer `id`. Storage is left untouched
    /// and `ServiceError::NotFound` returned when the id is unknown.
    #[instrument(skip(self, request))]
    pub async fn update_customer(&self, id: i32, request: CustomerRequest) -> Result<Customer, ServiceError> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("customer", id))?;
        let updated = self.repo.save(CustomerRecord::replacing(&existing, request)).await?;
        info!(event = "customer_updated", id = updated.id);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::repo::{InMemoryCustomerRepository, SeaOrmCustomerRepository};
    use crate::test_support::sqlite_db;

    fn request(name: &str, email: &str, age: i32) -> CustomerRequest {
        CustomerRequest { name: name.into(), email: email.into(), age }
    }

    fn memory_service() -> CustomerService {
        CustomerService::new(Arc::new(InMemoryCustomerRepository::new()))
    }

    #[tokio::test]
    async fn add_then_list_returns_new_customer() -> Result<(), anyhow::Error> {
        let svc = memory_service();
        assert!(svc.get_customers().await?.is_empty());

        svc.add_customer(request("Alice", "alice@x.com", 30)).await?;
        let all = svc.get_customers().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], Customer { id: 1, name: "Alice".into(), email: "alice@x.com".into(), age: 30 });
        Ok(())
    }

    #[tokio::test]
    async fn add_assigns_distinct_ids() -> Result<(), anyhow::Error> {
        let svc = memory_service();
        let a = svc.add_customer(request("Same", "same@x.com", 1)).await?;
        let b = svc.add_customer(request("Same", "same@x.com", 1)).await?;
        assert_ne!(a.id, b.id);
        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_id_leaves_storage_alone() -> Result<(), anyhow::Error> {
        let svc = memory_service();
        svc.add_customer(request("Alice", "alice@x.com", 30)).await?;
        let before = svc.get_customers().await?;

        svc.delete_customer(99).await?;
        assert_eq!(svc.get_customers().await?, before);
        Ok(())
    }

    #[tokio::test]
    async fn delete_twice_same_as_once() -> Result<(), anyhow::Error> {
        let svc = memory_service();
        let a = svc.add_customer(request("Alice", "alice@x.com", 30)).await?;
        let b = svc.add_customer(request("Bob", "bob@x.com", 40)).await?;

        svc.delete_customer(a.id).await?;
        svc.delete_customer(a.id).await?;
        assert_eq!(svc.get_customers().await?, vec![b]);
        Ok(())
    }

    #[tokio::test]
    async fn update_existing_overwrites_fields_and_keeps_id() -> Result<(), anyhow::Error> {
        let svc = memory_service();
        let a = svc.add_customer(request("Alice", "alice@x.com", 30)).await?;

        let updated = svc.update_customer(a.id, request("Alice B", "ab@x.com", 31)).await?;
        assert_eq!(updated, Customer { id: a.id, name: "Alice B".into(), email: "ab@x.com".into(), age: 31 });
        assert_eq!(svc.get_customers().await?, vec![updated]);
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found_and_creates_nothing() -> Result<(), anyhow::Error> {
        let svc = memory_service();
        let a = svc.add_customer(request("Alice", "alice@x.com", 30)).await?;

        let err = svc.update_customer(a.id + 1, request("Ghost", "g@x.com", 1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(svc.get_customers().await?, vec![a]);
        Ok(())
    }

    #[tokio::test]
    async fn lifecycle_against_sqlite() -> Result<(), anyhow::Error> {
        let svc = CustomerService::new(Arc::new(SeaOrmCustomerRepository::new(sqlite_db().await?)));

        svc.add_customer(request("Alice", "alice@x.com", 30)).await?;
        assert_eq!(
            svc.get_customers().await?,
            vec![Customer { id: 1, name: "Alice".into(), email: "alice@x.com".into(), age: 30 }]
        );

        svc.update_customer(1, request("Alice B", "ab@x.com", 31)).await?;
        assert_eq!(
            svc.get_customers().await?,
            vec![Customer { id: 1, name: "Alice B".into(), email: "ab@x.com".into(), age: 31 }]
        );

        svc.delete_customer(1).await?;
        assert!(svc.get_customers().await?.is_empty());
        Ok(())
    }
}
