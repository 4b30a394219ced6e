use anyhow::Result;

use super::migrated_db;
use crate::customer::{self, CustomerRecord, CustomerRequest};
use crate::errors::ModelError;

fn record(name: &str, email: &str, age: i32) -> CustomerRecord {
    CustomerRecord::new(CustomerRequest { name: name.into(), email: email.into(), age })
}

#[tokio::test]
async fn insert_assigns_sequential_ids() -> Result<()> {
    let db = migrated_db().await?;

    let a = customer::insert(&db, record("Alice", "alice@x.com", 30)).await?;
    let b = customer::insert(&db, record("Bob", "bob@x.com", 41)).await?;
    assert_eq!(a.id, 1);
    assert_eq!(b.id, 2);
    assert_eq!(a.name, "Alice");

    let all = customer::list(&db).await?;
    assert_eq!(all, vec![a, b]);
    Ok(())
}

#[tokio::test]
async fn insert_ignores_duplicate_emails() -> Result<()> {
    let db = migrated_db().await?;
    customer::insert(&db, record("Alice", "same@x.com", 30)).await?;
    customer::insert(&db, record("Alice", "same@x.com", 30)).await?;
    assert_eq!(customer::list(&db).await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn replace_overwrites_fields_and_keeps_id() -> Result<()> {
    let db = migrated_db().await?;
    let a = customer::insert(&db, record("Alice", "alice@x.com", 30)).await?;

    let updated = customer::replace(&db, a.id, record("Alice B", "ab@x.com", 31)).await?;
    assert_eq!(updated.id, a.id);
    assert_eq!(updated.email, "ab@x.com");

    let found = customer::find(&db, a.id).await?.expect("customer present");
    assert_eq!(found, updated);

    // same values again: still one row, same content
    let again = customer::replace(&db, a.id, record("Alice B", "ab@x.com", 31)).await?;
    assert_eq!(again, updated);
    assert_eq!(customer::list(&db).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn replace_missing_row_is_not_found() -> Result<()> {
    let db = migrated_db().await?;
    let err = customer::replace(&db, 42, record("Ghost", "g@x.com", 1)).await.unwrap_err();
    assert!(matches!(err, ModelError::NotFound { id: 42, .. }));
    assert!(customer::list(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn delete_reports_whether_row_existed() -> Result<()> {
    let db = migrated_db().await?;
    let a = customer::insert(&db, record("Alice", "alice@x.com", 30)).await?;

    assert!(customer::delete(&db, a.id).await?);
    assert!(!customer::delete(&db, a.id).await?);
    assert!(customer::find(&db, a.id).await?.is_none());
    Ok(())
}
