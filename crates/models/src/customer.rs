use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A stored customer. Always carries the id assigned by storage.
pub type Customer = Model;

/// Body of create and update requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRequest {
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// A customer value on its way to storage. `id` is `None` until the
/// repository assigns one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerRecord {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl CustomerRecord {
    /// Unsaved record built from request fields.
    pub fn new(req: CustomerRequest) -> Self {
        Self { id: None, name: req.name, email: req.email, age: req.age }
    }

    /// Replacement for `existing`: same id, every other field from `req`.
    pub fn replacing(existing: &Customer, req: CustomerRequest) -> Self {
        Self { id: Some(existing.id), ..Self::new(req) }
    }

    /// Attach an id, producing the stored form.
    pub fn with_id(self, id: i32) -> Customer {
        Customer { id, name: self.name, email: self.email, age: self.age }
    }
}

impl From<Customer> for CustomerRecord {
    fn from(c: Customer) -> Self {
        Self { id: Some(c.id), name: c.name, email: c.email, age: c.age }
    }
}

/// All customers ordered by id.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Insert a new row; the database assigns the id.
pub async fn insert(db: &DatabaseConnection, record: CustomerRecord) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(record.name),
        email: Set(record.email),
        age: Set(record.age),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite every column of row `id`.
pub async fn replace(db: &DatabaseConnection, id: i32, record: CustomerRecord) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(id),
        name: Set(record.name),
        email: Set(record.email),
        age: Set(record.age),
    };
    match am.update(db).await {
        Ok(m) => Ok(m),
        Err(DbErr::RecordNotUpdated) | Err(DbErr::RecordNotFound(_)) => {
            Err(ModelError::NotFound { entity: "customer", id })
        }
        Err(e) => Err(e.into()),
    }
}

/// Remove row `id`; returns whether a row was deleted.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
