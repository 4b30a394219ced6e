use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i32) -> Self { Self::NotFound(format!("{} {} not found", entity, id)) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::NotFound { entity, id } => Self::not_found(entity, id),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_not_found_maps_to_not_found() {
        let e: ServiceError = ModelError::NotFound { entity: "customer", id: 3 }.into();
        assert!(matches!(e, ServiceError::NotFound(ref m) if m == "customer 3 not found"));
    }

    #[test]
    fn model_db_error_keeps_message() {
        let e: ServiceError = ModelError::Db("connection reset".into()).into();
        assert_eq!(e.to_string(), "database error: connection reset");
    }
}
