use axum::{extract::{Path, State}, http::StatusCode, Json};
use tracing::info;

use models::customer::{Customer, CustomerRequest};
use service::errors::ServiceError;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/getCustomers", tag = "customers",
    responses(
        (status = 200, description = "All customers", body = [crate::openapi::CustomerDoc]),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_customers(State(state): State<ServerState>) -> Result<Json<Vec<Customer>>, JsonApiError> {
    let list = state.customers.get_customers().await?;
    info!(count = list.len(), "list customers");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/addCustomer", tag = "customers",
    request_body = crate::openapi::CustomerRequestDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn add_customer(
    State(state): State<ServerState>,
    Json(input): Json<CustomerRequest>,
) -> Result<StatusCode, JsonApiError> {
    state.customers.add_customer(input).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete, path = "/deleteCustomer/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Deleted, or nothing to delete"),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_customer(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, JsonApiError> {
    state.customers.delete_customer(id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    put, path = "/updateCustomer/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = crate::openapi::CustomerRequestDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_customer(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<CustomerRequest>,
) -> Result<StatusCode, JsonApiError> {
    match state.customers.update_customer(id, input).await {
        Ok(_) => Ok(StatusCode::OK),
        Err(ServiceError::NotFound(_)) if state.silent_update_miss => {
            info!(id, "update of unknown customer ignored");
            Ok(StatusCode::OK)
        }
        Err(e) => Err(e.into()),
    }
}
