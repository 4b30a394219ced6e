use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CustomerDoc { pub id: i32, pub name: String, pub email: String, pub age: i32 }

#[derive(ToSchema)]
pub struct CustomerRequestDoc { pub name: String, pub email: String, pub age: i32 }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::get_customers,
        crate::routes::customers::add_customer,
        crate::routes::customers::delete_customer,
        crate::routes::customers::update_customer,
    ),
    components(
        schemas(
            HealthResponse,
            CustomerDoc,
            CustomerRequestDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers")
    )
)]
pub struct ApiDoc;
