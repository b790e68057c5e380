use utoipa::OpenApi;
use utoipa::ToSchema;

use service::catalog::{CreateServiceRequest, Service};

use crate::routes::services::DeleteServiceResponse;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorResponseDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::services::list_services,
        crate::routes::services::create_service,
        crate::routes::services::delete_service,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponseDoc,
            Service,
            CreateServiceRequest,
            DeleteServiceResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "services")
    )
)]
pub struct ApiDoc;
