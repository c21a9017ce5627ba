//! OpenAPI documentation

use axum::Router;
use utoipa::{openapi::server::Server, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::records;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Record Service API",
        version = "0.1.0",
        description = "In-memory CRUD resource of named records"
    ),
    paths(
        records::list_records,
        records::get_record,
        records::create_record,
        records::update_record,
        records::delete_record,
    ),
    components(
        schemas(
            crate::models::record::Record,
            crate::models::record::RecordPayload,
            crate::error::ValidationFailure,
            crate::error::ValidationDetail,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "records", description = "Record management")
    )
)]
pub struct ApiDoc;

/// OpenAPI document with the resource's mount path as its server
pub fn api_doc(base_path: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(base_path)]);
    doc
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router(base_path: &str) -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api_doc(base_path)))
}
