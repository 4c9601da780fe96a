use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::lookup::get_book,
        api::lookup::get_student,
    ),
    components(schemas(crate::models::Book, crate::models::Student)),
    tags(
        (name = "library-desk", description = "Library desk JSON lookups")
    )
)]
pub struct ApiDoc;
