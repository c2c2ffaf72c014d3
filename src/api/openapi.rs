//! OpenAPI documentation configuration.
//!
//! The generated document is served as JSON at `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::api::handlers::{owner_handler, pet_handler};
use crate::domain::{Owner, Pet};

/// OpenAPI documentation for the Pet Registry
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pet Registry",
        version = "0.1.0",
        description = "Owners and their pets over Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Pet endpoints
        pet_handler::list_pets,
        pet_handler::init,
        // Owner endpoints
        owner_handler::delete_owner,
        owner_handler::list_owner_pets,
    ),
    components(
        schemas(Owner, Pet)
    ),
    tags(
        (name = "Pets", description = "Pet listing and demonstration seed"),
        (name = "Owners", description = "Owner removal and pet lookup")
    )
)]
pub struct ApiDoc;
