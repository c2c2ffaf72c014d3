//! Owner handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get},
    Router,
};

use crate::api::AppState;
use crate::domain::Pet;
use crate::errors::AppResult;

/// Create owner routes
pub fn owner_routes() -> Router<AppState> {
    Router::new()
        .route("/:id", delete(delete_owner))
        .route("/:id/pets", get(list_owner_pets))
}

/// Delete an owner and all of its pets
#[utoipa::path(
    delete,
    path = "/owners/{id}",
    tag = "Owners",
    params(
        ("id" = i64, Path, description = "Owner id")
    ),
    responses(
        (status = 200, description = "Owner and its pets removed, or nothing to remove"),
        (status = 400, description = "Id is not an integer"),
        (status = 500, description = "Database error")
    )
)]
pub async fn delete_owner(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.owner_service.delete(id).await?;
    Ok(StatusCode::OK)
}

/// List the pets of one owner
#[utoipa::path(
    get,
    path = "/owners/{id}/pets",
    tag = "Owners",
    params(
        ("id" = i64, Path, description = "Owner id")
    ),
    responses(
        (status = 200, description = "Pets assigned to the owner", body = [Pet]),
        (status = 400, description = "Id is not an integer"),
        (status = 500, description = "Database error")
    )
)]
pub async fn list_owner_pets(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Pet>>> {
    let pets = state.owner_service.get_owner_pets(id).await?;
    Ok(Json(pets))
}
