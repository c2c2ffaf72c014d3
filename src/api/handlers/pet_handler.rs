//! Pet handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::domain::Pet;
use crate::errors::AppResult;

/// Create pet routes
pub fn pet_routes() -> Router<AppState> {
    Router::new()
        .route("/pets", get(list_pets))
        .route("/init", get(init))
}

/// List all pets with their owners
#[utoipa::path(
    get,
    path = "/pets",
    tag = "Pets",
    responses(
        (status = 200, description = "All pets, each with its owner", body = [Pet]),
        (status = 500, description = "Database error")
    )
)]
pub async fn list_pets(State(state): State<AppState>) -> AppResult<Json<Vec<Pet>>> {
    let pets = state.pet_service.get_pets().await?;
    Ok(Json(pets))
}

/// Seed two owners with one pet each
#[utoipa::path(
    get,
    path = "/init",
    tag = "Pets",
    responses(
        (status = 200, description = "Seed data committed"),
        (status = 500, description = "Seed data already present or database error")
    )
)]
pub async fn init(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.pet_service.insert_some_pets().await?;
    Ok(StatusCode::OK)
}
