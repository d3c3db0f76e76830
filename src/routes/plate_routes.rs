//! Rutas HTTP del catálogo de matrículas

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::controllers::plate_controller::PlateController;
use crate::dto::plate_dto::{
    CreatePlateRequest, PlateFormResponse, PlateListQuery, PlateListResponse, PlateResponse,
};
use crate::repositories::plate_repository::SqlPlateRepository;
use crate::services::plate_service::PlateService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_plate_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_plates).post(add_plate))
        .route("/new", get(new_plate_form))
        .route("/:id", get(get_plate))
        .route("/:id/toggle-reservation", post(toggle_reservation))
}

/// El handle del repositorio se construye por request sobre el pool
/// compartido; su scope es el de un request.
fn controller(state: &AppState) -> PlateController {
    let repository = Arc::new(SqlPlateRepository::new(state.pool.clone()));
    PlateController::new(PlateService::new(repository))
}

async fn list_plates(
    State(state): State<AppState>,
    Query(query): Query<PlateListQuery>,
) -> Result<Json<PlateListResponse>, AppError> {
    let response = controller(&state).list(query).await?;
    Ok(Json(response))
}

/// Formulario vacío de alta; sin efectos secundarios.
async fn new_plate_form() -> Json<PlateFormResponse> {
    Json(PlateFormResponse::empty())
}

async fn add_plate(
    State(state): State<AppState>,
    Json(request): Json<CreatePlateRequest>,
) -> Result<Redirect, AppError> {
    controller(&state).add(request).await?;
    Ok(Redirect::to("/api/plates"))
}

async fn get_plate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PlateResponse>, AppError> {
    let response = controller(&state).get_by_id(id).await?;
    Ok(Json(response))
}

/// Alternar reserva y redirigir al listado; un id inexistente redirige
/// igualmente sin tocar nada.
async fn toggle_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Redirect, AppError> {
    controller(&state).toggle_reservation(id).await?;
    Ok(Redirect::to("/api/plates"))
}
