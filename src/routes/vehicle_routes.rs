use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{ListingQuery, ListingResponse};
use crate::models::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/makes", get(list_makes))
        .route("/:id", get(get_vehicle))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Json<ListingResponse> {
    let controller = VehicleController::new(state.inventory.clone());
    Json(controller.list(&query).await)
}

async fn list_makes(State(state): State<AppState>) -> Json<Vec<String>> {
    let controller = VehicleController::new(state.inventory.clone());
    Json(controller.makes().await)
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(state.inventory.clone());
    let vehicle = controller.get_by_id(&id).await?;
    Ok(Json(vehicle))
}
