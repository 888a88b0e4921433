use axum::{extract::State, middleware, routing::post, Json, Router};

use crate::controllers::lead_controller::LeadController;
use crate::dto::lead_dto::{InquiryRequest, InquiryResponse, ValuationRequestDto, ValuationResponse};
use crate::middleware::rate_limit_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Formularios públicos, con rate limiting por cliente
pub fn create_lead_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/api/inquiries", post(submit_inquiry))
        .route("/api/valuation", post(submit_valuation))
        .route_layer(middleware::from_fn_with_state(
            state.rate_limit.clone(),
            rate_limit_middleware,
        ))
}

async fn submit_inquiry(
    State(state): State<AppState>,
    Json(request): Json<InquiryRequest>,
) -> Result<Json<InquiryResponse>, AppError> {
    let controller = LeadController::new(state.leads.clone());
    let response = controller.submit_inquiry(request).await?;
    Ok(Json(response))
}

async fn submit_valuation(
    State(state): State<AppState>,
    Json(request): Json<ValuationRequestDto>,
) -> Result<Json<ValuationResponse>, AppError> {
    let controller = LeadController::new(state.leads.clone());
    let response = controller.submit_valuation(request).await?;
    Ok(Json(response))
}
