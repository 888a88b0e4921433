use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};

use crate::controllers::upload_controller::UploadController;
use crate::dto::upload_dto::{IncomingFile, UploadedFile, VehicleImagesResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn create_upload_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(upload_files)
                .put(upload_vehicle_images)
                .patch(upload_vehicle_images),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

/// Campos del formulario multipart: archivos en `files`, destino en `vehicleId`
#[derive(Debug, Default)]
struct UploadForm {
    files: Vec<IncomingFile>,
    vehicle_id: Option<String>,
}

async fn read_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        match field.name() {
            Some("files") => {
                let name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid file {}: {}", name, e)))?;
                form.files.push(IncomingFile {
                    name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            Some("vehicleId") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid vehicleId: {}", e)))?;
                form.vehicle_id = Some(value);
            }
            _ => {}
        }
    }

    Ok(form)
}

async fn upload_files(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Vec<UploadedFile>>, AppError> {
    let form = read_form(multipart).await?;
    let controller = UploadController::new(state.inventory.clone(), state.images.clone());
    let uploaded = controller.upload(form.files).await?;
    Ok(Json(uploaded))
}

async fn upload_vehicle_images(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<VehicleImagesResponse>, AppError> {
    let form = read_form(multipart).await?;
    let controller = UploadController::new(state.inventory.clone(), state.images.clone());
    let response = controller
        .upload_for_vehicle(form.vehicle_id.as_deref(), form.files)
        .await?;
    Ok(Json(response))
}
