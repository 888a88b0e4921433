use std::sync::Arc;

use tracing::{error, info, warn};

use crate::dto::upload_dto::{IncomingFile, UploadedFile, VehicleImagesResponse};
use crate::repositories::InventoryRepository;
use crate::services::image_storage::{object_path_for, ImageStorage};
use crate::utils::errors::AppError;

pub struct UploadController {
    repository: Arc<dyn InventoryRepository>,
    storage: Arc<dyn ImageStorage>,
}

impl UploadController {
    pub fn new(repository: Arc<dyn InventoryRepository>, storage: Arc<dyn ImageStorage>) -> Self {
        Self { repository, storage }
    }

    /// Sube cada archivo por separado. Los que fallan se registran y se
    /// omiten; el resto sigue adelante.
    pub async fn upload(&self, files: Vec<IncomingFile>) -> Result<Vec<UploadedFile>, AppError> {
        if files.is_empty() {
            return Err(AppError::BadRequest("No files provided".to_string()));
        }

        let mut uploaded = Vec::with_capacity(files.len());
        for IncomingFile { name, content_type, bytes } in files {
            let object_path = object_path_for(&name);
            let size = bytes.len();
            match self.storage.upload(&object_path, &content_type, bytes).await {
                Ok(url) => uploaded.push(UploadedFile::new(name, content_type, size, url)),
                Err(e) => {
                    error!("❌ Error subiendo {}: {}", name, e);
                    continue;
                }
            }
        }

        info!("📸 {} imagen(es) subida(s)", uploaded.len());
        Ok(uploaded)
    }

    /// Sube archivos y los añade a las imágenes de un vehículo existente
    pub async fn upload_for_vehicle(
        &self,
        vehicle_id: Option<&str>,
        files: Vec<IncomingFile>,
    ) -> Result<VehicleImagesResponse, AppError> {
        let raw_id = vehicle_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::BadRequest("Vehicle ID is required".to_string()))?;

        if files.is_empty() {
            return Err(AppError::BadRequest("No files provided".to_string()));
        }

        let vehicle_not_found = || AppError::NotFound("Vehicle not found".to_string());
        let id: i64 = raw_id.parse().map_err(|_| vehicle_not_found())?;
        if self.repository.find_by_id(id).await?.is_none() {
            warn!("⚠️ Subida para vehículo inexistente: {}", id);
            return Err(vehicle_not_found());
        }

        let uploaded_files = self.upload(files).await?;
        let new_urls: Vec<String> = uploaded_files.iter().map(|f| f.url.clone()).collect();

        let images = self
            .repository
            .append_images(id, &new_urls)
            .await?
            .ok_or_else(vehicle_not_found)?;

        Ok(VehicleImagesResponse {
            message: "Vehicle images updated successfully".to_string(),
            images,
            uploaded_files,
        })
    }
}
