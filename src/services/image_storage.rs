//! Object storage de imágenes de vehículos
//!
//! Sube las fotos del panel de administración al bucket público del
//! backend hospedado (Supabase Storage) y devuelve su URL pública.

use async_trait::async_trait;
use rand::{distributions::Alphanumeric, Rng};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::config::EnvironmentConfig;
use crate::utils::errors::AppError;
use crate::utils::validation::sanitize_object_name;

/// Destino de las imágenes subidas
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Guarda el objeto y devuelve su URL pública
    async fn upload(&self, object_path: &str, content_type: &str, bytes: Vec<u8>) -> Result<String, AppError>;
}

/// Ruta única dentro del bucket: vehicles/<millis>-<aleatorio>-<nombre>
pub fn object_path_for(file_name: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(11)
        .map(|c| char::from(c).to_ascii_lowercase())
        .collect();

    format!(
        "vehicles/{}-{}-{}",
        chrono::Utc::now().timestamp_millis(),
        suffix,
        sanitize_object_name(file_name)
    )
}

fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Cliente de Supabase Storage
#[derive(Clone)]
pub struct SupabaseImageStorage {
    client: Client,
    base_url: String,
    service_key: String,
    bucket: String,
}

impl SupabaseImageStorage {
    pub fn new(client: Client, config: &EnvironmentConfig) -> Self {
        Self {
            client,
            base_url: config.storage_url.clone(),
            service_key: config.storage_service_key.clone(),
            bucket: config.storage_bucket.clone(),
        }
    }

    fn upload_url(&self, object_path: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, encode_path(object_path))
    }

    pub fn public_url(&self, object_path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url,
            self.bucket,
            encode_path(object_path)
        )
    }
}

#[async_trait]
impl ImageStorage for SupabaseImageStorage {
    async fn upload(&self, object_path: &str, content_type: &str, bytes: Vec<u8>) -> Result<String, AppError> {
        debug!("📤 Subiendo {} ({} bytes)", object_path, bytes.len());

        let response = self
            .client
            .post(self.upload_url(object_path))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .header("content-type", content_type)
            .header("cache-control", "max-age=3600")
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Storage request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Storage upload of {} returned {}: {}",
                object_path, status, body
            )));
        }

        info!("✅ Imagen subida: {}", object_path);
        Ok(self.public_url(object_path))
    }
}

/// Storage en memoria para tests y desarrollo
#[derive(Clone, Default)]
pub struct InMemoryImageStorage {
    objects: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    rejected_suffixes: Vec<String>,
}

impl InMemoryImageStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rechaza los objetos cuyo nombre termina en `suffix`
    pub fn rejecting(mut self, suffix: &str) -> Self {
        self.rejected_suffixes.push(suffix.to_string());
        self
    }

    pub async fn object_count(&self) -> usize {
        self.objects.read().await.len()
    }
}

#[async_trait]
impl ImageStorage for InMemoryImageStorage {
    async fn upload(&self, object_path: &str, _content_type: &str, bytes: Vec<u8>) -> Result<String, AppError> {
        if self.rejected_suffixes.iter().any(|s| object_path.ends_with(s.as_str())) {
            return Err(AppError::ExternalApi(format!("Storage rejected {}", object_path)));
        }

        self.objects.write().await.insert(object_path.to_string(), bytes);
        Ok(format!("memory://vehicle-images/{}", object_path))
    }
}
