//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use reqwest::Client;
use sqlx::PgPool;
use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::middleware::RateLimitState;
use crate::repositories::{
    InMemoryInventoryRepository, InMemoryLeadRepository, InventoryRepository, LeadRepository,
    PgInventoryRepository, PgLeadRepository,
};
use crate::services::image_storage::{ImageStorage, InMemoryImageStorage, SupabaseImageStorage};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub inventory: Arc<dyn InventoryRepository>,
    pub leads: Arc<dyn LeadRepository>,
    pub images: Arc<dyn ImageStorage>,
    pub rate_limit: RateLimitState,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        inventory: Arc<dyn InventoryRepository>,
        leads: Arc<dyn LeadRepository>,
        images: Arc<dyn ImageStorage>,
    ) -> Self {
        let rate_limit = RateLimitState::from_config(&config);
        Self {
            config,
            inventory,
            leads,
            images,
            rate_limit,
        }
    }

    /// Estado de producción: Postgres para los datos y Supabase Storage
    /// para las imágenes
    pub fn connected(pool: PgPool, config: EnvironmentConfig) -> Self {
        let images = SupabaseImageStorage::new(Client::new(), &config);
        Self::new(
            config,
            Arc::new(PgInventoryRepository::new(pool.clone())),
            Arc::new(PgLeadRepository::new(pool)),
            Arc::new(images),
        )
    }

    /// Estado completamente en memoria
    pub fn in_memory(config: EnvironmentConfig, inventory: InMemoryInventoryRepository) -> Self {
        Self::new(
            config,
            Arc::new(inventory),
            Arc::new(InMemoryLeadRepository::new()),
            Arc::new(InMemoryImageStorage::new()),
        )
    }
}
