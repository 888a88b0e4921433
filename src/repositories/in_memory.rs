//! Implementaciones en memoria de los repositorios
//!
//! Útiles para tests y desarrollo local sin Postgres. Replican las reglas
//! que en producción aplica el store (unicidad de stock_number y vin,
//! orden por created_at).

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{InventoryRepository, LeadRepository};
use crate::models::{Inquiry, NewVehicle, ValuationRequest, Vehicle};
use crate::utils::errors::{conflict_message, AppError};

#[derive(Default)]
struct InventoryTable {
    vehicles: Vec<Vehicle>,
    next_id: i64,
    last_created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Default)]
pub struct InMemoryInventoryRepository {
    table: Arc<RwLock<InventoryTable>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repositorio precargado con vehículos ya persistidos
    pub fn with_vehicles(vehicles: Vec<Vehicle>) -> Self {
        let next_id = vehicles.iter().map(|v| v.id).max().unwrap_or(0);
        let last_created_at = vehicles.iter().map(|v| v.created_at).max();
        Self {
            table: Arc::new(RwLock::new(InventoryTable {
                vehicles,
                next_id,
                last_created_at,
            })),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Simula una caída del store: todas las operaciones fallan
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::ExternalApi("inventory store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl InventoryRepository for InMemoryInventoryRepository {
    async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        self.check_available()?;
        let table = self.table.read().await;
        let mut vehicles = table.vehicles.clone();
        vehicles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(vehicles)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        self.check_available()?;
        let table = self.table.read().await;
        Ok(table.vehicles.iter().find(|v| v.id == id).cloned())
    }

    async fn create(&self, vehicle: NewVehicle) -> Result<Vehicle, AppError> {
        self.check_available()?;
        let mut table = self.table.write().await;

        if table.vehicles.iter().any(|v| v.stock_number == vehicle.stock_number) {
            return Err(AppError::Conflict(
                conflict_message(Some("cars_stock_number_key")).to_string(),
            ));
        }
        if table.vehicles.iter().any(|v| v.vin == vehicle.vin) {
            return Err(AppError::Conflict(conflict_message(Some("cars_vin_key")).to_string()));
        }

        // created_at estrictamente creciente para que "newest" sea determinista
        let now = Utc::now();
        let created_at = match table.last_created_at {
            Some(last) if last >= now => last + Duration::microseconds(1),
            _ => now,
        };

        table.next_id += 1;
        let vehicle = vehicle.into_vehicle(table.next_id, created_at);
        table.last_created_at = Some(created_at);
        table.vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.check_available()?;
        let mut table = self.table.write().await;
        let before = table.vehicles.len();
        table.vehicles.retain(|v| v.id != id);
        Ok(table.vehicles.len() < before)
    }

    async fn append_images(&self, id: i64, urls: &[String]) -> Result<Option<Vec<String>>, AppError> {
        self.check_available()?;
        let mut table = self.table.write().await;
        Ok(table.vehicles.iter_mut().find(|v| v.id == id).map(|vehicle| {
            vehicle.images.extend(urls.iter().cloned());
            vehicle.images.clone()
        }))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryLeadRepository {
    inquiries: Arc<RwLock<Vec<Inquiry>>>,
    valuations: Arc<RwLock<Vec<ValuationRequest>>>,
}

impl InMemoryLeadRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn inquiries(&self) -> Vec<Inquiry> {
        self.inquiries.read().await.clone()
    }

    pub async fn valuation_requests(&self) -> Vec<ValuationRequest> {
        self.valuations.read().await.clone()
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn save_inquiry(&self, inquiry: &Inquiry) -> Result<(), AppError> {
        self.inquiries.write().await.push(inquiry.clone());
        Ok(())
    }

    async fn save_valuation_request(&self, request: &ValuationRequest) -> Result<(), AppError> {
        self.valuations.write().await.push(request.clone());
        Ok(())
    }
}
