use std::sync::Arc;

use tracing::{error, info};
use validator::{Validate, ValidationErrors};

use crate::dto::api_response::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, ListingQuery, ListingResponse};
use crate::models::{FilterCriteria, NewVehicle, Vehicle, VehicleCondition};
use crate::repositories::InventoryRepository;
use crate::services::listing_engine::InventoryListing;
use crate::utils::errors::{not_found_error, validation_error, AppError, AppResult};
use crate::utils::validation::{split_comma_list, validate_non_negative, validate_vehicle_year};

pub struct VehicleController {
    repository: Arc<dyn InventoryRepository>,
}

impl VehicleController {
    pub fn new(repository: Arc<dyn InventoryRepository>) -> Self {
        Self { repository }
    }

    /// Lote completo del inventario. Un fallo del store se registra y se
    /// trata como inventario vacío.
    pub async fn fetch_batch(&self) -> Vec<Vehicle> {
        match self.repository.list_all().await {
            Ok(vehicles) => vehicles,
            Err(e) => {
                error!("❌ Error obteniendo el inventario: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn list(&self, query: &ListingQuery) -> ListingResponse {
        let batch = self.fetch_batch().await;
        let listing = InventoryListing::with_criteria(batch, FilterCriteria::from(query));

        let vehicles: Vec<Vehicle> = listing.results().into_iter().cloned().collect();
        ListingResponse {
            total: vehicles.len(),
            inventory_total: listing.batch().len(),
            makes: listing.makes().to_vec(),
            criteria: listing.criteria().clone(),
            vehicles,
        }
    }

    pub async fn makes(&self) -> Vec<String> {
        let batch = self.fetch_batch().await;
        InventoryListing::new(batch).makes().to_vec()
    }

    /// Detalle de un vehículo. Un id no numérico o un fallo del store se
    /// tratan igual que un vehículo inexistente.
    pub async fn get_by_id(&self, raw_id: &str) -> AppResult<Vehicle> {
        let not_found = || not_found_error("Vehicle", raw_id);
        let id: i64 = raw_id.trim().parse().map_err(|_| not_found())?;

        match self.repository.find_by_id(id).await {
            Ok(vehicle) => vehicle.ok_or_else(not_found),
            Err(e) => {
                error!("❌ Error obteniendo el vehículo {}: {}", id, e);
                Err(not_found())
            }
        }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> AppResult<ApiResponse<Vehicle>> {
        let new_vehicle = Self::validate_new_vehicle(request)?;
        let vehicle = self.repository.create(new_vehicle).await?;

        info!("🚗 Vehículo añadido: {} ({})", vehicle.title(), vehicle.stock_number);
        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehicle added successfully!".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Vehicle", &id.to_string()));
        }
        info!("🗑️ Vehículo eliminado: {}", id);
        Ok(())
    }

    fn validate_new_vehicle(request: CreateVehicleRequest) -> Result<NewVehicle, AppError> {
        let mut errors = match request.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if let Err(e) = validate_vehicle_year(request.year) {
            errors.add("year", e);
        }
        if let Err(e) = validate_non_negative(request.price) {
            errors.add("price", e);
        }
        if let Err(e) = validate_non_negative(request.mileage) {
            errors.add("mileage", e);
        }

        if !errors.errors().is_empty() {
            return Err(AppError::Validation(errors));
        }

        let condition: VehicleCondition = request
            .condition
            .parse()
            .map_err(|_| validation_error("condition", "Condition must be excellent, good or fair"))?;

        Ok(NewVehicle {
            features: split_comma_list(request.features.as_deref()),
            images: split_comma_list(request.images.as_deref()),
            stock_number: request.stock_number,
            vin: request.vin,
            make: request.make,
            model: request.model,
            year: request.year,
            condition,
            fuel_type: request.fuel_type,
            transmission: request.transmission,
            color: request.color,
            price: request.price,
            mileage: request.mileage,
            description: request.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryInventoryRepository;
    use crate::seed::seed_inventory;

    fn camry_request() -> CreateVehicleRequest {
        CreateVehicleRequest {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2021,
            price: 24990,
            mileage: 18000,
            fuel_type: "Hybrid".to_string(),
            transmission: "Automatic".to_string(),
            color: "Grey".to_string(),
            description: "One owner hybrid hatch with full dealer history.".to_string(),
            vin: "JTDKB3FU703123456".to_string(),
            stock_number: "AM006".to_string(),
            condition: "excellent".to_string(),
            features: Some("Apple CarPlay, Lane Assist".to_string()),
            images: None,
        }
    }

    #[tokio::test]
    async fn test_failed_fetch_degrades_to_empty_listing() {
        let repo = InMemoryInventoryRepository::with_vehicles(seed_inventory());
        repo.set_unavailable(true);
        let controller = VehicleController::new(Arc::new(repo));

        let response = controller.list(&ListingQuery::default()).await;
        assert!(response.vehicles.is_empty());
        assert_eq!(response.inventory_total, 0);
        assert!(response.makes.is_empty());
    }

    #[tokio::test]
    async fn test_list_applies_query_criteria() {
        let controller = VehicleController::new(Arc::new(InMemoryInventoryRepository::with_vehicles(
            seed_inventory(),
        )));
        let query = ListingQuery {
            condition: Some("excellent".to_string()),
            max_price: Some("24000".to_string()),
            sort: Some("price-high".to_string()),
            ..ListingQuery::default()
        };

        let response = controller.list(&query).await;
        let models: Vec<&str> = response.vehicles.iter().map(|v| v.model.as_str()).collect();
        assert_eq!(models, vec!["Camry", "i30"]);
        assert_eq!(response.total, 2);
        assert_eq!(response.inventory_total, 5);
        assert_eq!(response.makes, vec!["Ford", "Honda", "Hyundai", "Mazda", "Toyota"]);
    }

    #[tokio::test]
    async fn test_create_parses_comma_lists() {
        let controller = VehicleController::new(Arc::new(InMemoryInventoryRepository::new()));
        let response = controller.create(camry_request()).await.unwrap();
        let vehicle = response.data.unwrap();
        assert_eq!(vehicle.features, vec!["Apple CarPlay", "Lane Assist"]);
        assert!(vehicle.images.is_empty());
        assert_eq!(vehicle.condition, VehicleCondition::Excellent);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_fields() {
        let controller = VehicleController::new(Arc::new(InMemoryInventoryRepository::new()));
        let request = CreateVehicleRequest {
            year: 1850,
            price: -1,
            description: "short".to_string(),
            condition: "poor".to_string(),
            ..camry_request()
        };

        match controller.create(request).await {
            Err(AppError::Validation(errors)) => {
                let fields = errors.errors();
                for field in ["year", "price", "description", "condition"] {
                    assert!(fields.contains_key(field), "missing error for {}", field);
                }
                assert!(!fields.contains_key("mileage"));
            }
            other => panic!("expected validation error, got {:?}", other.map(|r| r.success)),
        }
    }

    #[tokio::test]
    async fn test_detail_degrades_to_not_found() {
        let repo = InMemoryInventoryRepository::with_vehicles(seed_inventory());
        let controller = VehicleController::new(Arc::new(repo.clone()));

        assert_eq!(controller.get_by_id("2").await.unwrap().model, "CX-5");
        assert!(matches!(controller.get_by_id("abc").await, Err(AppError::NotFound(_))));
        assert!(matches!(controller.get_by_id("99").await, Err(AppError::NotFound(_))));

        repo.set_unavailable(true);
        assert!(matches!(controller.get_by_id("2").await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_unknown_vehicle_is_not_found() {
        let controller = VehicleController::new(Arc::new(InMemoryInventoryRepository::new()));
        assert!(matches!(controller.delete(42).await, Err(AppError::NotFound(_))));
    }
}
