use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{FilterCriteria, Vehicle};
use crate::utils::validation::validate_vehicle_condition;

// Query string del listado; todo llega como texto desde los controles
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub search: Option<String>,
    pub make: Option<String>,
    pub condition: Option<String>,
    #[serde(alias = "minPrice")]
    pub min_price: Option<String>,
    #[serde(alias = "maxPrice")]
    pub max_price: Option<String>,
    pub sort: Option<String>,
}

impl From<&ListingQuery> for FilterCriteria {
    fn from(query: &ListingQuery) -> Self {
        let mut criteria = FilterCriteria::new();
        if let Some(search) = &query.search {
            criteria.set_search(search);
        }
        if let Some(make) = &query.make {
            criteria.set_make(make);
        }
        if let Some(condition) = &query.condition {
            criteria.set_condition(condition);
        }
        if let Some(min) = &query.min_price {
            criteria.set_min_price_text(min);
        }
        if let Some(max) = &query.max_price {
            criteria.set_max_price_text(max);
        }
        if let Some(sort) = &query.sort {
            criteria.set_sort(sort);
        }
        criteria
    }
}

// Response del listado. `inventory_total` permite distinguir "sin
// inventario" de "sin coincidencias".
#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub vehicles: Vec<Vehicle>,
    pub total: usize,
    pub inventory_total: usize,
    pub makes: Vec<String>,
    pub criteria: FilterCriteria,
}

// Request para dar de alta un vehículo desde el panel de administración
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, message = "Make is required"))]
    pub make: String,

    #[validate(length(min = 1, message = "Model is required"))]
    pub model: String,

    pub year: i32,

    pub price: i64,

    pub mileage: i64,

    #[validate(length(min = 1, message = "Fuel type is required"))]
    pub fuel_type: String,

    #[validate(length(min = 1, message = "Transmission is required"))]
    pub transmission: String,

    #[validate(length(min = 1, message = "Color is required"))]
    pub color: String,

    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,

    #[validate(length(min = 1, message = "VIN is required"))]
    pub vin: String,

    #[validate(length(min = 1, message = "Stock number is required"))]
    pub stock_number: String,

    #[validate(custom = "validate_vehicle_condition")]
    pub condition: String,

    // Listas separadas por comas, como en el formulario
    pub features: Option<String>,
    pub images: Option<String>,
}
