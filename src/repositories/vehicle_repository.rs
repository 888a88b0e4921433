use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::{NewVehicle, Vehicle};
use crate::utils::errors::AppError;

/// Acceso a la tabla de inventario del store hospedado
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Todo el inventario, más nuevo primero. Sin paginación.
    async fn list_all(&self) -> Result<Vec<Vehicle>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError>;

    async fn create(&self, vehicle: NewVehicle) -> Result<Vehicle, AppError>;

    /// Devuelve false si el vehículo no existía
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Añade URLs al final de `images`. `None` si el vehículo no existe.
    async fn append_images(&self, id: i64, urls: &[String]) -> Result<Option<Vec<String>>, AppError>;
}

// Fila tal cual sale de Postgres; condition viaja como TEXT
#[derive(Debug, sqlx::FromRow)]
struct VehicleRow {
    id: i64,
    stock_number: String,
    vin: String,
    make: String,
    model: String,
    year: i32,
    condition: String,
    fuel_type: String,
    transmission: String,
    color: String,
    price: i64,
    mileage: i64,
    description: String,
    features: Vec<String>,
    images: Vec<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<VehicleRow> for Vehicle {
    type Error = AppError;

    fn try_from(row: VehicleRow) -> Result<Self, Self::Error> {
        let condition = row
            .condition
            .parse()
            .map_err(|e| AppError::Internal(format!("Vehicle {}: {}", row.id, e)))?;

        Ok(Vehicle {
            id: row.id,
            stock_number: row.stock_number,
            vin: row.vin,
            make: row.make,
            model: row.model,
            year: row.year,
            condition,
            fuel_type: row.fuel_type,
            transmission: row.transmission,
            color: row.color,
            price: row.price,
            mileage: row.mileage,
            description: row.description,
            features: row.features,
            images: row.images,
            created_at: row.created_at,
        })
    }
}

const VEHICLE_COLUMNS: &str = "id, stock_number, vin, make, model, year, condition, fuel_type, \
     transmission, color, price, mileage, description, features, images, created_at";

pub struct PgInventoryRepository {
    pool: PgPool,
}

impl PgInventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryRepository for PgInventoryRepository {
    async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let rows = sqlx::query_as::<_, VehicleRow>(&format!(
            "SELECT {} FROM cars ORDER BY created_at DESC",
            VEHICLE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Vehicle::try_from).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>(&format!(
            "SELECT {} FROM cars WHERE id = $1",
            VEHICLE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Vehicle::try_from).transpose()
    }

    async fn create(&self, vehicle: NewVehicle) -> Result<Vehicle, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>(&format!(
            r#"
            INSERT INTO cars (stock_number, vin, make, model, year, condition, fuel_type,
                              transmission, color, price, mileage, description, features, images, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING {}
            "#,
            VEHICLE_COLUMNS
        ))
        .bind(vehicle.stock_number)
        .bind(vehicle.vin)
        .bind(vehicle.make)
        .bind(vehicle.model)
        .bind(vehicle.year)
        .bind(vehicle.condition.as_str())
        .bind(vehicle.fuel_type)
        .bind(vehicle.transmission)
        .bind(vehicle.color)
        .bind(vehicle.price)
        .bind(vehicle.mileage)
        .bind(vehicle.description)
        .bind(vehicle.features)
        .bind(vehicle.images)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Vehicle::try_from(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn append_images(&self, id: i64, urls: &[String]) -> Result<Option<Vec<String>>, AppError> {
        let images: Option<(Vec<String>,)> = sqlx::query_as(
            "UPDATE cars SET images = images || $2 WHERE id = $1 RETURNING images",
        )
        .bind(id)
        .bind(urls)
        .fetch_optional(&self.pool)
        .await?;

        Ok(images.map(|(images,)| images))
    }
}
