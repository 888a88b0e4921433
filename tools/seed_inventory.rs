//! Carga el inventario inicial en la tabla cars.
//!
//! Los vehículos que ya existen (mismo stock number o VIN) se saltan.

use anyhow::Result;
use dotenvy::dotenv;
use tracing::{error, info, warn};

use dealership_site::config::DatabaseConfig;
use dealership_site::database::DatabaseConnection;
use dealership_site::repositories::{InventoryRepository, PgInventoryRepository};
use dealership_site::seed::seed_vehicles;
use dealership_site::utils::errors::AppError;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    let db_connection = DatabaseConnection::new(&DatabaseConfig::from_env()?).await?;
    db_connection.run_migrations().await?;
    let repository = PgInventoryRepository::new(db_connection.pool().clone());

    let mut inserted = 0;
    for vehicle in seed_vehicles() {
        let label = format!("{} {} {}", vehicle.year, vehicle.make, vehicle.model);
        match repository.create(vehicle).await {
            Ok(car) => {
                inserted += 1;
                info!("✓ Inserted car: {} ({})", label, car.stock_number);
            }
            Err(AppError::Conflict(_)) => warn!("⏭️ Ya existe: {}", label),
            Err(e) => {
                error!("❌ Error insertando {}: {}", label, e);
                return Err(e.into());
            }
        }
    }

    info!("🚗 Seed completado: {} vehículo(s) insertado(s)", inserted);
    Ok(())
}
