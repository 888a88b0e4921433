//! Configuración de conexión a PostgreSQL
//!
//! Este módulo maneja la conexión al Postgres del backend hospedado
//! (tablas cars, inquiries y valuation_requests).

use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Conexión a la base de datos
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Crear el pool y verificar la conexión
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        info!("🔗 Conectando a la base de datos: {}", mask_database_url(&config.url));
        let pool = config.create_pool().await?;
        sqlx::query("SELECT 1").execute(&pool).await?;
        info!("✅ Base de datos conectada");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Ejecutar migraciones de la base de datos
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        info!("📦 Ejecutando migraciones...");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("✅ Migraciones aplicadas");
        Ok(())
    }
}

/// Función helper para enmascarar la URL de la base de datos en logs
fn mask_database_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at_pos)) if at_pos > scheme_end => {
            format!("{}***:***@{}", &url[..scheme_end + 3], &url[at_pos + 1..])
        }
        _ => url.to_string(),
    }
}
