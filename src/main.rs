use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn, Level};

use dealership_site::config::{DatabaseConfig, EnvironmentConfig};
use dealership_site::database::DatabaseConnection;
use dealership_site::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    let level = config.log_level.parse::<Level>().unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚗 Dealership Site - Inventario y leads");
    info!("=======================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new(&DatabaseConfig::from_env()?).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    db_connection.run_migrations().await?;

    if config.storage_service_key.is_empty() {
        warn!("⚠️ SUPABASE_SERVICE_KEY vacía: las subidas de imágenes fallarán");
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::connected(db_connection.pool().clone(), config);
    let app = create_router(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("   GET    /api/vehicles - Listado filtrable");
    info!("   GET    /api/vehicles/makes - Marcas del inventario");
    info!("   GET    /api/vehicles/:id - Detalle de vehículo");
    info!("   POST   /api/admin/vehicles - Alta de vehículo");
    info!("   DELETE /api/admin/vehicles/:id - Baja de vehículo");
    info!("   POST   /api/upload - Subir imágenes");
    info!("   PUT    /api/upload - Añadir imágenes a un vehículo");
    info!("   POST   /api/inquiries - Formulario de contacto");
    info!("   POST   /api/valuation - Solicitud de tasación");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
