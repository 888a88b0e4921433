//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno: servidor, CORS,
//! rate limiting de formularios y object storage.

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub log_level: String,
    pub cors_origins: Vec<String>,
    pub rate_limit_requests: u32,
    pub rate_limit_window: u64,
    // Object storage (Supabase Storage)
    pub storage_url: String,
    pub storage_service_key: String,
    pub storage_bucket: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            log_level: "info".to_string(),
            cors_origins: Vec::new(),
            rate_limit_requests: 10,
            rate_limit_window: 60,
            storage_url: "http://localhost:54321".to_string(),
            storage_service_key: String::new(),
            storage_bucket: "vehicle-images".to_string(),
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración del entorno. Las variables opcionales caen en
    /// los valores por defecto; SUPABASE_URL, SUPABASE_SERVICE_KEY y
    /// CORS_ORIGINS son obligatorias fuera de desarrollo.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);
        let is_development = environment == "development";

        let storage_url = match env::var("SUPABASE_URL") {
            Ok(url) => url,
            Err(_) if is_development => defaults.storage_url,
            Err(_) => anyhow::bail!("SUPABASE_URL must be set"),
        };
        let storage_service_key = match env::var("SUPABASE_SERVICE_KEY") {
            Ok(key) => key,
            Err(_) if is_development => defaults.storage_service_key,
            Err(_) => anyhow::bail!("SUPABASE_SERVICE_KEY must be set"),
        };

        Ok(Self {
            environment,
            port: parse_var("PORT", defaults.port)?,
            host: env::var("HOST").unwrap_or(defaults.host),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            cors_origins: resolve_cors_origins(env::var("CORS_ORIGINS").ok().as_deref(), is_development)?,
            rate_limit_requests: parse_var("RATE_LIMIT_REQUESTS", defaults.rate_limit_requests)?,
            rate_limit_window: parse_var("RATE_LIMIT_WINDOW", defaults.rate_limit_window)?,
            storage_url: storage_url.trim_end_matches('/').to_string(),
            storage_service_key,
            storage_bucket: env::var("STORAGE_BUCKET").unwrap_or(defaults.storage_bucket),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number", name)),
        Err(_) => Ok(default),
    }
}

/// Fuera de desarrollo hace falta al menos un origen explícito
fn resolve_cors_origins(raw: Option<&str>, is_development: bool) -> Result<Vec<String>> {
    let origins = raw.map(parse_origins).unwrap_or_default();
    if origins.is_empty() && !is_development {
        anyhow::bail!("CORS_ORIGINS must be set");
    }
    Ok(origins)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
