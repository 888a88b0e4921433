//! Middleware de Rate Limiting
//!
//! Limita los envíos de formularios públicos (consultas y tasaciones)
//! por cliente dentro de una ventana fija.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::warn;

use crate::config::EnvironmentConfig;
use crate::utils::errors::AppError;

/// Contador de requests de un cliente en la ventana actual
#[derive(Debug, Clone)]
struct RateLimitInfo {
    requests: u32,
    window_start: Instant,
}

#[derive(Clone)]
pub struct RateLimitState {
    requests: Arc<RwLock<HashMap<String, RateLimitInfo>>>,
    max_requests: u32,
    window_duration: Duration,
}

impl RateLimitState {
    pub fn new(max_requests: u32, window_duration: Duration) -> Self {
        Self {
            requests: Arc::new(RwLock::new(HashMap::new())),
            max_requests,
            window_duration,
        }
    }

    pub fn from_config(config: &EnvironmentConfig) -> Self {
        Self::new(
            config.rate_limit_requests,
            Duration::from_secs(config.rate_limit_window),
        )
    }

    /// Registra un request del cliente. Falla si ya agotó su cupo en la
    /// ventana actual.
    pub async fn check_rate_limit(&self, client: &str) -> Result<(), AppError> {
        let mut requests = self.requests.write().await;
        let now = Instant::now();

        // Limpiar entradas expiradas
        requests.retain(|_, info| now.duration_since(info.window_start) < self.window_duration);

        let info = requests.entry(client.to_string()).or_insert(RateLimitInfo {
            requests: 0,
            window_start: now,
        });

        if info.requests >= self.max_requests {
            return Err(AppError::RateLimitExceeded);
        }

        info.requests += 1;
        Ok(())
    }
}

/// Identificador del cliente: primera IP de x-forwarded-for
pub fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .unwrap_or("unknown")
        .to_string()
}

pub async fn rate_limit_middleware(
    State(rate_limit_state): State<RateLimitState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let client = client_key(request.headers());

    if let Err(e) = rate_limit_state.check_rate_limit(&client).await {
        warn!("🚫 Rate limit excedido para {} en {}", client, request.uri().path());
        return Err(e);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[tokio::test]
    async fn test_limit_per_client() {
        let state = RateLimitState::new(2, Duration::from_secs(60));

        assert!(state.check_rate_limit("1.1.1.1").await.is_ok());
        assert!(state.check_rate_limit("1.1.1.1").await.is_ok());
        assert!(matches!(
            state.check_rate_limit("1.1.1.1").await,
            Err(AppError::RateLimitExceeded)
        ));
        assert!(state.check_rate_limit("2.2.2.2").await.is_ok());
    }

    #[tokio::test]
    async fn test_window_resets() {
        let state = RateLimitState::new(1, Duration::from_millis(30));
        assert!(state.check_rate_limit("1.1.1.1").await.is_ok());
        assert!(state.check_rate_limit("1.1.1.1").await.is_err());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(state.check_rate_limit("1.1.1.1").await.is_ok());
    }

    #[test]
    fn test_client_key() {
        let mut headers = HeaderMap::new();
        assert_eq!(client_key(&headers), "unknown");

        headers.insert("x-forwarded-for", HeaderValue::from_static("10.0.0.1, 172.16.0.1"));
        assert_eq!(client_key(&headers), "10.0.0.1");
    }
}
