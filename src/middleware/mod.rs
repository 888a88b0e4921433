//! Middleware del sistema
//!
//! CORS y rate limiting de los formularios públicos.

pub mod cors;
pub mod rate_limit;

pub use cors::cors_layer;
pub use rate_limit::{rate_limit_middleware, RateLimitState};
