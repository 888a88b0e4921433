//! Repositorios
//!
//! Acceso al backend hospedado: inventario (tabla cars) y leads.
//! Cada repositorio tiene implementación Postgres y en memoria.

pub mod in_memory;
pub mod lead_repository;
pub mod vehicle_repository;

pub use in_memory::{InMemoryInventoryRepository, InMemoryLeadRepository};
pub use lead_repository::{LeadRepository, PgLeadRepository};
pub use vehicle_repository::{InventoryRepository, PgInventoryRepository};
