//! Services module
//!
//! Este módulo contiene la lógica de negocio: el motor de filtrado del
//! listado y el object storage de imágenes.

pub mod image_storage;
pub mod listing_engine;

pub use image_storage::{ImageStorage, InMemoryImageStorage, SupabaseImageStorage};
pub use listing_engine::{derive_listing, distinct_sorted_makes, InventoryListing};
