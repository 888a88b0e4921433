//! Controllers
//!
//! Operaciones de la aplicación sobre los repositorios: listado y alta
//! de vehículos, subida de imágenes y leads.

pub mod lead_controller;
pub mod upload_controller;
pub mod vehicle_controller;

pub use lead_controller::LeadController;
pub use upload_controller::UploadController;
pub use vehicle_controller::VehicleController;
