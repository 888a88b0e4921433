//! Modelos del sistema
//!
//! Este módulo contiene los modelos de dominio: inventario, criterios
//! de filtrado del listado y leads.

pub mod filter_criteria;
pub mod lead;
pub mod vehicle;

pub use filter_criteria::{FilterCriteria, SortKey};
pub use lead::{EnquiryType, Inquiry, ValuationRequest};
pub use vehicle::{NewVehicle, Vehicle, VehicleCondition};
