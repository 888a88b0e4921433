//! DTOs de la API
//!
//! Requests y responses tal como viajan en JSON.

pub mod api_response;
pub mod lead_dto;
pub mod upload_dto;
pub mod vehicle_dto;
