//! Modelos de leads
//!
//! Consultas del formulario de contacto y solicitudes de tasación
//! tal como se guardan en el store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Tipo de consulta del formulario de contacto
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnquiryType {
    #[default]
    General,
    Sell,
    Financing,
    Warranty,
    Transport,
}

impl EnquiryType {
    pub const ALL: [EnquiryType; 5] = [
        EnquiryType::General,
        EnquiryType::Sell,
        EnquiryType::Financing,
        EnquiryType::Warranty,
        EnquiryType::Transport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnquiryType::General => "general",
            EnquiryType::Sell => "sell",
            EnquiryType::Financing => "financing",
            EnquiryType::Warranty => "warranty",
            EnquiryType::Transport => "transport",
        }
    }

    /// Título que muestra el formulario para cada tipo
    pub fn title(&self) -> &'static str {
        match self {
            EnquiryType::General => "Send us a message",
            EnquiryType::Sell => "Sell Your Car",
            EnquiryType::Financing => "Financing Enquiry",
            EnquiryType::Warranty => "Warranty Information",
            EnquiryType::Transport => "Interstate Transport",
        }
    }
}

impl FromStr for EnquiryType {
    type Err = String;

    /// Texto vacío => consulta general
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Ok(EnquiryType::General);
        }
        EnquiryType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| format!("unknown enquiry type '{}'", value))
    }
}

/// Consulta recibida
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inquiry {
    pub id: Uuid,
    pub enquiry_type: EnquiryType,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub vehicle_id: Option<i64>,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_year: Option<String>,
    pub vehicle_condition: Option<String>,
    pub budget: Option<String>,
    pub preferred_location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Solicitud de tasación. `request_id` (VAL-<millis>) es solo la
/// referencia que ve el cliente; puede repetirse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValuationRequest {
    pub id: Uuid,
    pub request_id: String,
    pub make: String,
    pub model: String,
    pub year: String,
    pub variant: Option<String>,
    pub odometer: String,
    pub condition: String,
    pub location: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enquiry_type_from_str() {
        for kind in EnquiryType::ALL {
            assert_eq!(kind.as_str().parse::<EnquiryType>(), Ok(kind));
        }
        assert_eq!("".parse::<EnquiryType>(), Ok(EnquiryType::General));
        assert!("complaint".parse::<EnquiryType>().is_err());
        assert!("Sell".parse::<EnquiryType>().is_err());
    }
}
