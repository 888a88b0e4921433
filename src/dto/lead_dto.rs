use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{validate_enquiry_type, validate_valuation_condition};

// Request del formulario de contacto / consulta sobre un vehículo
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRequest {
    #[validate(custom = "validate_enquiry_type")]
    pub enquiry_type: Option<String>,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,

    pub vehicle_id: Option<i64>,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_year: Option<String>,
    pub vehicle_condition: Option<String>,
    pub budget: Option<String>,
    pub preferred_location: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryResponse {
    pub success: bool,
    pub message: String,
    pub inquiry_id: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactInfo {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,

    #[validate(length(min = 10, message = "Please enter a valid phone number"))]
    pub phone: String,
}

// Request del formulario de tasación
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRequestDto {
    #[validate(length(min = 1, message = "Please select a make"))]
    pub make: String,

    #[validate(length(min = 1, message = "Please select a model"))]
    pub model: String,

    #[validate(length(min = 4, message = "Please select a year"))]
    pub year: String,

    pub variant: Option<String>,

    #[validate(length(min = 1, message = "Please enter odometer reading"))]
    pub odometer: String,

    #[validate(custom = "validate_valuation_condition")]
    pub condition: String,

    #[validate(length(min = 1, message = "Please select your location"))]
    pub location: String,

    #[validate]
    pub contact_info: ContactInfo,

    pub source: Option<String>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResponse {
    pub success: bool,
    pub message: String,
    pub request_id: String,
    pub estimated_completion: String,
}
