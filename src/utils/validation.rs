//! Utilidades de validación
//!
//! Validadores custom para los formularios (alta de vehículos, contacto,
//! tasación) y helpers de normalización de texto.

use chrono::{Datelike, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

use crate::models::VehicleCondition;

lazy_static! {
    static ref UNSAFE_OBJECT_CHARS: Regex = Regex::new(r"[^A-Za-z0-9._-]+").unwrap();
}

/// Estados aceptados por el formulario de tasación (incluye "poor")
pub const VALUATION_CONDITIONS: [&str; 4] = ["excellent", "good", "fair", "poor"];

/// Tipos de consulta del formulario de contacto
pub const ENQUIRY_TYPES: [&str; 5] = ["general", "sell", "financing", "warranty", "transport"];

pub const MIN_VEHICLE_YEAR: i32 = 1900;

/// Validar que el estado sea uno de excellent | good | fair
pub fn validate_vehicle_condition(value: &str) -> Result<(), ValidationError> {
    if value.parse::<VehicleCondition>().is_err() {
        let mut error = ValidationError::new("condition");
        error.add_param("value".into(), &value.to_string());
        error.message = Some("Condition must be excellent, good or fair".into());
        return Err(error);
    }
    Ok(())
}

pub fn validate_valuation_condition(value: &str) -> Result<(), ValidationError> {
    validate_one_of(value, &VALUATION_CONDITIONS, "condition")
}

/// Vacío se acepta: el formulario lo trata como consulta general
pub fn validate_enquiry_type(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    validate_one_of(value, &ENQUIRY_TYPES, "enquiry_type")
}

fn validate_one_of(value: &str, allowed: &[&str], code: &'static str) -> Result<(), ValidationError> {
    if !allowed.contains(&value) {
        let mut error = ValidationError::new(code);
        error.add_param("value".into(), &value.to_string());
        error.add_param("allowed_values".into(), &allowed.join(", "));
        return Err(error);
    }
    Ok(())
}

/// Año entre 1900 y el año próximo
pub fn validate_vehicle_year(year: i32) -> Result<(), ValidationError> {
    let max = Utc::now().year() + 1;
    if year < MIN_VEHICLE_YEAR || year > max {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &MIN_VEHICLE_YEAR);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &year);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// "a, b ,c" -> ["a", "b", "c"]; los elementos vacíos se descartan
pub fn split_comma_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|text| {
            text.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Nombre de archivo apto para clave de objeto en storage
pub fn sanitize_object_name(file_name: &str) -> String {
    let cleaned = UNSAFE_OBJECT_CHARS.replace_all(file_name.trim(), "_");
    let cleaned = cleaned.trim_matches('_');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}
