//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle del inventario y su variante
//! para altas desde el panel de administración.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Estado del vehículo en venta
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCondition {
    Excellent,
    Good,
    Fair,
}

impl VehicleCondition {
    pub const ALL: [VehicleCondition; 3] = [
        VehicleCondition::Excellent,
        VehicleCondition::Good,
        VehicleCondition::Fair,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCondition::Excellent => "excellent",
            VehicleCondition::Good => "good",
            VehicleCondition::Fair => "fair",
        }
    }
}

impl fmt::Display for VehicleCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCondition {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "excellent" => Ok(VehicleCondition::Excellent),
            "good" => Ok(VehicleCondition::Good),
            "fair" => Ok(VehicleCondition::Fair),
            other => Err(format!("unknown vehicle condition '{}'", other)),
        }
    }
}

/// Vehicle principal - mapea a la tabla cars
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: i64,
    pub stock_number: String,
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub condition: VehicleCondition,
    pub fuel_type: String,
    pub transmission: String,
    pub color: String,
    pub price: i64,
    pub mileage: i64,
    pub description: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    /// Título corto para logs y listados: "2019 Toyota Camry"
    pub fn title(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

/// Vehículo aún no persistido; el store asigna id y created_at
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewVehicle {
    pub stock_number: String,
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub condition: VehicleCondition,
    pub fuel_type: String,
    pub transmission: String,
    pub color: String,
    pub price: i64,
    pub mileage: i64,
    pub description: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
}

impl NewVehicle {
    pub fn into_vehicle(self, id: i64, created_at: DateTime<Utc>) -> Vehicle {
        Vehicle {
            id,
            stock_number: self.stock_number,
            vin: self.vin,
            make: self.make,
            model: self.model,
            year: self.year,
            condition: self.condition,
            fuel_type: self.fuel_type,
            transmission: self.transmission,
            color: self.color,
            price: self.price,
            mileage: self.mileage,
            description: self.description,
            features: self.features,
            images: self.images,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_round_trips_through_text() {
        for condition in VehicleCondition::ALL {
            assert_eq!(condition.as_str().parse::<VehicleCondition>(), Ok(condition));
        }
        assert!("Excellent".parse::<VehicleCondition>().is_err());
        assert!("poor".parse::<VehicleCondition>().is_err());
    }

    #[test]
    fn test_condition_serializes_lowercase() {
        let json = serde_json::to_string(&VehicleCondition::Good).unwrap();
        assert_eq!(json, "\"good\"");
    }
}
