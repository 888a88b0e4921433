//! Criterios de filtrado del listado
//!
//! Estado efímero de una vista del inventario: búsqueda, marca, estado,
//! rango de precio y clave de orden. Nunca se persiste.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::vehicle::VehicleCondition;

/// Clave de orden del listado. Los identificadores viajan tal cual en
/// los `<select>` del front y en la query string.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "price-low")]
    PriceLow,
    #[serde(rename = "price-high")]
    PriceHigh,
    #[serde(rename = "year-new")]
    YearNew,
    #[serde(rename = "year-old")]
    YearOld,
    #[serde(rename = "mileage-low")]
    MileageLow,
    #[serde(rename = "mileage-high")]
    MileageHigh,
}

impl SortKey {
    pub const ALL: [SortKey; 7] = [
        SortKey::Newest,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::YearNew,
        SortKey::YearOld,
        SortKey::MileageLow,
        SortKey::MileageHigh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::YearNew => "year-new",
            SortKey::YearOld => "year-old",
            SortKey::MileageLow => "mileage-low",
            SortKey::MileageHigh => "mileage-high",
        }
    }

    /// Identificador desconocido o vacío => `newest`
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| format!("unknown sort key '{}'", value))
    }
}

/// Criterios del usuario para la vista actual
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub make: Option<String>,
    pub condition: Option<VehicleCondition>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub sort: SortKey,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    /// Marca vacía => todas las marcas
    pub fn set_make(&mut self, make: &str) {
        self.make = if make.is_empty() { None } else { Some(make.to_string()) };
    }

    /// Estado vacío o desconocido => todos los estados
    pub fn set_condition(&mut self, condition: &str) {
        self.condition = condition.parse().ok();
    }

    pub fn set_min_price_text(&mut self, text: &str) {
        self.min_price = parse_price_bound(text);
    }

    pub fn set_max_price_text(&mut self, text: &str) {
        self.max_price = parse_price_bound(text);
    }

    pub fn set_sort(&mut self, sort: &str) {
        self.sort = SortKey::parse_or_default(sort);
    }

    /// Restablece todos los criterios a la vez
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Texto de precio a cota opcional. Lo que no parsea como entero queda
/// "sin cota", nunca cero. El parseo es estricto: "20000abc" no se lee
/// como 20000 sino como "sin cota".
pub fn parse_price_bound(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}
