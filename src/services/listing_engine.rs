//! Motor de filtrado y orden del listado
//!
//! Deriva la lista a mostrar a partir del lote completo del inventario y
//! de los criterios actuales. Es una función pura: mismo lote y mismos
//! criterios => misma salida. No muta ningún vehículo.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::models::{FilterCriteria, SortKey, Vehicle};

/// Filtra y ordena el lote. Predicados combinados con AND; el orden es
/// estable, así que los empates conservan el orden de entrada.
pub fn derive_listing<'a>(batch: &'a [Vehicle], criteria: &FilterCriteria) -> Vec<&'a Vehicle> {
    let search = criteria.search.to_lowercase();

    let mut listing: Vec<&Vehicle> = batch
        .iter()
        .filter(|vehicle| matches_search(vehicle, &search))
        .filter(|vehicle| {
            criteria
                .make
                .as_deref()
                .map_or(true, |make| vehicle.make == make)
        })
        .filter(|vehicle| criteria.condition.map_or(true, |c| vehicle.condition == c))
        .filter(|vehicle| criteria.min_price.map_or(true, |min| vehicle.price >= min))
        .filter(|vehicle| criteria.max_price.map_or(true, |max| vehicle.price <= max))
        .collect();

    let comparator = comparator_for(criteria.sort);
    listing.sort_by(|a, b| comparator(a, b));
    listing
}

/// Opciones del filtro de marca: marcas del lote, sin duplicados y en
/// orden alfabético.
pub fn distinct_sorted_makes(batch: &[Vehicle]) -> Vec<String> {
    batch
        .iter()
        .map(|vehicle| vehicle.make.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

// `search` llega ya en minúsculas
fn matches_search(vehicle: &Vehicle, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }

    vehicle.make.to_lowercase().contains(search)
        || vehicle.model.to_lowercase().contains(search)
        || vehicle.year.to_string().contains(search)
}

type Comparator = fn(&Vehicle, &Vehicle) -> Ordering;

fn comparator_for(sort: SortKey) -> Comparator {
    match sort {
        SortKey::Newest => |a, b| b.created_at.cmp(&a.created_at),
        SortKey::PriceLow => |a, b| a.price.cmp(&b.price),
        SortKey::PriceHigh => |a, b| b.price.cmp(&a.price),
        SortKey::YearNew => |a, b| b.year.cmp(&a.year),
        SortKey::YearOld => |a, b| a.year.cmp(&b.year),
        SortKey::MileageLow => |a, b| a.mileage.cmp(&b.mileage),
        SortKey::MileageHigh => |a, b| b.mileage.cmp(&a.mileage),
    }
}

/// Una vista del listado: lote inmutable, opciones de marca y criterios.
///
/// Las opciones de marca se recalculan solo cuando cambia el lote; los
/// resultados se re-derivan en cada llamada a `results()`.
#[derive(Debug, Clone, Default)]
pub struct InventoryListing {
    batch: Vec<Vehicle>,
    makes: Vec<String>,
    criteria: FilterCriteria,
}

impl InventoryListing {
    pub fn new(batch: Vec<Vehicle>) -> Self {
        let makes = distinct_sorted_makes(&batch);
        Self {
            batch,
            makes,
            criteria: FilterCriteria::default(),
        }
    }

    pub fn with_criteria(batch: Vec<Vehicle>, criteria: FilterCriteria) -> Self {
        let mut listing = Self::new(batch);
        listing.criteria = criteria;
        listing
    }

    pub fn batch(&self) -> &[Vehicle] {
        &self.batch
    }

    pub fn makes(&self) -> &[String] {
        &self.makes
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn results(&self) -> Vec<&Vehicle> {
        derive_listing(&self.batch, &self.criteria)
    }

    /// Aplica un cambio a los criterios y devuelve la lista re-derivada
    pub fn update<F>(&mut self, change: F) -> Vec<&Vehicle>
    where
        F: FnOnce(&mut FilterCriteria),
    {
        change(&mut self.criteria);
        self.results()
    }

    /// Resetea todos los criterios de una vez y re-deriva la lista completa
    pub fn clear_filters(&mut self) -> Vec<&Vehicle> {
        self.criteria.clear();
        self.results()
    }

    pub fn replace_batch(&mut self, batch: Vec<Vehicle>) {
        self.makes = distinct_sorted_makes(&batch);
        self.batch = batch;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VehicleCondition;
    use crate::seed::seed_inventory;
    use chrono::{Duration, TimeZone, Utc};

    fn vehicle(id: i64, make: &str, model: &str, year: i32, price: i64, mileage: i64) -> Vehicle {
        Vehicle {
            id,
            stock_number: format!("T{:03}", id),
            vin: format!("VIN{:014}", id),
            make: make.to_string(),
            model: model.to_string(),
            year,
            condition: VehicleCondition::Good,
            fuel_type: "Petrol".to_string(),
            transmission: "Automatic".to_string(),
            color: "White".to_string(),
            price,
            mileage,
            description: "Test vehicle for listing".to_string(),
            features: vec![],
            images: vec![],
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(id),
        }
    }

    fn ids(listing: &[&Vehicle]) -> Vec<i64> {
        listing.iter().map(|v| v.id).collect()
    }

    fn every_criteria_variant() -> Vec<FilterCriteria> {
        let mut variants = Vec::new();
        for sort in SortKey::ALL {
            variants.push(FilterCriteria { sort, ..FilterCriteria::default() });
        }
        variants.push(FilterCriteria { search: "o".to_string(), ..FilterCriteria::default() });
        variants.push(FilterCriteria { make: Some("Toyota".to_string()), ..FilterCriteria::default() });
        variants.push(FilterCriteria {
            min_price: Some(22000),
            max_price: Some(30000),
            sort: SortKey::PriceHigh,
            ..FilterCriteria::default()
        });
        variants
    }

    #[test]
    fn test_default_criteria_returns_whole_batch_newest_first() {
        let batch = vec![
            vehicle(2, "Ford", "Ranger", 2017, 32990, 78000),
            vehicle(5, "Honda", "CR-V", 2019, 25990, 45000),
            vehicle(1, "Toyota", "Camry", 2019, 23990, 42000),
        ];
        let listing = derive_listing(&batch, &FilterCriteria::default());
        assert_eq!(ids(&listing), vec![5, 2, 1]);
    }

    #[test]
    fn test_idempotent() {
        let batch = seed_inventory();
        for criteria in every_criteria_variant() {
            let once: Vec<Vehicle> = derive_listing(&batch, &criteria).into_iter().cloned().collect();
            let twice = derive_listing(&once, &criteria);
            assert_eq!(ids(&twice), once.iter().map(|v| v.id).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_adding_a_predicate_never_grows_the_result() {
        let batch = seed_inventory();
        let base = FilterCriteria { search: "o".to_string(), ..FilterCriteria::default() };
        let base_len = derive_listing(&batch, &base).len();

        let mut with_make = base.clone();
        with_make.set_make("Toyota");
        assert!(derive_listing(&batch, &with_make).len() <= base_len);

        let mut with_condition = base.clone();
        with_condition.set_condition("excellent");
        assert!(derive_listing(&batch, &with_condition).len() <= base_len);

        let mut with_min = base.clone();
        with_min.set_min_price_text("25000");
        assert!(derive_listing(&batch, &with_min).len() <= base_len);

        let mut with_max = base;
        with_max.set_max_price_text("25000");
        assert!(derive_listing(&batch, &with_max).len() <= base_len);
    }

    #[test]
    fn test_sort_is_stable_for_every_key() {
        // mismos valores en todas las claves, incluido created_at
        let created_at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let batch: Vec<Vehicle> = [7, 3, 9, 1]
            .into_iter()
            .map(|id| Vehicle { created_at, ..vehicle(id, "Mazda", "CX-5", 2018, 27990, 61000) })
            .collect();

        for sort in SortKey::ALL {
            let criteria = FilterCriteria { sort, ..FilterCriteria::default() };
            assert_eq!(ids(&derive_listing(&batch, &criteria)), vec![7, 3, 9, 1], "sort {}", sort);
        }
    }

    #[test]
    fn test_ties_keep_input_order_within_sorted_groups() {
        let batch = vec![
            vehicle(1, "Toyota", "Camry", 2019, 20000, 10),
            vehicle(2, "Honda", "CR-V", 2019, 10000, 10),
            vehicle(3, "Ford", "Ranger", 2019, 20000, 10),
            vehicle(4, "Mazda", "CX-5", 2019, 10000, 10),
        ];
        let criteria = FilterCriteria { sort: SortKey::PriceHigh, ..FilterCriteria::default() };
        assert_eq!(ids(&derive_listing(&batch, &criteria)), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_every_sort_key_orders_by_its_field() {
        let batch = vec![
            vehicle(1, "A", "a", 2015, 30000, 50000),
            vehicle(2, "B", "b", 2021, 10000, 90000),
            vehicle(3, "C", "c", 2018, 20000, 10000),
        ];
        let order = |sort| {
            ids(&derive_listing(&batch, &FilterCriteria { sort, ..FilterCriteria::default() }))
        };
        assert_eq!(order(SortKey::Newest), vec![3, 2, 1]);
        assert_eq!(order(SortKey::PriceLow), vec![2, 3, 1]);
        assert_eq!(order(SortKey::PriceHigh), vec![1, 3, 2]);
        assert_eq!(order(SortKey::YearNew), vec![2, 3, 1]);
        assert_eq!(order(SortKey::YearOld), vec![1, 3, 2]);
        assert_eq!(order(SortKey::MileageLow), vec![3, 1, 2]);
        assert_eq!(order(SortKey::MileageHigh), vec![2, 1, 3]);
    }

    #[test]
    fn test_inverted_price_range_matches_nothing() {
        let batch = vec![
            vehicle(1, "A", "a", 2015, 10000, 1),
            vehicle(2, "B", "b", 2016, 30000, 1),
            vehicle(3, "C", "c", 2017, 60000, 1),
        ];
        let mut criteria = FilterCriteria::default();
        criteria.set_min_price_text("50000");
        criteria.set_max_price_text("20000");
        assert!(derive_listing(&batch, &criteria).is_empty());
        // las cotas no se intercambian
        assert_eq!(criteria.min_price, Some(50000));
        assert_eq!(criteria.max_price, Some(20000));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let batch = vec![
            vehicle(1, "A", "a", 2015, 10000, 1),
            vehicle(2, "B", "b", 2016, 20000, 1),
            vehicle(3, "C", "c", 2017, 30000, 1),
        ];
        let criteria = FilterCriteria {
            min_price: Some(10000),
            max_price: Some(20000),
            sort: SortKey::PriceLow,
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&derive_listing(&batch, &criteria)), vec![1, 2]);
    }

    #[test]
    fn test_unparsable_price_text_is_not_zero() {
        let batch = vec![vehicle(1, "A", "a", 2015, 10000, 1)];
        let mut criteria = FilterCriteria::default();
        criteria.set_max_price_text("ten thousand");
        assert_eq!(derive_listing(&batch, &criteria).len(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive_and_matches_year() {
        let batch = vec![vehicle(1, "Toyota", "Camry", 2019, 23990, 42000)];
        for term in ["toyota", "CAMRY", "2019", "amr"] {
            let criteria = FilterCriteria { search: term.to_string(), ..FilterCriteria::default() };
            assert_eq!(derive_listing(&batch, &criteria).len(), 1, "term {}", term);
        }
        let criteria = FilterCriteria { search: "honda".to_string(), ..FilterCriteria::default() };
        assert!(derive_listing(&batch, &criteria).is_empty());
    }

    #[test]
    fn test_make_filter_is_exact_and_case_sensitive() {
        let batch = vec![
            vehicle(1, "Toyota", "Camry", 2019, 23990, 42000),
            vehicle(2, "Ford", "Ranger", 2017, 32990, 78000),
        ];
        let mut criteria = FilterCriteria::default();
        criteria.set_make("toyota");
        assert!(derive_listing(&batch, &criteria).is_empty());
        criteria.set_make("Toyota");
        assert_eq!(ids(&derive_listing(&batch, &criteria)), vec![1]);
    }

    #[test]
    fn test_condition_filter() {
        let batch = seed_inventory();
        let mut criteria = FilterCriteria::default();
        criteria.set_condition("good");
        let makes: Vec<&str> = derive_listing(&batch, &criteria).iter().map(|v| v.make.as_str()).collect();
        assert_eq!(makes.len(), 2);
        assert!(makes.contains(&"Mazda"));
        assert!(makes.contains(&"Ford"));
    }

    #[test]
    fn test_make_options_are_distinct_and_sorted() {
        let batch = vec![
            vehicle(1, "Toyota", "Camry", 2019, 1, 1),
            vehicle(2, "Ford", "Ranger", 2017, 1, 1),
            vehicle(3, "Toyota", "Corolla", 2020, 1, 1),
        ];
        assert_eq!(distinct_sorted_makes(&batch), vec!["Ford".to_string(), "Toyota".to_string()]);
        assert!(distinct_sorted_makes(&[]).is_empty());
    }

    #[test]
    fn test_clear_filters_restores_default_listing() {
        let batch = seed_inventory();
        let expected = ids(&derive_listing(&batch, &FilterCriteria::default()));

        let mut listing = InventoryListing::new(batch);
        let filtered = ids(&listing.update(|c| {
            c.set_search("Toyota");
            c.set_min_price_text("20000");
        }));
        assert_eq!(filtered.len(), 1);

        let cleared = ids(&listing.clear_filters());
        assert!(listing.criteria().is_default());
        assert_eq!(cleared, expected);
        assert_eq!(cleared.len(), 5);
    }

    #[test]
    fn test_make_options_follow_batch_not_criteria() {
        let mut listing = InventoryListing::new(vec![
            vehicle(1, "Toyota", "Camry", 2019, 1, 1),
            vehicle(2, "Ford", "Ranger", 2017, 1, 1),
        ]);
        listing.update(|c| c.set_make("Ford"));
        assert_eq!(listing.makes(), ["Ford".to_string(), "Toyota".to_string()]);

        listing.replace_batch(vec![vehicle(3, "Honda", "CR-V", 2019, 1, 1)]);
        assert_eq!(listing.makes(), ["Honda".to_string()]);
        assert!(listing.results().is_empty());
    }

    #[test]
    fn test_seed_inventory_sorted_by_price_low() {
        let batch = seed_inventory();
        let criteria = FilterCriteria { sort: SortKey::PriceLow, ..FilterCriteria::default() };
        let listing: Vec<(&str, i64)> = derive_listing(&batch, &criteria)
            .iter()
            .map(|v| (v.model.as_str(), v.price))
            .collect();
        assert_eq!(
            listing,
            vec![("i30", 21990), ("Camry", 23990), ("CR-V", 25990), ("CX-5", 27990), ("Ranger", 32990)]
        );
    }

    #[test]
    fn test_empty_batch_yields_empty_listing() {
        let listing = InventoryListing::new(vec![]);
        assert!(listing.results().is_empty());
        assert!(listing.makes().is_empty());
    }
}
