//! Datos semilla del inventario
//!
//! Los cinco vehículos con los que arranca la tienda. Los usa el binario
//! `seed_inventory` y los tests.

use chrono::{Duration, TimeZone, Utc};

use crate::models::{NewVehicle, Vehicle, VehicleCondition};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn seed_vehicles() -> Vec<NewVehicle> {
    vec![
        NewVehicle {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2019,
            price: 23990,
            mileage: 42000,
            fuel_type: "Petrol".to_string(),
            transmission: "Automatic".to_string(),
            color: "Silver".to_string(),
            description: "Reliable sedan, full service history, one owner. Excellent condition with low mileage for its age.".to_string(),
            images: strings(&["https://images.unsplash.com/photo-1511918984145-48de785d4c4e?w=800&h=600&fit=crop"]),
            features: strings(&["Bluetooth", "Reverse Camera", "Cruise Control", "Alloy Wheels"]),
            vin: "JTNB11HK003123456".to_string(),
            stock_number: "AM001".to_string(),
            condition: VehicleCondition::Excellent,
        },
        NewVehicle {
            make: "Mazda".to_string(),
            model: "CX-5".to_string(),
            year: 2018,
            price: 27990,
            mileage: 61000,
            fuel_type: "Diesel".to_string(),
            transmission: "Automatic".to_string(),
            color: "Red".to_string(),
            description: "Spacious SUV, great for families, well maintained. Perfect for weekend getaways.".to_string(),
            images: strings(&["https://images.unsplash.com/photo-1503736334956-4c8f8e92946d?w=800&h=600&fit=crop"]),
            features: strings(&["Leather Seats", "Navigation", "Sunroof", "AWD"]),
            vin: "JM0KF4WLA00123456".to_string(),
            stock_number: "AM002".to_string(),
            condition: VehicleCondition::Good,
        },
        NewVehicle {
            make: "Hyundai".to_string(),
            model: "i30".to_string(),
            year: 2020,
            price: 21990,
            mileage: 31000,
            fuel_type: "Petrol".to_string(),
            transmission: "Manual".to_string(),
            color: "Blue".to_string(),
            description: "Sporty hatchback, low kms, balance of new car warranty. Fun to drive and economical.".to_string(),
            images: strings(&["https://images.unsplash.com/photo-1461632830798-3adb3034e4c8?w=800&h=600&fit=crop"]),
            features: strings(&["Apple CarPlay", "Alloy Wheels", "Heated Seats", "Sport Mode"]),
            vin: "KMHH351EMLU123456".to_string(),
            stock_number: "AM003".to_string(),
            condition: VehicleCondition::Excellent,
        },
        NewVehicle {
            make: "Ford".to_string(),
            model: "Ranger".to_string(),
            year: 2017,
            price: 32990,
            mileage: 78000,
            fuel_type: "Diesel".to_string(),
            transmission: "Automatic".to_string(),
            color: "White".to_string(),
            description: "Powerful ute, perfect for work or recreation. Towing capacity and off-road capability.".to_string(),
            images: strings(&["https://images.unsplash.com/photo-1552519507-da3b142c6e3d?w=800&h=600&fit=crop"]),
            features: strings(&["4WD", "Towing Package", "Tonneau Cover", "Bluetooth"]),
            vin: "MMFJXXGAJGJ123456".to_string(),
            stock_number: "AM004".to_string(),
            condition: VehicleCondition::Good,
        },
        NewVehicle {
            make: "Honda".to_string(),
            model: "CR-V".to_string(),
            year: 2019,
            price: 25990,
            mileage: 45000,
            fuel_type: "Petrol".to_string(),
            transmission: "Automatic".to_string(),
            color: "Black".to_string(),
            description: "Reliable SUV with excellent fuel economy. Great family car with plenty of space.".to_string(),
            images: strings(&["https://images.unsplash.com/photo-1549317661-bd32c8ce0db2?w=800&h=600&fit=crop"]),
            features: strings(&["Honda Sensing", "Apple CarPlay", "Alloy Wheels", "Roof Rails"]),
            vin: "5FNRL38467B123456".to_string(),
            stock_number: "AM005".to_string(),
            condition: VehicleCondition::Excellent,
        },
    ]
}

/// Semilla ya "persistida": ids 1..=5 insertados un minuto aparte, en el
/// mismo orden que el script de carga.
pub fn seed_inventory() -> Vec<Vehicle> {
    let base = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).single().unwrap_or_else(Utc::now);

    seed_vehicles()
        .into_iter()
        .zip(1i64..)
        .map(|(vehicle, id)| vehicle.into_vehicle(id, base + Duration::minutes(id)))
        .collect()
}
