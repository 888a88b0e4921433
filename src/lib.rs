//! Backend del sitio del concesionario
//!
//! Inventario de vehículos usados con listado filtrable, panel de
//! administración, subida de imágenes y formularios de leads.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_router;
pub use state::AppState;
