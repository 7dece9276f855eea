pub mod background;
pub mod config;
pub mod error;
pub mod models;
pub mod persistence;
pub mod routes;
pub mod services;
pub mod state;
