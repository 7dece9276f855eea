pub mod artifacts;
pub mod database;
