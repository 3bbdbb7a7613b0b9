pub mod configuration;
pub mod db;
pub mod forms;
pub(crate) mod helpers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod startup;
pub mod telemetry;
pub mod views;
