pub mod config;
pub mod error;
pub mod estimator;
pub mod report;
pub mod telemetry;
pub mod web;
