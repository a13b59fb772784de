pub mod configuration;
pub mod domain;
pub mod error;
pub mod notification;
pub mod provider;
pub mod telemetry;
