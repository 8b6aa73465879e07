pub mod config;
pub mod context;
pub mod error;
pub mod policy;
pub mod telemetry;
