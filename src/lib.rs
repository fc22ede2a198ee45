pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod storage;
pub mod telemetry;
