pub mod api;
pub mod assistant;
pub mod bootstrap;
pub mod cli;
pub mod cors;
pub mod error;
pub mod state;
pub mod telemetry;
