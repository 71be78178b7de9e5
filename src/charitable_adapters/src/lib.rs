pub mod config;
pub mod http;
pub mod persistence;
pub mod telemetry;

pub use http::router;
