pub mod config;
pub mod datetime;
pub mod error;
pub mod extractors;
pub mod middleware;
