pub mod api;
pub mod config;
pub mod constants;
pub mod events;
pub mod fallback;
pub mod models;
pub mod runtime;
pub mod stats;
pub mod store;
pub mod tracing_setup;
