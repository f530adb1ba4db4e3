//! clinicctl-server: HTTP API for clinic record keeping
//!
//! Exposes two dated-record resources, expenses and staff accountability
//! entries, each with a list and a create endpoint backed by one SQLite
//! table.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use state::AppState;
