//! Command implementations for clinicctl CLI

pub mod migrate;
pub mod serve;

// Re-export main dispatcher functions for flat access from main.rs
pub use migrate::run_migrate;
pub use serve::run_serve;
