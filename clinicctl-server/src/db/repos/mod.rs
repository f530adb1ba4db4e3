//! Repository implementations for database access
//!
//! Each table maps a plain model onto SQL through [`Table`]; the shared
//! [`RecordRepo`] does the querying.

pub mod accountability;
pub mod expenses;
pub mod records;

pub use records::{DbError, RecordRepo, Table};
