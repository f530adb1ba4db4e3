//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool, no Arc<Mutex<Connection>>
//! - One statement, or one insert + commit, per session
//! - Model structs stay SQL-free; table mapping lives in `repos`

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
