//! Route handlers organized by resource

pub mod records;
pub mod root;
