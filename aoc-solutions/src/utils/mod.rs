//! Helpers shared by several days

pub mod dp_cache;
pub mod grid;
