//! Core data model: platform identifiers and the path table

mod path_table;
mod platform;

pub use path_table::*;
pub use platform::*;
