//! Terminal presentation helpers

pub mod styling;

pub use styling::*;
