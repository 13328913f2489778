//! Infrastructure adapters

pub mod output;
