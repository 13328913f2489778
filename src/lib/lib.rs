#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Builds and validates email messages and renders them as the JSON payload
//! expected by a transactional-email provider.

pub mod domain;
pub mod infrastructure;
