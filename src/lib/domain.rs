//! Domain layer: the message model and its wire rendering

pub mod mail;
pub mod wire;
