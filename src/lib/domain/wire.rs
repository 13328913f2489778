//! Rendering of the message model into the provider's JSON shape.
//!
//! Internal records use lower-camel keys (`replyTo`, `sendAt`); the provider
//! expects lower-snake keys. [`to_snake_case`] performs that rename over a
//! [`WireNode`] tree, leaving subtrees under exempted keys untouched.

mod case;
mod sequence;
mod tree;

pub use case::snake_case;
pub use sequence::{array_to_json, ToJson};
pub use tree::{to_snake_case, WireNode};
