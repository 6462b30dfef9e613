//! Value Objects
//!
//! Immutable value types used by the domain entities.

mod email;
mod role;

pub use email::*;
pub use role::*;
