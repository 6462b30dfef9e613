//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the services talk to the user.
//! The terminal implementation lives in the CLI crate.

pub mod prompter;

// Re-exports
pub use prompter::*;
