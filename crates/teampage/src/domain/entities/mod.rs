//! Domain Entities
//!
//! - Employee: one team member with a role-specific detail
//! - Team: the named, ordered member list headed by its manager

mod employee;
mod team;

pub use employee::*;
pub use team::*;
