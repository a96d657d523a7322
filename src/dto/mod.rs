//! Wire-format DTOs for payloads that are not domain entities.

pub mod page;
pub mod problem;
