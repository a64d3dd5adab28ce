//! Data Transfer Objects for API requests and responses.
//!
//! DTOs own the JSON shape (camelCase keys, ISO dates) so domain entities stay
//! free of serialization concerns.

pub mod expense;
pub mod health;
