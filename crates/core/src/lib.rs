//! Shared domain types for the prancha backend: database id and timestamp
//! aliases, the domain error enum, and the fixed starter-category policy.

pub mod defaults;
pub mod error;
pub mod types;
