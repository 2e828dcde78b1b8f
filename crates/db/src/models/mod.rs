//! Entity model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) where the entity supports patches

pub mod card;
pub mod caregiver;
pub mod category;
pub mod child;
pub mod session;
