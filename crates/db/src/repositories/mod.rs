//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every query over
//! caregiver-owned rows filters by caregiver id; no method can read or
//! mutate another caregiver's data.

pub mod card_repo;
pub mod caregiver_repo;
pub mod category_repo;
pub mod child_repo;
pub mod session_repo;

pub use card_repo::CardRepo;
pub use caregiver_repo::CaregiverRepo;
pub use category_repo::CategoryRepo;
pub use child_repo::ChildRepo;
pub use session_repo::SessionRepo;
