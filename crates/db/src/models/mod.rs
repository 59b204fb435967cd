//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - DTOs for inserts and patches

pub mod artwork;
pub mod category;
