//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod artwork_repo;
pub mod category_repo;

pub use artwork_repo::ArtworkRepo;
pub use category_repo::CategoryRepo;
