//! Domain types and pure logic for the Atelier gallery.
//!
//! Holds the entity shapes, the error taxonomy, the bundled fallback
//! catalog, object-key naming, and input validation. Everything here is
//! synchronous and free of I/O.

pub mod artwork;
pub mod catalog;
pub mod error;
pub mod naming;
pub mod types;
pub mod validate;
