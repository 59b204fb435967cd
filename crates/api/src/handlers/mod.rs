pub mod auth;
pub mod categories;
pub mod gallery;
pub mod site;
