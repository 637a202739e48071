//! # safebite Catalog
//!
//! Catalog layer for the safebite recommender: parsing the JSON catalog
//! source and holding the process-wide [`CatalogStore`] (catalog plus
//! fitted model) that request handlers share behind an `Arc`.
//!
//! A missing or malformed catalog source never aborts startup: the store
//! comes up degraded and every recommendation resolves to "no safe
//! matches" until the process is restarted with a readable source.

pub mod loader;
pub mod store;

pub use loader::load;
pub use store::CatalogStore;
