//! # safebite API
//!
//! REST layer for the safebite recommender: a single recommendation
//! endpoint plus a health probe, served by actix-web over a shared
//! read-only [`CatalogStore`](safebite_catalog::CatalogStore).

pub mod rest;

pub use rest::RestApi;
