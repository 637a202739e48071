//! # safebite
//!
//! An allergen-aware food product recommender.
//!
//! safebite matches scanned packaging text (e.g. OCR output) against a
//! product catalog using a TF-IDF vector space fitted once at startup,
//! and never recommends a product containing an allergen the user has
//! declared.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install safebite
//! safebite --catalog products.json --http-port 8080
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use safebite::prelude::*;
//!
//! let catalog = Catalog::new(vec![
//!     Product::new("1", "Peanut Bar",
//!         vec!["peanuts".into(), "sugar".into()], ["peanuts".to_string()]),
//!     Product::new("2", "Oat Bar",
//!         vec!["oats".into(), "honey".into()], []),
//! ]);
//!
//! let store = CatalogStore::from_catalog(catalog);
//! let best = store
//!     .recommend("oat honey bar", &["peanuts".to_string()])
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(best.barcode, "2");
//! ```
//!
//! ## Crate Structure
//!
//! safebite is composed of several crates:
//!
//! - [`safebite-core`](https://docs.rs/safebite-core) - Product catalog, TF-IDF model, safety filter, ranker
//! - [`safebite-catalog`](https://docs.rs/safebite-catalog) - Catalog loading and the process-wide store
//! - [`safebite-api`](https://docs.rs/safebite-api) - REST API
//!
//! ## Features
//!
//! - **Allergen Safety**: exact, normalized allergen matching over declared
//!   allergens and ingredient lists
//! - **TF-IDF Ranking**: unigram+bigram vector space, cosine similarity
//! - **Degraded Mode**: a missing catalog never crashes the service
//! - **Read-Only Sharing**: one immutable store, no locks at request time

// Re-export core types
pub use safebite_core::{
    filter_safe, normalize, normalize_allergens, rank, Catalog, Error, Product, Result, SafeEntry,
    TfidfModel, Vector,
};

// Re-export the catalog layer
pub use safebite_catalog::CatalogStore;

// Re-export the API
pub use safebite_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        filter_safe, normalize, normalize_allergens, rank, Catalog, CatalogStore, Error, Product,
        RestApi, Result, SafeEntry, TfidfModel, Vector,
    };
}
