//! # safebite Core
//!
//! Core library for the safebite food recommender.
//!
//! This crate provides the algorithmic pipeline behind a recommendation:
//!
//! - [`Product`] / [`Catalog`] - immutable, index-stable product records
//! - [`TfidfModel`] - term-weighted vector space fitted once over the catalog
//! - [`filter_safe`] - allergen safety filter with original-index retention
//! - [`rank`] - cosine-similarity arg-max over the safe subset
//!
//! ## Example
//!
//! ```rust
//! use safebite_core::{Catalog, Product, TfidfModel, filter_safe, rank, normalize_allergens};
//!
//! let catalog = Catalog::new(vec![
//!     Product::new("1", "Peanut Bar",
//!         vec!["peanuts".into(), "sugar".into()], ["peanuts".to_string()]),
//!     Product::new("2", "Oat Bar",
//!         vec!["oats".into(), "honey".into()], []),
//! ]);
//!
//! let model = TfidfModel::fit(&catalog).unwrap();
//! let allergies = normalize_allergens(["Peanuts"]);
//! let safe = filter_safe(&catalog, &allergies);
//! let best = rank(&model, "oat honey bar", &safe).unwrap();
//! assert_eq!(best.barcode, "2");
//! ```

pub mod error;
pub mod filter;
pub mod normalize;
pub mod product;
pub mod rank;
pub mod tfidf;
pub mod vector;

pub use error::{Error, Result};
pub use filter::{filter_safe, SafeEntry};
pub use normalize::{normalize, normalize_allergens};
pub use product::{Catalog, Product};
pub use rank::rank;
pub use tfidf::TfidfModel;
pub use vector::Vector;
