// Catalog source parsing.
use std::path::Path;

use safebite_core::{Error, Product, Result};

/// Parse a catalog source file into product records.
///
/// The source is a JSON array of
/// `{ "barcode", "name", "ingredients", "allergens" }` objects. A missing
/// or unreadable file maps to [`Error::CatalogUnreadable`]; records with
/// missing or mistyped fields map to [`Error::CatalogMalformed`]. Callers
/// recover from both by starting degraded rather than crashing.
pub fn load(path: &Path) -> Result<Vec<Product>> {
    let raw = std::fs::read_to_string(path).map_err(|source| Error::CatalogUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|e| Error::CatalogMalformed(e.to_string()))
}
