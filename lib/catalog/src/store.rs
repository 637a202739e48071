use std::path::Path;

use tracing::{info, warn};

use safebite_core::{
    filter_safe, normalize_allergens, rank, Catalog, Error, Product, Result, TfidfModel,
};

use crate::loader;

/// Process-wide catalog plus fitted vector space model.
///
/// Built once at startup and immutable afterwards; request handlers share
/// it behind an `Arc` with no locking. A store with no model is degraded:
/// it keeps serving requests, and every recommendation resolves to "no
/// safe matches".
pub struct CatalogStore {
    catalog: Catalog,
    model: Option<TfidfModel>,
}

impl CatalogStore {
    /// Load the catalog source and fit the model.
    ///
    /// Load or fit failure never propagates: the store starts degraded and
    /// the cause is logged once as a warning.
    #[must_use]
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        match loader::load(path.as_ref()) {
            Ok(products) => Self::from_catalog(Catalog::new(products)),
            Err(e) => {
                warn!("Catalog load failed, serving degraded: {}", e);
                Self {
                    catalog: Catalog::default(),
                    model: None,
                }
            }
        }
    }

    /// Build a store from an already-constructed catalog.
    ///
    /// This is the seam for tests to inject fixture catalogs.
    #[must_use]
    pub fn from_catalog(catalog: Catalog) -> Self {
        let model = match TfidfModel::fit(&catalog) {
            Ok(model) => {
                info!(
                    "Fitted vector space model: {} products, {} terms",
                    catalog.len(),
                    model.vocabulary_len()
                );
                Some(model)
            }
            Err(e) => {
                warn!("Model fit failed, serving degraded: {}", e);
                None
            }
        };
        Self { catalog, model }
    }

    /// True when the catalog or model failed to initialize.
    #[inline]
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.model.is_none()
    }

    #[inline]
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.catalog.len()
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Recommend the safe product most similar to the scanned text.
    ///
    /// `Ok(None)` means no safe matches - either nothing in the catalog or
    /// every product contains a declared allergen. A degraded store fails
    /// with [`Error::EmptyVocabulary`], which callers report the same way.
    pub fn recommend(
        &self,
        scanned_text: &str,
        user_allergies: &[String],
    ) -> Result<Option<&Product>> {
        let model = self.model.as_ref().ok_or(Error::EmptyVocabulary)?;
        let allergies = normalize_allergens(user_allergies);
        let safe = filter_safe(&self.catalog, &allergies);
        Ok(rank(model, scanned_text, &safe))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Product::new(
                "1",
                "Peanut Bar",
                vec!["peanuts".to_string(), "sugar".to_string()],
                ["peanuts".to_string()],
            ),
            Product::new(
                "2",
                "Oat Bar",
                vec!["oats".to_string(), "honey".to_string()],
                [],
            ),
        ])
    }

    #[test]
    fn test_recommend_excludes_allergens() {
        let store = CatalogStore::from_catalog(sample_catalog());
        let best = store
            .recommend("oat honey bar", &["peanuts".to_string()])
            .unwrap()
            .unwrap();
        assert_eq!(best.barcode, "2");
    }

    #[test]
    fn test_recommend_nothing_safe_is_none() {
        let store = CatalogStore::from_catalog(sample_catalog());
        let result = store
            .recommend(
                "oat honey bar",
                &["peanuts".to_string(), "oats".to_string()],
            )
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_open_missing_source_is_degraded() {
        let store = CatalogStore::open("/nonexistent/products.json");
        assert!(store.is_degraded());
        assert_eq!(store.product_count(), 0);
        let err = store.recommend("oat bar", &[]).unwrap_err();
        assert!(matches!(err, Error::EmptyVocabulary));
    }

    #[test]
    fn test_empty_catalog_is_degraded() {
        let store = CatalogStore::from_catalog(Catalog::default());
        assert!(store.is_degraded());
    }

    #[test]
    fn test_allergies_normalized_at_request_time() {
        let store = CatalogStore::from_catalog(sample_catalog());
        let result = store
            .recommend("peanut bar", &["  PEANUTS ".to_string()])
            .unwrap()
            .unwrap();
        // The peanut bar is excluded despite the unnormalized input.
        assert_eq!(result.barcode, "2");
    }
}
