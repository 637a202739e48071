// Allergen safety filter.
use std::collections::BTreeSet;

use crate::product::{Catalog, Product};

/// A safe product together with its original catalog position.
///
/// The index is what lets the ranker slice the exact matrix row for this
/// product instead of recomputing its vector.
#[derive(Debug, Clone, Copy)]
pub struct SafeEntry<'a> {
    pub index: usize,
    pub product: &'a Product,
}

/// Products whose allergen set has no intersection with the user's
/// declared allergies, in catalog order.
///
/// The check runs against the catalog's per-product allergen set built at
/// load time. An empty catalog or a user allergic to everything yields an
/// empty list; that is a normal business outcome, not an error.
#[must_use]
pub fn filter_safe<'a>(catalog: &'a Catalog, allergies: &BTreeSet<String>) -> Vec<SafeEntry<'a>> {
    catalog
        .products()
        .iter()
        .enumerate()
        .filter(|(index, _)| {
            catalog
                .allergen_set(*index)
                .is_some_and(|set| set.is_disjoint(allergies))
        })
        .map(|(index, product)| SafeEntry { index, product })
        .collect()
}
