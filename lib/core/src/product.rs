use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize_allergens;

/// A food product record.
///
/// This is both the catalog source shape and the wire shape of a
/// recommendation response. Declared allergens are case/whitespace-
/// normalized when the record enters a [`Catalog`]; a sorted set keeps
/// membership checks order-independent and serialization deterministic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub barcode: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub allergens: BTreeSet<String>,
}

impl Product {
    #[must_use]
    pub fn new(
        barcode: impl Into<String>,
        name: impl Into<String>,
        ingredients: Vec<String>,
        allergens: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            barcode: barcode.into(),
            name: name.into(),
            ingredients,
            allergens: allergens.into_iter().collect(),
        }
    }

    /// Lowercased concatenation of name and space-joined ingredients.
    ///
    /// This is the text the vector space model is fitted on.
    #[must_use]
    pub fn combined_feature_text(&self) -> String {
        let mut text = String::with_capacity(
            self.name.len() + self.ingredients.iter().map(|i| i.len() + 1).sum::<usize>() + 1,
        );
        text.push_str(&self.name);
        for ingredient in &self.ingredients {
            text.push(' ');
            text.push_str(ingredient);
        }
        text.to_lowercase()
    }
}

/// An ordered, index-stable sequence of products.
///
/// Position `i` in the catalog corresponds to row `i` of the fitted
/// TF-IDF matrix for the whole process lifetime. Two derived views are
/// computed once here, never per request: the combined feature text and
/// the allergen set per product (declared allergens plus normalized
/// ingredients, so an undeclared allergen that appears verbatim in the
/// ingredient list still excludes the product).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    combined: Vec<String>,
    allergen_sets: Vec<BTreeSet<String>>,
}

impl Catalog {
    /// Build a catalog from raw records.
    #[must_use]
    pub fn new(mut products: Vec<Product>) -> Self {
        for product in &mut products {
            product.allergens = normalize_allergens(std::mem::take(&mut product.allergens));
        }
        let combined = products.iter().map(Product::combined_feature_text).collect();
        let allergen_sets = products
            .iter()
            .map(|p| {
                let mut set = p.allergens.clone();
                set.extend(normalize_allergens(&p.ingredients));
                set
            })
            .collect();
        Self {
            products,
            combined,
            allergen_sets,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    #[inline]
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Combined feature texts, aligned with catalog positions.
    #[inline]
    #[must_use]
    pub fn combined_texts(&self) -> &[String] {
        &self.combined
    }

    /// The allergen set for the product at the given catalog position.
    #[inline]
    #[must_use]
    pub fn allergen_set(&self, index: usize) -> Option<&BTreeSet<String>> {
        self.allergen_sets.get(index)
    }
}
