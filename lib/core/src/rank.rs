// Query ranking over the safe subset.
use crate::filter::SafeEntry;
use crate::product::Product;
use crate::tfidf::TfidfModel;

/// The safe product most similar to the query text, or `None` when the
/// safe list is empty.
///
/// The query is projected once; each candidate is scored by dotting the
/// query vector against the model's matrix row at the candidate's stored
/// catalog index (rows and projection are unit-normalized, so the dot
/// product is cosine similarity). Ties keep the entry appearing earliest
/// in the safe list, which preserves catalog order and makes the result
/// reproducible for identical inputs.
#[must_use]
pub fn rank<'a>(model: &TfidfModel, query_text: &str, safe: &[SafeEntry<'a>]) -> Option<&'a Product> {
    let query = model.project(query_text);

    let mut best: Option<(&SafeEntry<'a>, f32)> = None;
    for entry in safe {
        let score = model
            .row(entry.index)
            .map(|row| query.dot(row))
            .unwrap_or(0.0);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((entry, score)),
        }
    }

    best.map(|(entry, _)| entry.product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_safe;
    use crate::normalize::normalize_allergens;
    use crate::product::{Catalog, Product};

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
            Product::new(
                "3",
                "Honey Granola",
                vec!["oats".to_string(), "honey".to_string(), "sugar".to_string()],
                [],
            ),
        ])
    }

    #[test]
    fn test_empty_safe_list_is_none() {
        let catalog = sample_catalog();
        let model = TfidfModel::fit(&catalog).unwrap();
        assert!(rank(&model, "oat honey bar", &[]).is_none());
    }

    #[test]
    fn test_picks_most_similar_safe_product() {
        let catalog = sample_catalog();
        let model = TfidfModel::fit(&catalog).unwrap();
        let safe = filter_safe(&catalog, &normalize_allergens(["peanuts"]));
        let best = rank(&model, "oat bar with honey", &safe).unwrap();
        assert_eq!(best.barcode, "2");
    }

    #[test]
    fn test_tie_break_keeps_earliest_catalog_entry() {
        // Two identical products tie on every query; the earlier row wins.
        let catalog = Catalog::new(vec![
            Product::new("1", "Oat Bar", vec!["oats".to_string()], []),
            Product::new("2", "Oat Bar", vec!["oats".to_string()], []),
        ]);
        let model = TfidfModel::fit(&catalog).unwrap();
        let safe = filter_safe(&catalog, &Default::default());
        let best = rank(&model, "oat bar", &safe).unwrap();
        assert_eq!(best.barcode, "1");
    }

    #[test]
    fn test_zero_similarity_still_returns_first_entry() {
        // A query sharing no terms with any safe product scores uniformly
        // zero; the first safe entry is still reported as the best match.
        let catalog = sample_catalog();
        let model = TfidfModel::fit(&catalog).unwrap();
        let safe = filter_safe(&catalog, &normalize_allergens(["peanuts"]));
        let best = rank(&model, "quinoa spirulina shake", &safe).unwrap();
        assert_eq!(best.barcode, "2");
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let catalog = sample_catalog();
        let model = TfidfModel::fit(&catalog).unwrap();
        let safe = filter_safe(&catalog, &Default::default());
        let first = rank(&model, "honey oats", &safe).map(|p| p.barcode.clone());
        for _ in 0..10 {
            let again = rank(&model, "honey oats", &safe).map(|p| p.barcode.clone());
            assert_eq!(first, again);
        }
    }
}
