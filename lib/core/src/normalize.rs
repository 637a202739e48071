// Text normalization shared by catalog load and request handling.
// Allergen comparison is exact string membership, so both sides must go
// through the same transform.
use std::collections::BTreeSet;

/// Lowercase and trim a single string. Idempotent.
#[inline]
#[must_use]
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Normalize a list of allergen names into a set.
///
/// Duplicates collapse and entries that normalize to empty are dropped.
/// Membership is order-independent, so a sorted set keeps serialization
/// deterministic.
pub fn normalize_allergens<I, S>(items: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| normalize(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize("  Peanuts "), "peanuts");
        assert_eq!(normalize("MILK"), "milk");
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = normalize("  Tree Nuts  ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_normalize_allergens_collapses_duplicates() {
        let set = normalize_allergens(["Peanuts", " peanuts ", "PEANUTS", "soy"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("peanuts"));
        assert!(set.contains("soy"));
    }

    #[test]
    fn test_normalize_allergens_drops_blank_entries() {
        let set = normalize_allergens(["  ", "", "egg"]);
        assert_eq!(set.len(), 1);
        assert!(set.contains("egg"));
    }
}
