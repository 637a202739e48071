// TF-IDF vector space over the product catalog.
//
// Fitted once at startup over every product's combined feature text; each
// request only pays for one query projection plus one dot product per safe
// candidate, and all requests score against the same space.
use ahash::AHashMap;

use crate::error::{Error, Result};
use crate::product::Catalog;
use crate::vector::Vector;

/// Terms must appear in at least this many distinct products to enter the
/// vocabulary. Bounds vocabulary size and suppresses noise from rare tokens.
const MIN_DOC_FREQ: usize = 2;

/// Common English words excluded from the vocabulary.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "it", "in", "on", "of", "to", "and", "or", "for", "with", "this",
    "that", "be", "are", "was", "were", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "can", "shall", "not", "no",
    "but", "if", "at", "by", "from", "as", "into", "about", "up", "out", "so", "its", "you",
    "your", "i", "my", "we", "our", "they", "them", "their", "he", "she", "his", "her",
];

/// A fitted term-weighting model over a catalog.
///
/// Holds the vocabulary, per-term inverse document frequency, and the
/// catalog-wide matrix of unit-normalized document vectors (row `i` is the
/// product at catalog position `i`). Read-only after [`TfidfModel::fit`].
#[derive(Debug, Clone)]
pub struct TfidfModel {
    // term -> column index
    vocabulary: AHashMap<String, usize>,
    // idf weight per column
    idf: Vec<f32>,
    matrix: Vec<Vector>,
}

impl TfidfModel {
    /// Fit the model over the whole catalog's combined feature texts.
    ///
    /// The vocabulary is unigrams and bigrams occurring in at least
    /// [`MIN_DOC_FREQ`] distinct products, stop words excluded, with
    /// smoothed idf `ln((1 + n) / (1 + df)) + 1`. Document vectors are
    /// term-frequency times idf, normalized to unit length.
    ///
    /// Fails with [`Error::EmptyVocabulary`] when no term survives, e.g.
    /// on an empty or single-product catalog.
    pub fn fit(catalog: &Catalog) -> Result<Self> {
        let documents: Vec<Vec<String>> = catalog
            .combined_texts()
            .iter()
            .map(|text| extract_terms(text))
            .collect();

        // Document frequency over distinct documents per term.
        let mut doc_freq: AHashMap<&str, usize> = AHashMap::new();
        for terms in &documents {
            let mut seen: Vec<&str> = terms.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        // Lexicographic column order keeps fitting deterministic.
        let mut kept: Vec<&str> = doc_freq
            .iter()
            .filter(|(_, &df)| df >= MIN_DOC_FREQ)
            .map(|(&term, _)| term)
            .collect();
        kept.sort_unstable();

        if kept.is_empty() {
            return Err(Error::EmptyVocabulary);
        }

        let vocabulary: AHashMap<String, usize> = kept
            .iter()
            .enumerate()
            .map(|(idx, &term)| (term.to_string(), idx))
            .collect();

        let total_docs = documents.len() as f32;
        let idf: Vec<f32> = kept
            .iter()
            .map(|&term| {
                let df = doc_freq[term] as f32;
                ((1.0 + total_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let matrix = documents
            .iter()
            .map(|terms| weigh(terms, &vocabulary, &idf))
            .collect();

        Ok(Self {
            vocabulary,
            idf,
            matrix,
        })
    }

    /// Project new text into the fitted vocabulary.
    ///
    /// Terms unseen during fit contribute zero weight; the fitted state is
    /// never altered. The result is unit-normalized, so similarity against
    /// a matrix row is a plain dot product.
    #[must_use]
    pub fn project(&self, text: &str) -> Vector {
        let terms = extract_terms(&text.to_lowercase());
        weigh(&terms, &self.vocabulary, &self.idf)
    }

    /// Matrix row for the product at the given catalog position.
    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Vector> {
        self.matrix.get(index)
    }

    /// Number of terms in the fitted vocabulary.
    #[inline]
    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of document rows in the catalog-wide matrix.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.matrix.len()
    }
}

/// Tokenize lowercased text into word tokens of at least two characters,
/// stop words removed. Underscores count as word characters.
fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| token.len() >= 2)
        .filter(|token| !STOP_WORDS.contains(token))
        .collect()
}

/// Unigrams plus bigrams of adjacent tokens, in document order.
fn extract_terms(text: &str) -> Vec<String> {
    let tokens = tokenize(text);
    let mut terms: Vec<String> = tokens.iter().map(|&t| t.to_string()).collect();
    for pair in tokens.windows(2) {
        terms.push(format!("{} {}", pair[0], pair[1]));
    }
    terms
}

/// Term-frequency times idf over the vocabulary, unit-normalized.
fn weigh(terms: &[String], vocabulary: &AHashMap<String, usize>, idf: &[f32]) -> Vector {
    let mut vector = Vector::zeros(idf.len());
    let weights = vector.as_mut_slice();
    for term in terms {
        if let Some(&idx) = vocabulary.get(term.as_str()) {
            weights[idx] += idf[idx];
        }
    }
    vector.normalize();
    vector
}
