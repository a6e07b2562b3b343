//! TF-IDF document vectorizer fitted over the catalogue at startup.
//!
//! Deterministic by construction: vocabulary selection breaks document
//! frequency ties alphabetically, and transforms of the same text always
//! produce the same vector.

use std::collections::HashMap;

/// Vocabulary cap. Terms beyond the cap (by document frequency) are dropped.
pub const MAX_FEATURES: usize = 1000;

const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "have",
    "in", "is", "it", "its", "of", "on", "or", "that", "the", "their", "they", "this",
    "to", "was", "were", "will", "with",
];

pub struct TfIdfEmbedder {
    term_index: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfIdfEmbedder {
    /// Fits vocabulary and inverse document frequencies on the corpus.
    /// Keeps the `max_features` most frequent terms, ties alphabetical.
    pub fn fit(documents: &[String], max_features: usize) -> Self {
        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            let mut terms = tokenize(doc);
            terms.sort_unstable();
            terms.dedup();
            for term in terms {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(String, usize)> = document_frequency.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(max_features);
        // Vocabulary ordering itself is alphabetical so vector layout is
        // independent of frequency ranking.
        ranked.sort_by(|a, b| a.0.cmp(&b.0));

        let n_docs = documents.len() as f32;
        let mut term_index = HashMap::with_capacity(ranked.len());
        let mut idf = Vec::with_capacity(ranked.len());
        for (pos, (term, df)) in ranked.into_iter().enumerate() {
            term_index.insert(term, pos);
            // Smoothed idf, always positive
            idf.push(((1.0 + n_docs) / (1.0 + df as f32)).ln() + 1.0);
        }

        Self { term_index, idf }
    }

    pub fn dimensions(&self) -> usize {
        self.idf.len()
    }

    /// L2-normalized tf-idf vector for arbitrary text. Out-of-vocabulary
    /// terms are ignored; text with no known terms yields the zero vector.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.idf.len()];
        for term in tokenize(text) {
            if let Some(&pos) = self.term_index.get(&term) {
                vector[pos] += self.idf[pos];
            }
        }
        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

/// Lowercased alphanumeric runs, minus stopwords and single characters.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() > 1 && !STOPWORDS.contains(t))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<String> {
        vec![
            "Software developer designs and builds software applications".to_string(),
            "Nurse provides patient care in hospital wards".to_string(),
            "Accountant prepares financial statements and audits accounts".to_string(),
        ]
    }

    fn cosine(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn test_tokenize_drops_stopwords_and_short_tokens() {
        let tokens = tokenize("The nurse is in a ward, 24x7!");
        assert_eq!(tokens, vec!["nurse", "ward", "24x7"]);
    }

    #[test]
    fn test_transform_is_l2_normalized() {
        let embedder = TfIdfEmbedder::fit(&corpus(), MAX_FEATURES);
        let v = embedder.transform("software developer builds applications");
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "norm was {norm}");
    }

    #[test]
    fn test_matching_document_scores_highest() {
        let docs = corpus();
        let embedder = TfIdfEmbedder::fit(&docs, MAX_FEATURES);
        let query = embedder.transform("patient care nurse");
        let sims: Vec<f32> = docs.iter().map(|d| cosine(&query, &embedder.transform(d))).collect();
        assert!(sims[1] > sims[0]);
        assert!(sims[1] > sims[2]);
    }

    #[test]
    fn test_unknown_terms_yield_zero_vector() {
        let embedder = TfIdfEmbedder::fit(&corpus(), MAX_FEATURES);
        let v = embedder.transform("zzz qqq");
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_vocabulary_cap_respected() {
        let embedder = TfIdfEmbedder::fit(&corpus(), 5);
        assert_eq!(embedder.dimensions(), 5);
    }

    #[test]
    fn test_transform_deterministic() {
        let embedder = TfIdfEmbedder::fit(&corpus(), MAX_FEATURES);
        assert_eq!(
            embedder.transform("software developer"),
            embedder.transform("software developer")
        );
    }
}
