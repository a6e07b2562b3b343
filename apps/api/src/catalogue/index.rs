//! Nearest-neighbor lookup over catalogue embeddings.
//!
//! The engine only sees the `VectorIndex` trait, so the brute-force scan can
//! be swapped for an external index without touching the scoring code.

use crate::catalogue::embedder::{TfIdfEmbedder, MAX_FEATURES};
use crate::catalogue::store::CatalogueStore;

/// Embedding lookup over the catalogue. `nearest` returns record ordinals
/// (positions in catalogue order) with cosine similarity, best first,
/// ties broken by ascending ordinal for determinism.
pub trait VectorIndex: Send + Sync {
    fn embed(&self, text: &str) -> Vec<f32>;
    fn nearest(&self, embedding: &[f32], k: usize) -> Vec<(usize, f32)>;
}

/// In-memory brute-force cosine scan over TF-IDF vectors. The catalogue is
/// small enough that a full scan completes in bounded time per request.
pub struct BruteForceIndex {
    embedder: TfIdfEmbedder,
    vectors: Vec<Vec<f32>>,
}

impl BruteForceIndex {
    pub fn build(store: &CatalogueStore) -> Self {
        let documents = store.documents();
        let embedder = TfIdfEmbedder::fit(&documents, MAX_FEATURES);
        let vectors = documents.iter().map(|d| embedder.transform(d)).collect();
        Self { embedder, vectors }
    }

    pub fn dimensions(&self) -> usize {
        self.embedder.dimensions()
    }
}

impl VectorIndex for BruteForceIndex {
    fn embed(&self, text: &str) -> Vec<f32> {
        self.embedder.transform(text)
    }

    fn nearest(&self, embedding: &[f32], k: usize) -> Vec<(usize, f32)> {
        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(ordinal, vector)| (ordinal, dot(embedding, vector)))
            .collect();
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        scored.truncate(k);
        scored
    }
}

// Vectors are L2-normalized at construction, so the dot product is the
// cosine similarity.
fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::career::{AutomationRisk, CareerRecord, SalaryRange};

    fn record(nco_code: &str, title: &str, description: &str) -> CareerRecord {
        CareerRecord {
            nco_code: nco_code.to_string(),
            family_title: title.to_string(),
            nco_title: title.to_string(),
            riasec_code: "RIC".to_string(),
            job_description: description.to_string(),
            primary_skills: vec![],
            secondary_skills: vec![],
            emerging_skills: vec![],
            salary_range: SalaryRange::default(),
            market_demand_score: 3,
            automation_risk: AutomationRisk::Unspecified,
            industry_growth: None,
            learning_pathway: None,
            geographic_demand: None,
        }
    }

    fn store() -> CatalogueStore {
        CatalogueStore::new(vec![
            record("1", "Software Developer", "writes software and builds applications"),
            record("2", "Staff Nurse", "provides patient care in hospitals"),
            record("3", "Accountant", "prepares financial statements and audits"),
        ])
        .unwrap()
    }

    #[test]
    fn test_nearest_ranks_matching_record_first() {
        let index = BruteForceIndex::build(&store());
        let query = index.embed("patient care nursing hospitals");
        let hits = index.nearest(&query, 3);
        assert_eq!(hits[0].0, 1);
        assert!(hits[0].1 > hits[1].1);
    }

    #[test]
    fn test_nearest_truncates_to_k() {
        let index = BruteForceIndex::build(&store());
        let query = index.embed("software");
        assert_eq!(index.nearest(&query, 2).len(), 2);
    }

    #[test]
    fn test_zero_query_ties_break_by_ordinal() {
        let index = BruteForceIndex::build(&store());
        let query = index.embed("zzz unknown terms only");
        let hits = index.nearest(&query, 3);
        let ordinals: Vec<usize> = hits.iter().map(|h| h.0).collect();
        assert_eq!(ordinals, vec![0, 1, 2]);
        assert!(hits.iter().all(|h| h.1 == 0.0));
    }

    #[test]
    fn test_index_has_vocabulary() {
        let index = BruteForceIndex::build(&store());
        assert!(index.dimensions() > 0);
    }
}
