//! The matching engine: scores every catalogue record against a profile and
//! returns the top-K, best match first.
//!
//! Pure over its inputs. The engine never mutates the catalogue or the
//! profile, so calling it twice with the same arguments yields identical
//! output.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalogue::VectorIndex;
use crate::matching::signals;
use crate::models::career::{CareerRecord, RankedCareer};
use crate::models::profile::UserProfile;
use crate::riasec;

/// Relative weight of each composite signal. The composite divides by the
/// sum of active weights, so only the ratios matter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWeights {
    pub riasec: f64,
    pub semantic: f64,
    pub education: f64,
    pub experience: f64,
    pub field: f64,
    pub demand: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            riasec: 50.0,
            semantic: 10.0,
            education: 20.0,
            experience: 15.0,
            field: 10.0,
            demand: 5.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid profile: {0}")]
    InvalidProfile(String),
}

pub struct MatchingEngine {
    weights: MatchWeights,
    index: Option<Arc<dyn VectorIndex>>,
    min_match_percentage: u8,
}

impl MatchingEngine {
    /// `index: None` degrades scoring to the discrete signals only.
    pub fn new(
        weights: MatchWeights,
        index: Option<Arc<dyn VectorIndex>>,
        min_match_percentage: u8,
    ) -> Self {
        Self {
            weights,
            index,
            min_match_percentage,
        }
    }

    /// Scores the whole catalogue and returns at most `top_k` careers sorted
    /// by descending match percentage, ties broken by ascending `nco_code`.
    /// An empty catalogue returns an empty list.
    pub fn recommend(
        &self,
        profile: &UserProfile,
        catalogue: &[CareerRecord],
        top_k: usize,
    ) -> Result<Vec<RankedCareer>, MatchError> {
        let bad = profile.riasec_scores.out_of_range();
        if !bad.is_empty() {
            let letters: String = bad.iter().map(|d| d.letter()).collect();
            return Err(MatchError::InvalidProfile(format!(
                "RIASEC scores must be between 0 and 10 (out of range: {letters})"
            )));
        }
        if catalogue.is_empty() {
            return Ok(Vec::new());
        }

        let user_code = riasec::derive_code(&profile.riasec_scores);
        let semantic = self.semantic_similarities(profile, &user_code, catalogue.len());

        let mut ranked: Vec<RankedCareer> = catalogue
            .iter()
            .enumerate()
            .map(|(ordinal, record)| {
                let sim = semantic.as_ref().map(|sims| sims[ordinal]);
                let (match_percentage, matching_parameters) =
                    self.score_record(profile, &user_code, record, sim);
                RankedCareer {
                    career: record.clone(),
                    match_percentage,
                    matching_parameters,
                }
            })
            .filter(|r| r.match_percentage >= self.min_match_percentage)
            .collect();

        ranked.sort_by(|a, b| {
            b.match_percentage
                .cmp(&a.match_percentage)
                .then_with(|| a.career.nco_code.cmp(&b.career.nco_code))
        });
        ranked.truncate(top_k);
        Ok(ranked)
    }

    /// Cosine similarity per catalogue ordinal, or None when no index is
    /// configured (degraded mode).
    fn semantic_similarities(
        &self,
        profile: &UserProfile,
        user_code: &str,
        catalogue_len: usize,
    ) -> Option<Vec<f32>> {
        let index = self.index.as_ref()?;
        let query = profile_query_document(profile, user_code);
        let embedding = index.embed(&query);
        let mut similarities = vec![0.0_f32; catalogue_len];
        for (ordinal, sim) in index.nearest(&embedding, catalogue_len) {
            if ordinal < catalogue_len {
                similarities[ordinal] = sim;
            }
        }
        Some(similarities)
    }

    /// Composite score for one record plus the human-readable reasons that
    /// cleared their materiality thresholds, in fixed order: RIASEC,
    /// semantic, education, experience, field, demand.
    fn score_record(
        &self,
        profile: &UserProfile,
        user_code: &str,
        record: &CareerRecord,
        semantic: Option<f32>,
    ) -> (u8, Vec<String>) {
        let w = &self.weights;
        let mut parameters = Vec::new();
        let mut total = 0.0;
        let mut weight_sum = 0.0;

        let riasec_score = riasec::code_similarity(user_code, &record.riasec_code);
        if riasec_score >= 90.0 {
            parameters.push(format!("RIASEC Code: Excellent match ({})", record.riasec_code));
        } else if riasec_score >= 70.0 {
            parameters.push(format!("RIASEC Code: Good match ({})", record.riasec_code));
        } else if riasec_score >= 50.0 {
            parameters.push(format!("RIASEC Code: Partial match ({})", record.riasec_code));
        }
        total += riasec_score * w.riasec;
        weight_sum += w.riasec;

        if let Some(sim) = semantic {
            let semantic_score = (f64::from(sim) * 100.0).clamp(0.0, 100.0);
            if sim >= 0.5 {
                parameters.push("Semantic Profile: Strong alignment".to_string());
            } else if sim >= 0.25 {
                parameters.push("Semantic Profile: Related background".to_string());
            }
            total += semantic_score * w.semantic;
            weight_sum += w.semantic;
        }

        let education = signals::education_score(
            &profile.education_level,
            record.learning_pathway.as_deref(),
        );
        if education >= 80.0 {
            parameters.push("Education Level: Good match".to_string());
        } else if education >= 50.0 {
            parameters.push("Education Level: Partial match".to_string());
        }
        total += education * w.education;
        weight_sum += w.education;

        let experience = signals::experience_score(
            profile.occupation_stage,
            profile.experience_years,
            record,
        );
        if experience >= 80.0 {
            parameters.push("Experience Level: Good match".to_string());
        }
        total += experience * w.experience;
        weight_sum += w.experience;

        let field = signals::field_score(profile.current_field.as_deref(), record);
        if field >= 80.0 {
            parameters.push("Field/Industry: Good match".to_string());
        } else if field >= 50.0 && profile.current_field.is_some() {
            parameters.push("Field/Industry: Related field".to_string());
        }
        total += field * w.field;
        weight_sum += w.field;

        let demand = signals::demand_score(record.market_demand_score);
        if demand > 70.0 {
            parameters.push("Market Demand: High".to_string());
        }
        total += demand * w.demand;
        weight_sum += w.demand;

        let mut percentage = if weight_sum > 0.0 {
            total / weight_sum
        } else {
            0.0
        };
        // Strong code alignment dominates: boost, then clamp
        if riasec_score >= 80.0 {
            percentage *= 1.2;
        }
        let percentage = percentage.round().clamp(0.0, 100.0) as u8;

        (percentage, parameters)
    }
}

/// User-side query document embedded against the catalogue index.
fn profile_query_document(profile: &UserProfile, user_code: &str) -> String {
    let mut parts = vec![
        format!("Career for {}", profile.occupation_stage.label()),
        format!("Education: {}", profile.education_level),
        format!("RIASEC personality: {user_code}"),
        "Skills and job preferences matching personality and background".to_string(),
    ];
    if let Some(field) = &profile.current_field {
        if !field.trim().is_empty() {
            parts.push(format!("Field: {field}"));
        }
    }
    parts.join(". ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{BruteForceIndex, CatalogueStore};
    use crate::models::career::{AutomationRisk, SalaryRange};
    use crate::models::profile::{OccupationStage, RiasecScores};

    fn career(nco_code: &str, riasec_code: &str, title: &str, demand: u8) -> CareerRecord {
        CareerRecord {
            nco_code: nco_code.to_string(),
            family_title: format!("{title} Family"),
            nco_title: title.to_string(),
            riasec_code: riasec_code.to_string(),
            job_description: format!("Works as a {title}."),
            primary_skills: vec!["analysis".to_string()],
            secondary_skills: vec![],
            emerging_skills: vec![],
            salary_range: SalaryRange::default(),
            market_demand_score: demand,
            automation_risk: AutomationRisk::Unspecified,
            industry_growth: None,
            learning_pathway: Some("Bachelor degree".to_string()),
            geographic_demand: None,
        }
    }

    fn profile(scores: RiasecScores) -> UserProfile {
        UserProfile {
            name: "Asha".to_string(),
            age: 24,
            occupation_stage: OccupationStage::FreshGraduate,
            education_level: "Bachelor's Degree".to_string(),
            current_field: None,
            experience_years: 0,
            riasec_scores: scores,
        }
    }

    fn rie_scores() -> RiasecScores {
        RiasecScores {
            realistic: 9,
            investigative: 8,
            artistic: 2,
            social: 1,
            enterprising: 3,
            conventional: 2,
        }
    }

    fn engine() -> MatchingEngine {
        MatchingEngine::new(MatchWeights::default(), None, 0)
    }

    #[test]
    fn test_out_of_range_score_is_invalid_profile() {
        let mut p = profile(rie_scores());
        p.riasec_scores.realistic = 11;
        let err = engine().recommend(&p, &[career("1", "RIE", "Fitter", 3)], 5).unwrap_err();
        assert!(matches!(err, MatchError::InvalidProfile(_)));
    }

    #[test]
    fn test_empty_catalogue_returns_empty() {
        let result = engine().recommend(&profile(rie_scores()), &[], 5).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_results_sorted_descending_and_capped() {
        let catalogue = vec![
            career("3", "ASC", "Painter", 2),
            career("1", "RIE", "Fitter", 5),
            career("2", "RIA", "Mechanic", 4),
            career("4", "SEC", "Teacher", 3),
        ];
        let result = engine().recommend(&profile(rie_scores()), &catalogue, 3).unwrap();
        assert_eq!(result.len(), 3);
        assert!(result.windows(2).all(|w| w[0].match_percentage >= w[1].match_percentage));
        assert_eq!(result[0].career.nco_code, "1");
    }

    #[test]
    fn test_percentage_always_in_bounds() {
        let catalogue = vec![
            career("1", "RIE", "Fitter", 5),
            career("2", "ASC", "Painter", 1),
        ];
        let result = engine().recommend(&profile(rie_scores()), &catalogue, 5).unwrap();
        for ranked in result {
            assert!(ranked.match_percentage <= 100);
        }
    }

    #[test]
    fn test_idempotent_for_same_inputs() {
        let catalogue = vec![
            career("1", "RIE", "Fitter", 5),
            career("2", "RIA", "Mechanic", 4),
        ];
        let p = profile(rie_scores());
        let first = engine().recommend(&p, &catalogue, 5).unwrap();
        let second = engine().recommend(&p, &catalogue, 5).unwrap();
        let codes = |r: &[RankedCareer]| {
            r.iter()
                .map(|c| (c.career.nco_code.clone(), c.match_percentage))
                .collect::<Vec<_>>()
        };
        assert_eq!(codes(&first), codes(&second));
    }

    #[test]
    fn test_equal_scores_tie_break_by_nco_code() {
        // Identical records except for code: identical percentages
        let catalogue = vec![
            career("9999.0200", "RIE", "Fitter", 5),
            career("9999.0100", "RIE", "Fitter", 5),
        ];
        let result = engine().recommend(&profile(rie_scores()), &catalogue, 5).unwrap();
        assert_eq!(result[0].career.nco_code, "9999.0100");
        assert_eq!(result[1].career.nco_code, "9999.0200");
        assert_eq!(result[0].match_percentage, result[1].match_percentage);
    }

    #[test]
    fn test_degraded_mode_still_produces_results() {
        // No index configured: recommendations still come back
        let catalogue = vec![career("1", "RIE", "Fitter", 5)];
        let result = engine().recommend(&profile(rie_scores()), &catalogue, 5).unwrap();
        assert_eq!(result.len(), 1);
        assert!(result[0].match_percentage > 0);
    }

    #[test]
    fn test_with_index_produces_results() {
        let records = vec![
            career("1", "RIE", "Fitter", 5),
            career("2", "SEC", "Teacher", 3),
        ];
        let store = CatalogueStore::new(records.clone()).unwrap();
        let index: Arc<dyn VectorIndex> = Arc::new(BruteForceIndex::build(&store));
        let engine = MatchingEngine::new(MatchWeights::default(), Some(index), 0);
        let result = engine.recommend(&profile(rie_scores()), &records, 5).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].career.nco_code, "1");
    }

    #[test]
    fn test_matching_parameters_ordered_riasec_first() {
        let catalogue = vec![career("1", "RIE", "Junior Fitter", 5)];
        let result = engine().recommend(&profile(rie_scores()), &catalogue, 5).unwrap();
        let params = &result[0].matching_parameters;
        assert!(params[0].starts_with("RIASEC Code:"), "got {params:?}");
        // Education, experience, demand all clear their thresholds here
        assert!(params.iter().any(|p| p.starts_with("Education Level:")));
        assert!(params.iter().any(|p| p.starts_with("Experience Level:")));
        assert!(params.iter().any(|p| p == "Market Demand: High"));
        let edu_pos = params.iter().position(|p| p.starts_with("Education")).unwrap();
        let demand_pos = params.iter().position(|p| p.starts_with("Market")).unwrap();
        assert!(edu_pos < demand_pos);
    }

    #[test]
    fn test_exact_code_match_scores_high() {
        let catalogue = vec![career("1", "RIE", "Junior Fitter", 5)];
        let result = engine().recommend(&profile(rie_scores()), &catalogue, 5).unwrap();
        // riasec 100, education 100, experience 100, field 80, demand 100,
        // weighted then boosted 1.2x and clamped
        assert_eq!(result[0].match_percentage, 100);
    }

    #[test]
    fn test_min_match_floor_filters() {
        let engine = MatchingEngine::new(MatchWeights::default(), None, 95);
        let catalogue = vec![
            career("1", "RIE", "Junior Fitter", 5),
            career("2", "ASC", "Painter", 1),
        ];
        let result = engine.recommend(&profile(rie_scores()), &catalogue, 5).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].career.nco_code, "1");
    }

    #[test]
    fn test_fresh_graduate_not_penalized_on_entry_careers() {
        let entry = career("1", "RIE", "Junior Trainee Fitter", 3);
        let senior = career("2", "RIE", "Senior Fitter Manager", 3);
        let result = engine()
            .recommend(&profile(rie_scores()), &[entry, senior], 5)
            .unwrap();
        let entry_pct = result.iter().find(|r| r.career.nco_code == "1").unwrap().match_percentage;
        let senior_pct = result.iter().find(|r| r.career.nco_code == "2").unwrap().match_percentage;
        assert!(entry_pct >= senior_pct);
    }

    #[test]
    fn test_query_document_mentions_profile_attributes() {
        let mut p = profile(rie_scores());
        p.current_field = Some("technology".to_string());
        let doc = profile_query_document(&p, "RIE");
        assert!(doc.contains("fresh graduate"));
        assert!(doc.contains("RIE"));
        assert!(doc.contains("technology"));
        assert!(doc.contains("Bachelor's Degree"));
    }
}
