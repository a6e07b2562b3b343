use serde::{Deserialize, Serialize};

use crate::riasec::Dimension;

/// Where the user currently sits in their working life.
/// Drives the experience band used by the matching engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupationStage {
    Student,
    FreshGraduate,
    WorkingProfessional,
    CareerChanger,
}

impl OccupationStage {
    pub fn label(self) -> &'static str {
        match self {
            OccupationStage::Student => "student",
            OccupationStage::FreshGraduate => "fresh graduate",
            OccupationStage::WorkingProfessional => "working professional",
            OccupationStage::CareerChanger => "career changer",
        }
    }

    /// Students and fresh graduates are entry-level by definition and must
    /// carry `experience_years == 0`.
    pub fn is_entry_level(self) -> bool {
        matches!(self, OccupationStage::Student | OccupationStage::FreshGraduate)
    }
}

/// Self-reported interest scores, one per dimension, each in 0-10.
/// Wire keys are the single dimension letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiasecScores {
    #[serde(rename = "R")]
    pub realistic: u8,
    #[serde(rename = "I")]
    pub investigative: u8,
    #[serde(rename = "A")]
    pub artistic: u8,
    #[serde(rename = "S")]
    pub social: u8,
    #[serde(rename = "E")]
    pub enterprising: u8,
    #[serde(rename = "C")]
    pub conventional: u8,
}

impl RiasecScores {
    pub fn get(&self, dim: Dimension) -> u8 {
        match dim {
            Dimension::Realistic => self.realistic,
            Dimension::Investigative => self.investigative,
            Dimension::Artistic => self.artistic,
            Dimension::Social => self.social,
            Dimension::Enterprising => self.enterprising,
            Dimension::Conventional => self.conventional,
        }
    }

    /// Dimensions whose score exceeds the 0-10 range. Empty means valid.
    pub fn out_of_range(&self) -> Vec<Dimension> {
        Dimension::ALL
            .iter()
            .filter(|&&d| self.get(d) > crate::riasec::MAX_SCORE)
            .copied()
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u8,
    pub occupation_stage: OccupationStage,
    pub education_level: String,
    #[serde(default)]
    pub current_field: Option<String>,
    #[serde(default)]
    pub experience_years: u32,
    pub riasec_scores: RiasecScores,
}
