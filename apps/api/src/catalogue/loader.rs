//! Catalogue ingest: CSV rows into validated `CareerRecord`s.
//!
//! A load failure here is fatal at process start; requests never observe a
//! partially loaded catalogue.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::catalogue::store::CatalogueStore;
use crate::models::career::{AutomationRisk, CareerRecord, SalaryRange};
use crate::riasec;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to read catalogue file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalogue row: {0}")]
    Csv(#[from] csv::Error),

    #[error("catalogue file contains no career records")]
    Empty,

    #[error("duplicate nco_code in catalogue: {0}")]
    DuplicateNcoCode(String),

    #[error("career {nco_code} has invalid RIASEC code '{code}'")]
    InvalidRiasecCode { nco_code: String, code: String },

    #[error("career {nco_code} has invalid {field}: '{value}'")]
    InvalidField {
        nco_code: String,
        field: &'static str,
        value: String,
    },
}

/// Raw CSV row. All cells come in as strings; conversion happens in
/// `into_record`.
#[derive(Debug, Deserialize)]
struct RawCareerRow {
    nco_code: String,
    family_title: String,
    nco_title: String,
    riasec_code: String,
    job_description: String,
    #[serde(default)]
    primary_skills: String,
    #[serde(default)]
    secondary_skills: String,
    #[serde(default)]
    emerging_skills: String,
    market_demand_score: String,
    #[serde(default)]
    salary_range: String,
    #[serde(default)]
    industry_growth: String,
    #[serde(default)]
    learning_pathway: String,
    #[serde(default)]
    automation_risk: String,
    #[serde(default)]
    geographic_demand: String,
}

impl RawCareerRow {
    fn into_record(self) -> Result<CareerRecord, CatalogueError> {
        let riasec_code = riasec::normalize_code(&self.riasec_code);
        if !riasec::is_valid_code(&riasec_code) {
            return Err(CatalogueError::InvalidRiasecCode {
                nco_code: self.nco_code,
                code: self.riasec_code,
            });
        }

        let demand: f64 = self.market_demand_score.trim().parse().map_err(|_| {
            CatalogueError::InvalidField {
                nco_code: self.nco_code.clone(),
                field: "market_demand_score",
                value: self.market_demand_score.clone(),
            }
        })?;
        let market_demand_score = (demand.round() as i64).clamp(1, 5) as u8;

        Ok(CareerRecord {
            nco_code: self.nco_code.trim().to_string(),
            family_title: self.family_title.trim().to_string(),
            nco_title: self.nco_title.trim().to_string(),
            riasec_code,
            job_description: self.job_description.trim().to_string(),
            primary_skills: parse_skills(&self.primary_skills),
            secondary_skills: parse_skills(&self.secondary_skills),
            emerging_skills: parse_skills(&self.emerging_skills),
            salary_range: parse_salary_range(&self.salary_range),
            market_demand_score,
            automation_risk: AutomationRisk::from_assessment(&self.automation_risk),
            industry_growth: non_empty(&self.industry_growth),
            learning_pathway: non_empty(&self.learning_pathway),
            geographic_demand: non_empty(&self.geographic_demand),
        })
    }
}

/// Loads and validates the catalogue from a CSV file.
pub fn load_catalogue(path: &Path) -> Result<CatalogueStore, CatalogueError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize::<RawCareerRow>() {
        records.push(row?.into_record()?);
    }
    if records.is_empty() {
        return Err(CatalogueError::Empty);
    }
    info!("Loaded {} career records from {}", records.len(), path.display());
    CatalogueStore::new(records)
}

/// Splits a comma-separated skills cell into trimmed, non-empty entries.
fn parse_skills(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses an "entry: X, mid: Y, senior: Z" salary cell. Unlabeled or
/// malformed parts are skipped rather than failing the row.
fn parse_salary_range(cell: &str) -> SalaryRange {
    let mut range = SalaryRange::default();
    for part in cell.split(',') {
        if let Some((level, value)) = part.split_once(':') {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match level.trim().to_lowercase().as_str() {
                "entry" => range.entry = Some(value.to_string()),
                "mid" => range.mid = Some(value.to_string()),
                "senior" => range.senior = Some(value.to_string()),
                _ => {}
            }
        }
    }
    range
}

fn non_empty(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
