use serde::{Deserialize, Serialize};

/// Automation exposure classification for a career.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AutomationRisk {
    Low,
    Medium,
    High,
    Unspecified,
}

impl AutomationRisk {
    /// Classifies a free-text risk assessment cell by keyword.
    pub fn from_assessment(text: &str) -> Self {
        let lower = text.to_lowercase();
        if lower.contains("low") {
            AutomationRisk::Low
        } else if lower.contains("high") {
            AutomationRisk::High
        } else if lower.contains("medium") {
            AutomationRisk::Medium
        } else {
            AutomationRisk::Unspecified
        }
    }
}

/// Indicative salary bands, each optional since the source data is sparse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub entry: Option<String>,
    pub mid: Option<String>,
    pub senior: Option<String>,
}

/// One catalogue entry. Loaded at startup, read-only for the process
/// lifetime. `nco_code` is unique across the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRecord {
    pub nco_code: String,
    pub family_title: String,
    pub nco_title: String,
    pub riasec_code: String,
    pub job_description: String,
    pub primary_skills: Vec<String>,
    pub secondary_skills: Vec<String>,
    pub emerging_skills: Vec<String>,
    pub salary_range: SalaryRange,
    pub market_demand_score: u8,
    pub automation_risk: AutomationRisk,
    pub industry_growth: Option<String>,
    pub learning_pathway: Option<String>,
    pub geographic_demand: Option<String>,
}

impl CareerRecord {
    /// Text document the vector index embeds for this record: titles, code,
    /// description, skills, and outlook fields joined into one searchable blob.
    pub fn index_document(&self) -> String {
        let mut parts: Vec<&str> = vec![
            &self.family_title,
            &self.nco_title,
            &self.riasec_code,
            &self.job_description,
        ];
        parts.extend(self.primary_skills.iter().map(String::as_str));
        parts.extend(self.secondary_skills.iter().map(String::as_str));
        parts.extend(self.emerging_skills.iter().map(String::as_str));
        if let Some(growth) = &self.industry_growth {
            parts.push(growth);
        }
        if let Some(pathway) = &self.learning_pathway {
            parts.push(pathway);
        }
        if let Some(geo) = &self.geographic_demand {
            parts.push(geo);
        }
        parts
            .into_iter()
            .filter(|p| !p.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// A scored catalogue entry, produced fresh per recommendation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCareer {
    #[serde(flatten)]
    pub career: CareerRecord,
    pub match_percentage: u8,
    pub matching_parameters: Vec<String>,
}
