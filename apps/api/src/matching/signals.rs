//! Demographic fit signals, each scored on a 0-100 scale.
//!
//! Scores are deliberately generous at the floor: a missing or unmatched
//! attribute degrades toward a neutral score instead of zeroing a career
//! out, so one sparse field never dominates the composite.

use crate::models::career::CareerRecord;
use crate::models::profile::OccupationStage;

const EDUCATION_KEYWORDS: &[(&str, &[&str])] = &[
    ("high school", &["school", "high school", "secondary", "basic"]),
    ("diploma", &["diploma", "certificate", "vocational"]),
    ("bachelor", &["bachelor", "undergraduate", "degree", "college"]),
    ("master", &["master", "postgraduate", "graduate"]),
    ("phd", &["phd", "doctorate", "doctoral"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExperienceBand {
    Entry,
    Mid,
    Senior,
}

impl ExperienceBand {
    fn keywords(self) -> &'static [&'static str] {
        match self {
            ExperienceBand::Entry => &["entry", "junior", "trainee", "associate", "beginner"],
            ExperienceBand::Mid => &["mid", "middle", "experienced", "professional"],
            ExperienceBand::Senior => &["senior", "lead", "principal", "manager", "director", "head"],
        }
    }
}

/// Matches the user's education level against the career's learning pathway.
/// Same level with matching pathway keywords scores 100; same level without
/// pathway evidence 60; unrecognized levels default to 70.
pub fn education_score(user_education: &str, learning_pathway: Option<&str>) -> f64 {
    let user = user_education.to_lowercase();
    let context = learning_pathway.unwrap_or("").to_lowercase();
    for (level, keywords) in EDUCATION_KEYWORDS {
        if user.contains(level) {
            if keywords.iter().any(|k| context.contains(k)) {
                return 100.0;
            }
            return 60.0;
        }
    }
    70.0
}

/// Matches the user's experience band against level keywords in the career
/// title and description. Students and fresh graduates always land in the
/// entry band regardless of reported years. A career with no level keywords
/// is treated as flexible (80), never a penalty.
pub fn experience_score(
    stage: OccupationStage,
    experience_years: u32,
    record: &CareerRecord,
) -> f64 {
    let band = if stage.is_entry_level() || experience_years <= 2 {
        ExperienceBand::Entry
    } else if experience_years <= 5 {
        ExperienceBand::Mid
    } else {
        ExperienceBand::Senior
    };

    let haystack = format!(
        "{} {} {}",
        record.nco_title.to_lowercase(),
        record.family_title.to_lowercase(),
        record.job_description.to_lowercase()
    );
    if band.keywords().iter().any(|k| haystack.contains(k)) {
        return 100.0;
    }
    80.0
}

const RELATED_FIELDS: &[(&str, &[&str])] = &[
    ("technology", &["it", "software", "computer", "tech", "digital"]),
    ("healthcare", &["medical", "health", "hospital", "clinical"]),
    ("finance", &["banking", "accounting", "financial", "investment"]),
    ("education", &["teaching", "academic", "learning", "training"]),
    ("engineering", &["technical", "manufacturing", "construction"]),
];

/// Matches the user's current field against the career's title domain.
/// No stated field is neutral-good (80): field preference refines, it never
/// gates.
pub fn field_score(current_field: Option<&str>, record: &CareerRecord) -> f64 {
    let field = match current_field {
        Some(f) if !f.trim().is_empty() => f.trim().to_lowercase(),
        _ => return 80.0,
    };
    let domain = format!(
        "{} {}",
        record.family_title.to_lowercase(),
        record.nco_title.to_lowercase()
    );
    if domain.contains(&field) {
        return 100.0;
    }
    if related_fields(&field).iter().any(|rel| domain.contains(rel)) {
        return 85.0;
    }
    50.0
}

fn related_fields(field: &str) -> Vec<&'static str> {
    for (main_field, related) in RELATED_FIELDS {
        if main_field.contains(field) || related.iter().any(|rel| field.contains(rel)) {
            let mut all: Vec<&'static str> = related.to_vec();
            all.push(main_field);
            return all;
        }
    }
    Vec::new()
}

/// Market demand score 1-5 stretched to 0-100, capped.
pub fn demand_score(market_demand_score: u8) -> f64 {
    (f64::from(market_demand_score) * 20.0).min(100.0)
}
