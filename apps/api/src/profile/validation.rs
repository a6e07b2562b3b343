//! Registration-time profile validation. The engine re-checks score ranges
//! on every call; everything else is enforced once here at the boundary.

use crate::models::profile::UserProfile;

const MIN_AGE: u8 = 10;
const MAX_AGE: u8 = 100;
const MAX_EXPERIENCE_YEARS: u32 = 60;

/// Collects every problem with a submitted profile. Empty means valid.
pub fn validate_registration(profile: &UserProfile) -> Vec<String> {
    let mut issues = Vec::new();

    if profile.name.trim().is_empty() {
        issues.push("name must not be empty".to_string());
    }
    if profile.age < MIN_AGE || profile.age > MAX_AGE {
        issues.push(format!("age must be between {MIN_AGE} and {MAX_AGE}"));
    }
    if profile.education_level.trim().is_empty() {
        issues.push("education_level must not be empty".to_string());
    }

    for dim in profile.riasec_scores.out_of_range() {
        issues.push(format!(
            "RIASEC score {} must be between 0 and 10",
            dim.letter()
        ));
    }

    if profile.occupation_stage.is_entry_level() && profile.experience_years != 0 {
        issues.push(format!(
            "experience_years must be 0 for a {}",
            profile.occupation_stage.label()
        ));
    }
    if profile.experience_years > MAX_EXPERIENCE_YEARS {
        issues.push(format!(
            "experience_years must not exceed {MAX_EXPERIENCE_YEARS}"
        ));
    }

    issues
}
