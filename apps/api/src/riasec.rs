//! RIASEC (Holland code) primitives: the six interest dimensions, code
//! derivation from self-reported scores, and code-vs-code similarity.

use serde::{Deserialize, Serialize};

use crate::models::profile::RiasecScores;

/// One of the six Holland interest dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl Dimension {
    /// Canonical ordering. Ties in code derivation resolve in this order.
    pub const ALL: [Dimension; 6] = [
        Dimension::Realistic,
        Dimension::Investigative,
        Dimension::Artistic,
        Dimension::Social,
        Dimension::Enterprising,
        Dimension::Conventional,
    ];

    pub fn letter(self) -> char {
        match self {
            Dimension::Realistic => 'R',
            Dimension::Investigative => 'I',
            Dimension::Artistic => 'A',
            Dimension::Social => 'S',
            Dimension::Enterprising => 'E',
            Dimension::Conventional => 'C',
        }
    }
}

/// Highest score a user can report for a single dimension.
pub const MAX_SCORE: u8 = 10;

/// Derives the user's three-letter code: dimensions sorted by descending
/// score, ties broken by canonical order (stable sort over `Dimension::ALL`).
pub fn derive_code(scores: &RiasecScores) -> String {
    let mut dims: Vec<(Dimension, u8)> = Dimension::ALL
        .iter()
        .map(|&d| (d, scores.get(d)))
        .collect();
    dims.sort_by(|a, b| b.1.cmp(&a.1));
    dims.iter().take(3).map(|(d, _)| d.letter()).collect()
}

/// True for a 2-3 letter code drawn from {R,I,A,S,E,C} with no repeats.
pub fn is_valid_code(code: &str) -> bool {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() < 2 || chars.len() > 3 {
        return false;
    }
    let mut seen = Vec::new();
    for c in &chars {
        let upper = c.to_ascii_uppercase();
        if !"RIASEC".contains(upper) || seen.contains(&upper) {
            return false;
        }
        seen.push(upper);
    }
    true
}

/// Uppercases, strips whitespace, and truncates a raw code cell to 3 letters.
pub fn normalize_code(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .take(3)
        .collect()
}

/// Position-weighted similarity between the user's derived code and a career
/// code, on a 0-100 scale. Same-rank letters outrank shared-anywhere letters;
/// the highest matching rung wins.
pub fn code_similarity(user_code: &str, career_code: &str) -> f64 {
    let user: Vec<char> = normalize_code(user_code).chars().collect();
    let career: Vec<char> = normalize_code(career_code).chars().collect();

    if user.is_empty() || career.is_empty() {
        return 0.0;
    }
    if user == career {
        return 100.0;
    }

    let user_two = &user[..user.len().min(2)];
    let career_two = &career[..career.len().min(2)];
    if user.len() >= 2 && career.len() >= 2 && user_two == career_two {
        return 95.0;
    }

    let first_matches = user[0] == career[0];
    if first_matches && user.len() >= 2 && career.contains(&user[1]) {
        return 90.0;
    }
    if first_matches && user[1..].iter().any(|c| career.contains(c)) {
        return 85.0;
    }

    if user_two.iter().all(|c| career.contains(c)) {
        let first_pos = career.iter().position(|&c| c == user_two[0]);
        let second_pos = user_two
            .get(1)
            .and_then(|t| career.iter().position(|&c| c == *t));
        if let (Some(fp), Some(sp)) = (first_pos, second_pos) {
            if sp > fp {
                return 85.0;
            }
        }
        return 80.0;
    }

    if career.contains(&user[0]) {
        return 75.0;
    }

    let shared: Vec<char> = user.iter().copied().filter(|c| career.contains(c)).collect();
    if shared.len() >= 2 {
        let positions: Vec<usize> = shared
            .iter()
            .filter_map(|c| career.iter().position(|&x| x == *c))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        if positions == sorted {
            return 75.0;
        }
        return 70.0;
    }
    if shared.len() == 1 {
        return 60.0;
    }

    // Completely disjoint codes still score a floor, not zero.
    30.0
}
