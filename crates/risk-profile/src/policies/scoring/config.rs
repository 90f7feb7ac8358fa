use serde::{Deserialize, Serialize};

/// Thresholds the adjustment and eligibility rules compare against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Applicants younger than this lose two points on every line.
    pub young_age_limit: u32,
    /// Applicants from `young_age_limit` up to and including this age lose one point.
    pub middle_age_limit: u32,
    pub high_income_threshold: u64,
    /// Life and disability become ineligible strictly above this age.
    pub senior_age_limit: u32,
    pub new_vehicle_window_years: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            young_age_limit: 30,
            middle_age_limit: 40,
            high_income_threshold: 200_000,
            senior_age_limit: 60,
            new_vehicle_window_years: 5,
        }
    }
}
