use serde::Serialize;

use super::super::domain::{
    ApplicantProfile, InsuranceLine, LineScores, MaritalStatus, OwnershipStatus,
};
use super::config::ScoringConfig;

/// Adjustment rules in the order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentRule {
    Age,
    Income,
    Mortgage,
    Dependents,
    MaritalStatus,
    VehicleAge,
}

/// Trace entry for a rule that fired, with the scores it left behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedRule {
    pub rule: AdjustmentRule,
    pub notes: String,
    pub scores_after: LineScores,
}

/// Runs every adjustment rule against `scores`, in order. Each rule clamps the
/// lines it touches before the next one reads them.
pub(crate) fn apply_adjustments(
    profile: &ApplicantProfile,
    config: &ScoringConfig,
    evaluation_year: i32,
    scores: &mut LineScores,
) -> Vec<AppliedRule> {
    let mut applied = Vec::new();
    let mut record = |rule: AdjustmentRule, notes: String, scores: &LineScores| {
        applied.push(AppliedRule {
            rule,
            notes,
            scores_after: *scores,
        });
    };

    if profile.age < config.young_age_limit {
        scores.deduct_all(2);
        record(
            AdjustmentRule::Age,
            format!(
                "age {} under {}: -2 on all lines",
                profile.age, config.young_age_limit
            ),
            scores,
        );
    } else if profile.age <= config.middle_age_limit {
        scores.deduct_all(1);
        record(
            AdjustmentRule::Age,
            format!(
                "age {} within {}-{}: -1 on all lines",
                profile.age, config.young_age_limit, config.middle_age_limit
            ),
            scores,
        );
    }

    if profile.income > config.high_income_threshold {
        scores.deduct_all(1);
        record(
            AdjustmentRule::Income,
            format!(
                "income {} above {}: -1 on all lines",
                profile.income, config.high_income_threshold
            ),
            scores,
        );
    }

    if matches!(
        profile.house.map(|house| house.ownership_status),
        Some(OwnershipStatus::Mortgaged)
    ) {
        scores.add(&[InsuranceLine::Home, InsuranceLine::Disability], 1);
        record(
            AdjustmentRule::Mortgage,
            "mortgaged house: +1 home and disability".to_string(),
            scores,
        );
    }

    if profile.dependents > 0 {
        scores.add(&[InsuranceLine::Disability, InsuranceLine::Life], 1);
        record(
            AdjustmentRule::Dependents,
            format!(
                "{} dependent(s): +1 disability and life",
                profile.dependents
            ),
            scores,
        );
    }

    match profile.marital_status {
        MaritalStatus::Married => {
            scores.add(&[InsuranceLine::Life], 1);
            scores.deduct(&[InsuranceLine::Disability], 1);
            record(
                AdjustmentRule::MaritalStatus,
                "married: +1 life, -1 disability".to_string(),
                scores,
            );
        }
        MaritalStatus::Single => {}
    }

    if let Some(vehicle) = profile.vehicle {
        let cutoff = evaluation_year - config.new_vehicle_window_years;
        if vehicle.year >= cutoff {
            scores.add(&[InsuranceLine::Auto], 1);
            record(
                AdjustmentRule::VehicleAge,
                format!("vehicle from {} on or after {cutoff}: +1 auto", vehicle.year),
                scores,
            );
        }
    }

    applied
}
