use serde::Serialize;

use super::super::domain::{ApplicantProfile, InsuranceLine, PolicyResponse};
use super::config::ScoringConfig;

/// Hard conditions that force lines to `ineligible` whatever their score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IneligibilityReason {
    NoIncome,
    NoVehicle,
    NoHouse,
    AgeAboveLimit,
}

impl IneligibilityReason {
    pub fn lines(self) -> &'static [InsuranceLine] {
        match self {
            IneligibilityReason::NoIncome => &[InsuranceLine::Disability],
            IneligibilityReason::NoVehicle => &[InsuranceLine::Auto],
            IneligibilityReason::NoHouse => &[InsuranceLine::Home],
            IneligibilityReason::AgeAboveLimit => {
                &[InsuranceLine::Disability, InsuranceLine::Life]
            }
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            IneligibilityReason::NoIncome => "no declared income",
            IneligibilityReason::NoVehicle => "no vehicle on record",
            IneligibilityReason::NoHouse => "no house on record",
            IneligibilityReason::AgeAboveLimit => "applicant above the maximum age",
        }
    }
}

pub(crate) fn ineligibility_reasons(
    profile: &ApplicantProfile,
    config: &ScoringConfig,
) -> Vec<IneligibilityReason> {
    let mut reasons = Vec::new();
    if profile.income == 0 {
        reasons.push(IneligibilityReason::NoIncome);
    }
    if profile.vehicle.is_none() {
        reasons.push(IneligibilityReason::NoVehicle);
    }
    if profile.house.is_none() {
        reasons.push(IneligibilityReason::NoHouse);
    }
    if profile.age > config.senior_age_limit {
        reasons.push(IneligibilityReason::AgeAboveLimit);
    }
    reasons
}

pub(crate) fn apply_overrides(response: &mut PolicyResponse, reasons: &[IneligibilityReason]) {
    for reason in reasons {
        for line in reason.lines() {
            response.mark_ineligible(*line);
        }
    }
}
