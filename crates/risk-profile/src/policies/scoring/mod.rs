mod config;
mod eligibility;
mod rules;

pub use config::ScoringConfig;
pub use eligibility::IneligibilityReason;
pub use rules::{AdjustmentRule, AppliedRule};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use super::domain::{ApplicantProfile, LineScores, PolicyResponse};

/// Stateless engine turning a validated profile into per-line tiers.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    config: ScoringConfig,
}

impl RiskEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Final tiers only. `evaluated_on` anchors the vehicle-age rule.
    pub fn assess(&self, profile: &ApplicantProfile, evaluated_on: NaiveDate) -> PolicyResponse {
        self.evaluate(profile, evaluated_on).response
    }

    /// Full evaluation including the rule trail.
    pub fn evaluate(&self, profile: &ApplicantProfile, evaluated_on: NaiveDate) -> RiskAssessment {
        let base_score = profile.base_score();
        debug!(base_score, answers = ?profile.risk_answers, "computed base score");

        let mut scores = LineScores::uniform(base_score);
        let adjustments =
            rules::apply_adjustments(profile, &self.config, evaluated_on.year(), &mut scores);
        debug!(?scores, rules = adjustments.len(), "risk scores after rules");

        let scored_tiers = PolicyResponse::from_scores(&scores);
        debug!(?scored_tiers, "mapped scores to tiers");

        let ineligibility = eligibility::ineligibility_reasons(profile, &self.config);
        let mut response = scored_tiers;
        eligibility::apply_overrides(&mut response, &ineligibility);
        debug!(?response, ?ineligibility, "policy response after ineligibility");

        RiskAssessment {
            evaluated_on,
            base_score,
            adjustments,
            scores,
            scored_tiers,
            ineligibility,
            response,
        }
    }
}

/// Evaluation output with enough detail to audit how each tier was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub evaluated_on: NaiveDate,
    pub base_score: i32,
    pub adjustments: Vec<AppliedRule>,
    pub scores: LineScores,
    /// Tiers before ineligibility overrides.
    pub scored_tiers: PolicyResponse,
    pub ineligibility: Vec<IneligibilityReason>,
    pub response: PolicyResponse,
}
