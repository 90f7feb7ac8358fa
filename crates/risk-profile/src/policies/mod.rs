//! Risk profile intake, scoring, and the HTTP endpoint serving them.
//!
//! A request flows through the [`IntakeGuard`] (shape validation), then the
//! [`RiskEngine`] (base score, ordered adjustment rules, tier mapping, and
//! ineligibility overrides). [`PolicyService`] wires both to a [`Clock`] and
//! [`policy_router`] exposes the service over HTTP.

pub mod clock;
pub mod domain;
pub mod intake;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::{
    ApplicantProfile, House, InsuranceLine, LineScores, MaritalStatus, OwnershipStatus,
    PolicyResponse, RiskTier, Vehicle,
};
pub use intake::{IntakeGuard, ValidationError};
pub use router::policy_router;
pub use scoring::{
    AdjustmentRule, AppliedRule, IneligibilityReason, RiskAssessment, RiskEngine, ScoringConfig,
};
pub use service::PolicyService;
