use std::sync::Arc;

use tracing::warn;

use super::clock::Clock;
use super::domain::{ApplicantProfile, PolicyResponse};
use super::intake::{IntakeGuard, ValidationError};
use super::scoring::{RiskAssessment, RiskEngine, ScoringConfig};

/// Service composing the intake guard, scoring engine, and evaluation clock.
pub struct PolicyService<C> {
    guard: IntakeGuard,
    engine: RiskEngine,
    clock: Arc<C>,
}

impl<C> PolicyService<C>
where
    C: Clock + 'static,
{
    pub fn new(clock: Arc<C>, config: ScoringConfig) -> Self {
        Self::with_guard(IntakeGuard::default(), clock, config)
    }

    pub fn with_guard(guard: IntakeGuard, clock: Arc<C>, config: ScoringConfig) -> Self {
        Self {
            guard,
            engine: RiskEngine::new(config),
            clock,
        }
    }

    pub fn guard(&self) -> &IntakeGuard {
        &self.guard
    }

    pub fn engine(&self) -> &RiskEngine {
        &self.engine
    }

    /// Score an already validated profile as of the clock's current date.
    pub fn assess(&self, profile: &ApplicantProfile) -> PolicyResponse {
        self.engine.assess(profile, self.clock.today())
    }

    pub fn evaluate(&self, profile: &ApplicantProfile) -> RiskAssessment {
        self.engine.evaluate(profile, self.clock.today())
    }

    /// Validate a raw request body and score it. The engine never runs on a rejected body.
    pub fn assess_json(&self, body: &[u8]) -> Result<PolicyResponse, ValidationError> {
        let profile = self.admit(body)?;
        Ok(self.assess(&profile))
    }

    /// Like `assess_json`, but keeps the rule trail and pre-override tiers.
    pub fn evaluate_json(&self, body: &[u8]) -> Result<RiskAssessment, ValidationError> {
        let profile = self.admit(body)?;
        Ok(self.evaluate(&profile))
    }

    fn admit(&self, body: &[u8]) -> Result<ApplicantProfile, ValidationError> {
        self.guard.profile_from_slice(body).map_err(|err| {
            warn!(
                error = %err,
                field = err.field().unwrap_or("body"),
                "rejected policy request"
            );
            err
        })
    }
}
