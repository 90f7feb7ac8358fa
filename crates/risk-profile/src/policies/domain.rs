use serde::Serialize;

/// Lowest score a line can hold after any rule touches it.
pub const MIN_LINE_SCORE: i32 = 0;
/// Highest score a line can hold after any rule touches it.
pub const MAX_LINE_SCORE: i32 = 3;

/// Validated applicant facts, produced only by the intake guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicantProfile {
    pub age: u32,
    pub dependents: u32,
    pub income: u64,
    pub marital_status: MaritalStatus,
    pub risk_answers: Vec<u8>,
    pub house: Option<House>,
    pub vehicle: Option<Vehicle>,
}

impl ApplicantProfile {
    pub fn base_score(&self) -> i32 {
        self.risk_answers.iter().map(|answer| i32::from(*answer)).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct House {
    pub ownership_status: OwnershipStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    pub year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
}

impl MaritalStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "single" => Some(Self::Single),
            "married" => Some(Self::Married),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnershipStatus {
    Owned,
    Mortgaged,
    Rented,
}

impl OwnershipStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "owned" => Some(Self::Owned),
            "mortgaged" => Some(Self::Mortgaged),
            "rented" => Some(Self::Rented),
            _ => None,
        }
    }
}

/// Lines of insurance scored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceLine {
    Life,
    Disability,
    Home,
    Auto,
}

impl InsuranceLine {
    pub const ALL: [InsuranceLine; 4] = [
        InsuranceLine::Life,
        InsuranceLine::Disability,
        InsuranceLine::Home,
        InsuranceLine::Auto,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            InsuranceLine::Life => "life",
            InsuranceLine::Disability => "disability",
            InsuranceLine::Home => "home",
            InsuranceLine::Auto => "auto",
        }
    }
}

/// Qualitative outcome for a line. `Ineligible` is only ever set by an override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Economic,
    Regular,
    Responsible,
    Ineligible,
}

impl RiskTier {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s <= 0 => RiskTier::Economic,
            1..=2 => RiskTier::Regular,
            _ => RiskTier::Responsible,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskTier::Economic => "economic",
            RiskTier::Regular => "regular",
            RiskTier::Responsible => "responsible",
            RiskTier::Ineligible => "ineligible",
        }
    }
}

/// Per-line working scores for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineScores {
    pub life: i32,
    pub disability: i32,
    pub home: i32,
    pub auto: i32,
}

impl LineScores {
    pub fn uniform(score: i32) -> Self {
        Self {
            life: score,
            disability: score,
            home: score,
            auto: score,
        }
    }

    pub fn get(&self, line: InsuranceLine) -> i32 {
        match line {
            InsuranceLine::Life => self.life,
            InsuranceLine::Disability => self.disability,
            InsuranceLine::Home => self.home,
            InsuranceLine::Auto => self.auto,
        }
    }

    fn slot(&mut self, line: InsuranceLine) -> &mut i32 {
        match line {
            InsuranceLine::Life => &mut self.life,
            InsuranceLine::Disability => &mut self.disability,
            InsuranceLine::Home => &mut self.home,
            InsuranceLine::Auto => &mut self.auto,
        }
    }

    /// Subtracts `points` from each targeted line, flooring at zero.
    pub fn deduct(&mut self, lines: &[InsuranceLine], points: i32) {
        for line in lines {
            let slot = self.slot(*line);
            *slot = (*slot - points).max(MIN_LINE_SCORE);
        }
    }

    pub fn deduct_all(&mut self, points: i32) {
        self.deduct(&InsuranceLine::ALL, points);
    }

    /// Adds `points` to each targeted line, capping at three.
    pub fn add(&mut self, lines: &[InsuranceLine], points: i32) {
        for line in lines {
            let slot = self.slot(*line);
            *slot = (*slot + points).min(MAX_LINE_SCORE);
        }
    }

    pub fn within_bounds(&self) -> bool {
        InsuranceLine::ALL
            .iter()
            .all(|line| (MIN_LINE_SCORE..=MAX_LINE_SCORE).contains(&self.get(*line)))
    }
}

/// Final per-line tiers. Field order matches the wire payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyResponse {
    pub auto: RiskTier,
    pub disability: RiskTier,
    pub home: RiskTier,
    pub life: RiskTier,
}

impl PolicyResponse {
    pub fn from_scores(scores: &LineScores) -> Self {
        Self {
            auto: RiskTier::from_score(scores.auto),
            disability: RiskTier::from_score(scores.disability),
            home: RiskTier::from_score(scores.home),
            life: RiskTier::from_score(scores.life),
        }
    }

    pub fn get(&self, line: InsuranceLine) -> RiskTier {
        match line {
            InsuranceLine::Life => self.life,
            InsuranceLine::Disability => self.disability,
            InsuranceLine::Home => self.home,
            InsuranceLine::Auto => self.auto,
        }
    }

    pub fn mark_ineligible(&mut self, line: InsuranceLine) {
        let slot = match line {
            InsuranceLine::Life => &mut self.life,
            InsuranceLine::Disability => &mut self.disability,
            InsuranceLine::Home => &mut self.home,
            InsuranceLine::Auto => &mut self.auto,
        };
        *slot = RiskTier::Ineligible;
    }
}
