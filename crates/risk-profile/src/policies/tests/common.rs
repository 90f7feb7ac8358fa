use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::policies::clock::FixedClock;
use crate::policies::domain::{
    ApplicantProfile, House, MaritalStatus, OwnershipStatus, Vehicle,
};
use crate::policies::scoring::{RiskEngine, ScoringConfig};
use crate::policies::service::PolicyService;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn engine() -> RiskEngine {
    RiskEngine::new(ScoringConfig::default())
}

/// Applicant that triggers no adjustment rule and no override.
pub(super) fn neutral_profile() -> ApplicantProfile {
    ApplicantProfile {
        age: 50,
        dependents: 0,
        income: 100_000,
        marital_status: MaritalStatus::Single,
        risk_answers: vec![0, 1, 0],
        house: Some(House {
            ownership_status: OwnershipStatus::Owned,
        }),
        vehicle: Some(Vehicle { year: 2000 }),
    }
}

pub(super) fn scenario_a_profile() -> ApplicantProfile {
    ApplicantProfile {
        age: 35,
        dependents: 2,
        income: 0,
        marital_status: MaritalStatus::Married,
        risk_answers: vec![0, 1, 0],
        house: Some(House {
            ownership_status: OwnershipStatus::Owned,
        }),
        vehicle: Some(Vehicle { year: 2018 }),
    }
}

pub(super) fn scenario_a_request() -> Value {
    json!({
        "age": 35,
        "dependents": 2,
        "house": { "ownership_status": "owned" },
        "income": 0,
        "marital_status": "married",
        "risk_questions": [0, 1, 0],
        "vehicle": { "year": 2018 }
    })
}

pub(super) fn scenario_b_request() -> Value {
    json!({
        "age": 20,
        "dependents": 0,
        "house": { "ownership_status": "owned" },
        "income": 300000,
        "marital_status": "single",
        "risk_questions": [0, 0, 0],
        "vehicle": { "year": 2023 }
    })
}

pub(super) fn without_field(mut request: Value, field: &str) -> Value {
    request
        .as_object_mut()
        .expect("request is an object")
        .remove(field);
    request
}

pub(super) fn with_field(mut request: Value, field: &str, value: Value) -> Value {
    request
        .as_object_mut()
        .expect("request is an object")
        .insert(field.to_string(), value);
    request
}

pub(super) fn build_service(today: NaiveDate) -> PolicyService<FixedClock> {
    PolicyService::new(Arc::new(FixedClock(today)), ScoringConfig::default())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
