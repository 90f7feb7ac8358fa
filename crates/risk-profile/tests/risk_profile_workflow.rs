//! End-to-end scenarios through the public service facade and HTTP router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::NaiveDate;
use risk_profile::error::{AppError, ErrorKind};
use risk_profile::policies::{
    policy_router, ApplicantProfile, FixedClock, MaritalStatus, PolicyService, RiskTier,
    ScoringConfig, SystemClock, ValidationError,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn service_on(year: i32, month: u32, day: u32) -> Arc<PolicyService<FixedClock>> {
    let today = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
    Arc::new(PolicyService::new(
        Arc::new(FixedClock(today)),
        ScoringConfig::default(),
    ))
}

async fn post_policies(
    service: Arc<PolicyService<FixedClock>>,
    body: Body,
) -> (StatusCode, Value) {
    let response = policy_router(service)
        .oneshot(
            Request::post("/policies")
                .header(header::CONTENT_TYPE, "application/json")
                .body(body)
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    (status, serde_json::from_slice(&bytes).expect("json payload"))
}

#[tokio::test]
async fn married_applicant_without_income_is_scored_over_http() {
    let request = json!({
        "age": 35,
        "dependents": 2,
        "house": { "ownership_status": "owned" },
        "income": 0,
        "marital_status": "married",
        "risk_questions": [0, 1, 0],
        "vehicle": { "year": 2018 }
    });

    let (status, payload) =
        post_policies(service_on(2023, 3, 1), Body::from(request.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        payload,
        json!({
            "auto": "regular",
            "disability": "ineligible",
            "home": "economic",
            "life": "regular"
        })
    );
}

#[tokio::test]
async fn missing_body_is_a_client_error() {
    let (status, payload) = post_policies(service_on(2023, 3, 1), Body::empty()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["kind"], json!("validation"));
    for line in ["auto", "disability", "home", "life"] {
        assert!(payload.get(line).is_none());
    }
}

#[tokio::test]
async fn senior_declaring_no_assets_is_ineligible_everywhere() {
    let request = json!({
        "age": 65,
        "dependents": 0,
        "house": {},
        "income": 0,
        "marital_status": "single",
        "risk_questions": [1, 0, 1],
        "vehicle": {}
    });

    let (status, payload) =
        post_policies(service_on(2024, 1, 15), Body::from(request.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        payload,
        json!({
            "auto": "ineligible",
            "disability": "ineligible",
            "home": "ineligible",
            "life": "ineligible"
        })
    );
}

#[test]
fn engine_scores_profiles_built_outside_the_guard() {
    let service = PolicyService::new(Arc::new(SystemClock), ScoringConfig::default());
    let profile = ApplicantProfile {
        age: 65,
        dependents: 0,
        income: 0,
        marital_status: MaritalStatus::Single,
        risk_answers: vec![0, 0, 0],
        house: None,
        vehicle: None,
    };

    let response = service.assess(&profile);

    assert_eq!(response.life, RiskTier::Ineligible);
    assert_eq!(response.disability, RiskTier::Ineligible);
    assert_eq!(response.home, RiskTier::Ineligible);
    assert_eq!(response.auto, RiskTier::Ineligible);
}

#[test]
fn validation_failures_convert_into_client_errors() {
    let service = service_on(2024, 1, 15);

    let err = service
        .assess_json(br#"{"age": 40}"#)
        .expect_err("incomplete request rejected");
    assert!(matches!(err, ValidationError::MissingField("dependents")));

    let app_error = AppError::from(err);
    assert_eq!(app_error.kind(), ErrorKind::Validation);
    assert_eq!(app_error.kind().status(), StatusCode::BAD_REQUEST);
}
