use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};

use super::clock::Clock;
use super::service::PolicyService;
use crate::error::AppError;

/// Router builder exposing the risk profile endpoint.
pub fn policy_router<C>(service: Arc<PolicyService<C>>) -> Router
where
    C: Clock + 'static,
{
    Router::new()
        .route("/policies", post(assess_handler::<C>))
        .with_state(service)
}

/// Takes the raw body so empty and non-JSON payloads surface as validation errors.
pub(crate) async fn assess_handler<C>(
    State(service): State<Arc<PolicyService<C>>>,
    body: Bytes,
) -> Response
where
    C: Clock + 'static,
{
    match service.assess_json(&body) {
        Ok(response) => (StatusCode::OK, axum::Json(response)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}
