use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::model::Classifier;

use super::batch::{read_applications, BatchScoreError};
use super::intake::{IntakeGuard, LoanApplicationForm};
use super::service::{DecisionOutcome, LoanDecisionService};

/// Router builder exposing the decision endpoints.
pub fn decision_router<C>(service: Arc<LoanDecisionService<C>>) -> Router
where
    C: Classifier + 'static,
{
    Router::new()
        .route("/api/v1/loans/decisions", post(decide_handler::<C>))
        .route("/api/v1/loans/decisions/batch", post(batch_handler::<C>))
        .with_state(service)
}

pub(crate) async fn decide_handler<C>(
    State(service): State<Arc<LoanDecisionService<C>>>,
    axum::Json(form): axum::Json<LoanApplicationForm>,
) -> Response
where
    C: Classifier + 'static,
{
    let application = match IntakeGuard.application_from_form(form) {
        Ok(application) => application,
        Err(violation) => {
            let payload = json!({ "error": violation.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    match service.decide(&application) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome.view())).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BatchScoreRequest {
    pub(crate) csv: String,
}

pub(crate) async fn batch_handler<C>(
    State(service): State<Arc<LoanDecisionService<C>>>,
    axum::Json(request): axum::Json<BatchScoreRequest>,
) -> Response
where
    C: Classifier + 'static,
{
    let applications = match read_applications(Cursor::new(request.csv.into_bytes())) {
        Ok(applications) => applications,
        Err(error @ (BatchScoreError::Csv(_) | BatchScoreError::Intake { .. })) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response();
        }
    };

    match service.decide_batch(&applications) {
        Ok(outcomes) => {
            let views: Vec<_> = outcomes.iter().map(DecisionOutcome::view).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
