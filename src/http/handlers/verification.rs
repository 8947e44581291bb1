use crate::checkout::flow::{self, CheckoutState, VerificationFailure};
use crate::domain::payment::VerificationResult;
use crate::service::payment_service::err;
use crate::tracker::SavePayment;
use crate::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

pub const TICKETS_VIEW_PATH: &str = "/tickets";
pub const SUCCESS_REDIRECT_DELAY_MS: u64 = 3_000;

#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    pub reference: Option<String>,
    pub trxref: Option<String>,
}

pub async fn verify_payment(
    State(state): State<AppState>,
    Query(query): Query<VerifyQuery>,
) -> impl IntoResponse {
    let flow_state = flow::landed_on_verification(query.reference, query.trxref);
    let reference = match &flow_state {
        CheckoutState::Verifying { reference } => reference.clone(),
        _ => return failure_response(&VerificationFailure::MissingReference),
    };

    match state.payment_service.verify_payment(&reference).await {
        Ok(result) => match flow::verification_outcome(flow_state, Ok(&result)) {
            CheckoutState::VerifiedSuccess { reference } => {
                match state
                    .tracker
                    .save_payment(save_payment_from(&reference, &result))
                    .await
                {
                    Ok(payment) => (
                        StatusCode::OK,
                        Json(json!({
                            "status": "success",
                            "payment": payment,
                            "next_url": TICKETS_VIEW_PATH,
                            "redirect_delay_ms": SUCCESS_REDIRECT_DELAY_MS,
                        })),
                    )
                        .into_response(),
                    Err(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(err("TRACKER_WRITE_FAILED", &e.to_string())),
                    )
                        .into_response(),
                }
            }
            CheckoutState::VerifiedError { kind } => failure_response(&kind),
            _ => failure_response(&VerificationFailure::Network { reference }),
        },
        Err(e) => match flow::verification_outcome(flow_state, Err(&e.to_string())) {
            CheckoutState::VerifiedError { kind } => failure_response(&kind),
            _ => failure_response(&VerificationFailure::Network { reference }),
        },
    }
}

fn save_payment_from(reference: &str, result: &VerificationResult) -> SavePayment {
    let metadata = result.metadata.as_ref();

    SavePayment {
        reference: reference.to_string(),
        event_id: metadata.map(|m| m.event_id.clone()).unwrap_or_default(),
        event_title: metadata.map(|m| m.event_title.clone()).unwrap_or_default(),
        amount_minor: result.amount_minor,
        tickets: metadata.map(|m| m.quantity).unwrap_or(1),
        email: None,
    }
}

fn failure_response(kind: &VerificationFailure) -> Response {
    let (status, code) = match kind {
        VerificationFailure::MissingReference => (StatusCode::BAD_REQUEST, "NO_REFERENCE"),
        VerificationFailure::NotSuccessful { .. } => {
            (StatusCode::PAYMENT_REQUIRED, "PAYMENT_NOT_SUCCESSFUL")
        }
        VerificationFailure::Network { .. } => (StatusCode::BAD_GATEWAY, "VERIFICATION_FAILED"),
    };

    (status, Json(err(code, &kind.user_message()))).into_response()
}
