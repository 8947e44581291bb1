use crate::checkout::flow::{self, CheckoutState};
use crate::domain::payment::PaymentRequest;
use crate::domain::reference::payment_reference;
use crate::service::payment_service::err;
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub email: String,
    pub event_id: String,
    pub ticket_id: String,
    pub quantity: u32,
    pub customer_name: String,
    pub event_title: String,
    pub amount_major: i64,
}

pub async fn start_checkout(
    State(state): State<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> impl IntoResponse {
    let flow_state = flow::submit(flow::begin_checkout(), &req.email);
    if let CheckoutState::ModalOpen { error: Some(message) } = &flow_state {
        return (StatusCode::BAD_REQUEST, Json(err("MISSING_EMAIL", message))).into_response();
    }

    let request = PaymentRequest {
        email: req.email,
        amount_major: req.amount_major,
        reference: payment_reference(&req.event_id),
        event_id: req.event_id,
        ticket_id: req.ticket_id,
        quantity: req.quantity,
        customer_name: req.customer_name,
        event_title: req.event_title,
    };

    match state.payment_service.initialize_payment(&request).await {
        Ok(auth) => match flow::authorization_outcome(flow_state, Ok(&auth)) {
            CheckoutState::RedirectedToGateway { authorization_url } => (
                StatusCode::OK,
                Json(json!({
                    "authorization_url": authorization_url,
                    "access_code": auth.access_code,
                    "reference": auth.reference,
                })),
            )
                .into_response(),
            _ => (
                StatusCode::BAD_GATEWAY,
                Json(err("PAYMENT_INIT_FAILED", "gateway returned an empty authorization url")),
            )
                .into_response(),
        },
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}
