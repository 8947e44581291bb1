use crate::service::payment_service::err;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub async fn list_payments(State(state): State<AppState>) -> impl IntoResponse {
    match state.tracker.get_payments().await {
        Ok(payments) => (StatusCode::OK, Json(json!({ "payments": payments }))).into_response(),
        Err(e) => internal(e),
    }
}

pub async fn get_payment(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> impl IntoResponse {
    match state.tracker.get_payment_by_reference(&reference).await {
        Ok(Some(payment)) => (StatusCode::OK, Json(payment)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(err("PAYMENT_NOT_FOUND", "no payment with that reference")),
        )
            .into_response(),
        Err(e) => internal(e),
    }
}

pub async fn list_event_payments(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> impl IntoResponse {
    match state.tracker.get_payments_by_event(&event_id).await {
        Ok(payments) => (StatusCode::OK, Json(json!({ "payments": payments }))).into_response(),
        Err(e) => internal(e),
    }
}

pub async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    let revenue = state.tracker.get_total_revenue().await;
    let tickets = state.tracker.get_tickets_sold().await;

    match (revenue, tickets) {
        (Ok(total_revenue_minor), Ok(tickets_sold)) => (
            StatusCode::OK,
            Json(json!({
                "total_revenue_minor": total_revenue_minor,
                "tickets_sold": tickets_sold,
                "currency": state.config.currency_code,
                "currency_symbol": state.config.currency_symbol,
            })),
        )
            .into_response(),
        (Err(e), _) | (_, Err(e)) => internal(e),
    }
}

pub async fn clear_payments(State(state): State<AppState>) -> impl IntoResponse {
    match state.tracker.clear_payments().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "cleared": true }))).into_response(),
        Err(e) => internal(e),
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

fn internal(e: anyhow::Error) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(err("INTERNAL_ERROR", &e.to_string())),
    )
        .into_response()
}
