use crate::receipt::generate_receipt;
use crate::service::payment_service::err;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

pub async fn download_receipt(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> impl IntoResponse {
    let payment = match state.tracker.get_payment_by_reference(&reference).await {
        Ok(Some(payment)) => payment,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(err("PAYMENT_NOT_FOUND", "no payment with that reference")),
            )
                .into_response()
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(err("INTERNAL_ERROR", &e.to_string())),
            )
                .into_response()
        }
    };

    match generate_receipt(&payment, None, &state.config.currency_symbol) {
        Ok(receipt) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, receipt.content_type.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", receipt.file_name),
                ),
            ],
            receipt.body,
        )
            .into_response(),
        Err(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(err("RECEIPT_FAILED", &e.to_string())),
        )
            .into_response(),
    }
}
