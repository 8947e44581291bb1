use crate::config::{AppConfig, GatewayMode};
use crate::domain::payment::{
    AuthorizationResult, ErrorEnvelope, ErrorPayload, PaymentRequest, VerificationResult,
};
use crate::gateways::mock::MockGateway;
use crate::gateways::paystack::PaystackGateway;
use crate::gateways::PaymentGateway;
use axum::http::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct PaymentService {
    pub mode: GatewayMode,
    pub gateway: Arc<dyn PaymentGateway>,
}

impl PaymentService {
    pub fn from_config(cfg: &AppConfig) -> Self {
        let mode = cfg.gateway_mode();
        let gateway: Arc<dyn PaymentGateway> = match mode {
            GatewayMode::Real => Arc::new(PaystackGateway {
                base_url: cfg.paystack_base_url.clone(),
                secret_key: cfg.paystack_secret_key.clone(),
                callback_url: cfg.verification_url(),
                currency: cfg.currency_code.clone(),
                timeout_ms: cfg.gateway_timeout_ms,
                client: reqwest::Client::new(),
            }),
            GatewayMode::Mock => {
                tracing::warn!(
                    "no usable paystack public key configured, payments run against the mock gateway"
                );
                Arc::new(MockGateway {
                    verification_url: cfg.verification_url(),
                    currency: cfg.currency_code.clone(),
                    delay_ms: cfg.mock_delay_ms,
                })
            }
        };

        Self { mode, gateway }
    }

    pub async fn initialize_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<AuthorizationResult, (StatusCode, ErrorEnvelope)> {
        validate_request(request)?;

        let auth = self.gateway.initialize(request).await.map_err(|e| {
            (
                StatusCode::BAD_GATEWAY,
                err("PAYMENT_INIT_FAILED", &e.to_string()),
            )
        })?;

        if auth.authorization_url.is_empty() {
            return Err((
                StatusCode::BAD_GATEWAY,
                err("PAYMENT_INIT_FAILED", "gateway returned an empty authorization url"),
            ));
        }

        Ok(auth)
    }

    pub async fn verify_payment(&self, reference: &str) -> anyhow::Result<VerificationResult> {
        self.gateway.verify(reference).await
    }
}

fn validate_request(request: &PaymentRequest) -> Result<(), (StatusCode, ErrorEnvelope)> {
    if request.email.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            err("MISSING_EMAIL", "payer email is required"),
        ));
    }
    if request.amount_major <= 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            err("INVALID_AMOUNT", "amount must be > 0"),
        ));
    }
    Ok(())
}

pub fn err(code: &str, message: &str) -> ErrorEnvelope {
    ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        },
    }
}
