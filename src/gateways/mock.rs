use crate::domain::payment::{AuthorizationResult, PaymentMetadata, PaymentRequest, VerificationResult};
use crate::gateways::PaymentGateway;
use anyhow::Result;
use rand::Rng;

pub const MOCK_VERIFY_AMOUNT_MINOR: i64 = 500_000;

pub struct MockGateway {
    pub verification_url: String,
    pub currency: String,
    pub delay_ms: u64,
}

#[async_trait::async_trait]
impl PaymentGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn initialize(&self, request: &PaymentRequest) -> Result<AuthorizationResult> {
        tokio::time::sleep(std::time::Duration::from_millis(self.delay_ms)).await;

        Ok(AuthorizationResult {
            success: true,
            authorization_url: format!("{}?reference={}", self.verification_url, request.reference),
            access_code: format!("mock_access_{}", uuid::Uuid::new_v4().simple()),
            reference: request.reference.clone(),
        })
    }

    async fn verify(&self, reference: &str) -> Result<VerificationResult> {
        tokio::time::sleep(std::time::Duration::from_millis(self.delay_ms)).await;

        Ok(VerificationResult {
            status: "success".to_string(),
            transaction_id: rand::thread_rng().gen_range(100_000_000i64..1_000_000_000),
            amount_minor: MOCK_VERIFY_AMOUNT_MINOR,
            currency: self.currency.clone(),
            reference: reference.to_string(),
            paid_at: Some(chrono::Utc::now()),
            metadata: Some(PaymentMetadata {
                event_id: "mock_event".to_string(),
                ticket_id: "mock_ticket".to_string(),
                quantity: 1,
                event_title: "Mock Event".to_string(),
                customer_name: "Mock Customer".to_string(),
            }),
        })
    }
}
