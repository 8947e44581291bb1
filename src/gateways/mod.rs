use crate::domain::payment::{AuthorizationResult, PaymentRequest, VerificationResult};
use anyhow::Result;

pub mod mock;
pub mod paystack;

pub const PAYMENT_CHANNELS: [&str; 3] = ["card", "bank_transfer", "ussd"];

#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    fn name(&self) -> &'static str;

    async fn initialize(&self, request: &PaymentRequest) -> Result<AuthorizationResult>;

    async fn verify(&self, reference: &str) -> Result<VerificationResult>;
}
