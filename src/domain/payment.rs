use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub email: String,
    pub amount_major: i64,
    pub reference: String,
    pub event_id: String,
    pub ticket_id: String,
    pub quantity: u32,
    pub customer_name: String,
    pub event_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationResult {
    pub success: bool,
    pub authorization_url: String,
    pub access_code: String,
    pub reference: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMetadata {
    pub event_id: String,
    pub ticket_id: String,
    pub quantity: u32,
    pub event_title: String,
    pub customer_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub status: String,
    pub transaction_id: i64,
    pub amount_minor: i64,
    pub currency: String,
    pub reference: String,
    pub paid_at: Option<chrono::DateTime<chrono::Utc>>,
    pub metadata: Option<PaymentMetadata>,
}

impl VerificationResult {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedPayment {
    pub id: String,
    pub reference: String,
    pub event_id: String,
    pub event_title: String,
    pub amount_minor: i64,
    pub tickets: u32,
    pub email: Option<String>,
    pub tracked_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}
