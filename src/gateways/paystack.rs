use crate::domain::payment::{AuthorizationResult, PaymentRequest, VerificationResult};
use crate::gateways::{PaymentGateway, PAYMENT_CHANNELS};
use anyhow::{anyhow, Result};
use serde_json::json;

pub struct PaystackGateway {
    pub base_url: String,
    pub secret_key: String,
    pub callback_url: String,
    pub currency: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

#[async_trait::async_trait]
impl PaymentGateway for PaystackGateway {
    fn name(&self) -> &'static str {
        "paystack"
    }

    async fn initialize(&self, request: &PaymentRequest) -> Result<AuthorizationResult> {
        let url = format!("{}/transaction/initialize", self.base_url);
        let body = json!({
            "email": request.email,
            "amount": request.amount_major * 100,
            "currency": self.currency,
            "reference": request.reference,
            "callback_url": self.callback_url,
            "metadata": {
                "event_id": request.event_id,
                "ticket_id": request.ticket_id,
                "quantity": request.quantity,
                "event_title": request.event_title,
                "customer_name": request.customer_name,
            },
            "channels": PAYMENT_CHANNELS,
        });

        let resp = self
            .client
            .post(url)
            .bearer_auth(&self.secret_key)
            .json(&body)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await;

        match resp {
            Ok(r) if r.status().is_success() => {
                let v: serde_json::Value = r.json().await.unwrap_or_default();
                let data = v.get("data").cloned().unwrap_or_default();
                let authorization_url = data
                    .get("authorization_url")
                    .and_then(|u| u.as_str())
                    .map(ToString::to_string)
                    .ok_or_else(|| {
                        anyhow!("payment initialization failed: gateway returned no authorization_url")
                    })?;

                Ok(AuthorizationResult {
                    success: true,
                    authorization_url,
                    access_code: data
                        .get("access_code")
                        .and_then(|c| c.as_str())
                        .unwrap_or_default()
                        .to_string(),
                    reference: data
                        .get("reference")
                        .and_then(|rf| rf.as_str())
                        .unwrap_or(&request.reference)
                        .to_string(),
                })
            }
            Ok(r) => Err(anyhow!(
                "payment initialization failed: {}",
                gateway_message(r).await
            )),
            Err(e) => Err(anyhow!("payment initialization failed: {}", e)),
        }
    }

    async fn verify(&self, reference: &str) -> Result<VerificationResult> {
        let url = format!("{}/transaction/verify/{}", self.base_url, reference);

        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.secret_key)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await;

        match resp {
            Ok(r) if r.status().is_success() => {
                let v: serde_json::Value = r.json().await.unwrap_or_default();
                let data = v.get("data").cloned().unwrap_or_default();

                Ok(VerificationResult {
                    status: data
                        .get("status")
                        .and_then(|s| s.as_str())
                        .unwrap_or_default()
                        .to_string(),
                    transaction_id: data.get("id").and_then(|i| i.as_i64()).unwrap_or_default(),
                    amount_minor: data.get("amount").and_then(|a| a.as_i64()).unwrap_or_default(),
                    currency: data
                        .get("currency")
                        .and_then(|c| c.as_str())
                        .unwrap_or(&self.currency)
                        .to_string(),
                    reference: data
                        .get("reference")
                        .and_then(|rf| rf.as_str())
                        .unwrap_or(reference)
                        .to_string(),
                    paid_at: data.get("paid_at").and_then(|p| p.as_str()).and_then(parse_paid_at),
                    metadata: data
                        .get("metadata")
                        .cloned()
                        .and_then(|m| serde_json::from_value(m).ok()),
                })
            }
            Ok(r) => Err(anyhow!(
                "payment verification failed: {}",
                gateway_message(r).await
            )),
            Err(e) => Err(anyhow!("payment verification failed: {}", e)),
        }
    }
}

async fn gateway_message(resp: reqwest::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();

    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(ToString::to_string))
        .unwrap_or_else(|| {
            format!(
                "HTTP_{}: {}",
                status.as_u16(),
                body.chars().take(200).collect::<String>()
            )
        })
}

fn parse_paid_at(raw: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&chrono::Utc))
}
