use crate::domain::payment::TrackedPayment;
use crate::domain::reference::tracked_payment_id;
use crate::store::KeyValueStore;
use anyhow::Result;
use std::sync::Arc;

pub const PAYMENTS_KEY: &str = "eventflow_payments";

#[derive(Clone)]
pub struct PaymentTracker {
    pub store: Arc<dyn KeyValueStore>,
}

#[derive(Debug, Clone)]
pub struct SavePayment {
    pub reference: String,
    pub event_id: String,
    pub event_title: String,
    pub amount_minor: i64,
    pub tickets: u32,
    pub email: Option<String>,
}

impl PaymentTracker {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn save_payment(&self, data: SavePayment) -> Result<TrackedPayment> {
        let mut payments = self.load().await?;

        if let Some(existing) = payments.iter().find(|p| p.reference == data.reference) {
            return Ok(existing.clone());
        }

        let record = TrackedPayment {
            id: tracked_payment_id(),
            reference: data.reference,
            event_id: data.event_id,
            event_title: data.event_title,
            amount_minor: data.amount_minor,
            tickets: data.tickets,
            email: data.email,
            tracked_at: chrono::Utc::now(),
        };

        payments.insert(0, record.clone());
        self.store
            .set(PAYMENTS_KEY, &serde_json::to_string(&payments)?)
            .await?;

        Ok(record)
    }

    pub async fn get_payments(&self) -> Result<Vec<TrackedPayment>> {
        self.load().await
    }

    pub async fn get_payment_by_reference(&self, reference: &str) -> Result<Option<TrackedPayment>> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .find(|p| p.reference == reference))
    }

    pub async fn get_payments_by_event(&self, event_id: &str) -> Result<Vec<TrackedPayment>> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|p| p.event_id == event_id)
            .collect())
    }

    pub async fn clear_payments(&self) -> Result<()> {
        self.store.remove(PAYMENTS_KEY).await
    }

    pub async fn get_total_revenue(&self) -> Result<i64> {
        Ok(self.load().await?.iter().map(|p| p.amount_minor).sum())
    }

    pub async fn get_tickets_sold(&self) -> Result<u64> {
        Ok(self.load().await?.iter().map(|p| u64::from(p.tickets)).sum())
    }

    async fn load(&self) -> Result<Vec<TrackedPayment>> {
        let raw = self.store.get(PAYMENTS_KEY).await?;
        Ok(raw
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default())
    }
}
