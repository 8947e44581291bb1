use crate::domain::payment::{CustomerProfile, TrackedPayment};
use anyhow::{bail, Result};

#[derive(Debug, Clone)]
pub struct Receipt {
    pub file_name: String,
    pub content_type: &'static str,
    pub body: String,
}

pub fn generate_receipt(
    payment: &TrackedPayment,
    customer: Option<&CustomerProfile>,
    currency_symbol: &str,
) -> Result<Receipt> {
    if payment.reference.trim().is_empty() {
        bail!("receipt requires a payment reference");
    }
    if payment.event_title.trim().is_empty() {
        bail!("receipt requires an event title");
    }

    let payer = customer
        .map(|c| c.name.clone())
        .or_else(|| payment.email.clone())
        .unwrap_or_else(|| "Guest".to_string());

    let body = [
        "EventFlow Ticket Receipt".to_string(),
        "========================".to_string(),
        format!("Payer:     {}", payer),
        format!("Reference: {}", payment.reference),
        format!("Date:      {}", payment.tracked_at.format("%Y-%m-%d %H:%M UTC")),
        String::new(),
        format!("{} x {}", payment.tickets, payment.event_title),
        format!(
            "Total:     {}{}.{:02}",
            currency_symbol,
            payment.amount_minor / 100,
            payment.amount_minor % 100
        ),
    ]
    .join("\n");

    Ok(Receipt {
        file_name: format!("receipt_{}.txt", payment.reference),
        content_type: "text/plain; charset=utf-8",
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::generate_receipt;
    use crate::domain::payment::{CustomerProfile, TrackedPayment};

    fn payment() -> TrackedPayment {
        TrackedPayment {
            id: "1722_abc".to_string(),
            reference: "EVT_1_1000_a1".to_string(),
            event_id: "1".to_string(),
            event_title: "Lagos Tech Meetup".to_string(),
            amount_minor: 500_000,
            tickets: 2,
            email: Some("dara@example.com".to_string()),
            tracked_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn receipt_lays_out_payer_reference_and_total() {
        let customer = CustomerProfile {
            name: "Dara Adeyemi".to_string(),
            email: "dara@example.com".to_string(),
        };
        let receipt = generate_receipt(&payment(), Some(&customer), "₦").unwrap();

        assert_eq!(receipt.file_name, "receipt_EVT_1_1000_a1.txt");
        assert!(receipt.body.contains("Dara Adeyemi"));
        assert!(receipt.body.contains("EVT_1_1000_a1"));
        assert!(receipt.body.contains("2 x Lagos Tech Meetup"));
        assert!(receipt.body.contains("₦5000.00"));
    }

    #[test]
    fn payer_falls_back_to_email_then_guest() {
        let with_email = generate_receipt(&payment(), None, "₦").unwrap();
        assert!(with_email.body.contains("dara@example.com"));

        let mut anonymous = payment();
        anonymous.email = None;
        let receipt = generate_receipt(&anonymous, None, "₦").unwrap();
        assert!(receipt.body.contains("Guest"));
    }

    #[test]
    fn missing_required_fields_fail() {
        let mut no_title = payment();
        no_title.event_title = String::new();
        assert!(generate_receipt(&no_title, None, "₦").is_err());

        let mut no_reference = payment();
        no_reference.reference = "  ".to_string();
        assert!(generate_receipt(&no_reference, None, "₦").is_err());
    }
}
