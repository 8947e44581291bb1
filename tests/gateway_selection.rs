use eventflow_payments::config::{AppConfig, GatewayMode, PUBLIC_KEY_PLACEHOLDER};
use eventflow_payments::domain::payment::PaymentRequest;
use eventflow_payments::service::payment_service::PaymentService;

#[test]
fn placeholder_key_selects_mock_adapter() {
    let service = PaymentService::from_config(&config_with_key(PUBLIC_KEY_PLACEHOLDER));
    assert_eq!(service.mode, GatewayMode::Mock);
    assert_eq!(service.gateway.name(), "mock");
}

#[test]
fn live_key_selects_real_adapter() {
    let service = PaymentService::from_config(&config_with_key("pk_live_abc123"));
    assert_eq!(service.mode, GatewayMode::Real);
    assert_eq!(service.gateway.name(), "paystack");
}

#[tokio::test]
async fn mock_facade_initializes_without_network() {
    let service = PaymentService::from_config(&config_with_key(""));

    let auth = service.initialize_payment(&sample_request()).await.unwrap();
    assert!(auth.authorization_url.contains("/payments/verify"));
    assert!(auth.authorization_url.contains("reference=EVT_1_1000_a1"));
}

#[tokio::test]
async fn missing_email_is_rejected_before_the_gateway() {
    let service = PaymentService::from_config(&config_with_key(""));

    let mut request = sample_request();
    request.email = String::new();

    let (status, envelope) = service.initialize_payment(&request).await.unwrap_err();
    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(envelope.error.code, "MISSING_EMAIL");
}

#[tokio::test]
async fn non_positive_amount_is_rejected() {
    let service = PaymentService::from_config(&config_with_key(""));

    let mut request = sample_request();
    request.amount_major = 0;

    let (_, envelope) = service.initialize_payment(&request).await.unwrap_err();
    assert_eq!(envelope.error.code, "INVALID_AMOUNT");
}

fn config_with_key(public_key: &str) -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        store_path: "./data".to_string(),
        app_base_url: "http://localhost:3000".to_string(),
        paystack_base_url: "https://api.paystack.co".to_string(),
        paystack_public_key: public_key.to_string(),
        paystack_secret_key: String::new(),
        currency_code: "NGN".to_string(),
        currency_symbol: "₦".to_string(),
        gateway_timeout_ms: 1000,
        mock_delay_ms: 0,
        internal_api_key: "test-key".to_string(),
    }
}

fn sample_request() -> PaymentRequest {
    PaymentRequest {
        email: "dara@example.com".to_string(),
        amount_major: 5000,
        reference: "EVT_1_1000_a1".to_string(),
        event_id: "1".to_string(),
        ticket_id: "vip".to_string(),
        quantity: 2,
        customer_name: "Dara Adeyemi".to_string(),
        event_title: "Lagos Tech Meetup".to_string(),
    }
}
