#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayMode {
    Real,
    Mock,
}

pub const PUBLIC_KEY_PLACEHOLDER: &str = "pk_test_your_paystack_public_key_here";

impl GatewayMode {
    pub fn derive(public_key: &str) -> Self {
        let usable = !public_key.is_empty()
            && public_key.contains("pk_")
            && public_key != PUBLIC_KEY_PLACEHOLDER;

        if usable {
            GatewayMode::Real
        } else {
            GatewayMode::Mock
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub store_path: String,
    pub app_base_url: String,
    pub paystack_base_url: String,
    pub paystack_public_key: String,
    pub paystack_secret_key: String,
    pub currency_code: String,
    pub currency_symbol: String,
    pub gateway_timeout_ms: u64,
    pub mock_delay_ms: u64,
    pub internal_api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            store_path: std::env::var("STORE_PATH").unwrap_or_else(|_| "./data".to_string()),
            app_base_url: std::env::var("APP_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            paystack_base_url: std::env::var("PAYSTACK_BASE_URL")
                .unwrap_or_else(|_| "https://api.paystack.co".to_string()),
            paystack_public_key: std::env::var("PAYSTACK_PUBLIC_KEY").unwrap_or_default(),
            paystack_secret_key: std::env::var("PAYSTACK_SECRET_KEY").unwrap_or_default(),
            currency_code: std::env::var("CURRENCY_CODE").unwrap_or_else(|_| "NGN".to_string()),
            currency_symbol: std::env::var("CURRENCY_SYMBOL").unwrap_or_else(|_| "₦".to_string()),
            gateway_timeout_ms: std::env::var("GATEWAY_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(10_000),
            mock_delay_ms: std::env::var("MOCK_GATEWAY_DELAY_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1_000),
            internal_api_key: std::env::var("INTERNAL_API_KEY")
                .unwrap_or_else(|_| "dev-internal-key".to_string()),
        }
    }

    pub fn gateway_mode(&self) -> GatewayMode {
        GatewayMode::derive(&self.paystack_public_key)
    }

    pub fn verification_url(&self) -> String {
        format!("{}/payments/verify", self.app_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::{GatewayMode, PUBLIC_KEY_PLACEHOLDER};

    #[test]
    fn empty_key_selects_mock() {
        assert_eq!(GatewayMode::derive(""), GatewayMode::Mock);
    }

    #[test]
    fn placeholder_key_selects_mock() {
        assert_eq!(GatewayMode::derive(PUBLIC_KEY_PLACEHOLDER), GatewayMode::Mock);
    }

    #[test]
    fn key_without_marker_selects_mock() {
        assert_eq!(GatewayMode::derive("sk_live_abc123"), GatewayMode::Mock);
    }

    #[test]
    fn live_and_test_keys_select_real() {
        assert_eq!(GatewayMode::derive("pk_live_abc123"), GatewayMode::Real);
        assert_eq!(GatewayMode::derive("pk_test_abc123"), GatewayMode::Real);
    }
}
