pub mod checkout {
    pub mod flow;
}
pub mod config;
pub mod domain {
    pub mod payment;
    pub mod reference;
}
pub mod gateways;
pub mod http {
    pub mod handlers {
        pub mod checkout;
        pub mod payments;
        pub mod receipts;
        pub mod verification;
    }
    pub mod middleware {
        pub mod admin_auth;
    }
}
pub mod receipt;
pub mod service {
    pub mod payment_service;
}
pub mod store;
pub mod tracker;

#[derive(Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub payment_service: service::payment_service::PaymentService,
    pub tracker: tracker::PaymentTracker,
}
