use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, post};
use axum::Router;
use eventflow_payments::config::AppConfig;
use eventflow_payments::service::payment_service::PaymentService;
use eventflow_payments::store::file::FileStore;
use eventflow_payments::tracker::PaymentTracker;
use eventflow_payments::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let store = Arc::new(FileStore::new(cfg.store_path.clone()));
    let tracker = PaymentTracker::new(store);
    let payment_service = PaymentService::from_config(&cfg);
    tracing::info!(mode = ?payment_service.mode, "payment gateway selected");

    let state = AppState {
        config: cfg.clone(),
        payment_service,
        tracker,
    };

    let admin_key = cfg.internal_api_key.clone();
    let admin_routes = Router::new()
        .route(
            "/payments",
            delete(eventflow_payments::http::handlers::payments::clear_payments),
        )
        .layer(from_fn_with_state(
            admin_key,
            eventflow_payments::http::middleware::admin_auth::require_internal_api_key,
        ));

    let app = Router::new()
        .route("/health", get(eventflow_payments::http::handlers::payments::health))
        .route(
            "/checkout",
            post(eventflow_payments::http::handlers::checkout::start_checkout),
        )
        .route(
            "/payments/verify",
            get(eventflow_payments::http::handlers::verification::verify_payment),
        )
        .route(
            "/payments",
            get(eventflow_payments::http::handlers::payments::list_payments),
        )
        .route(
            "/payments/stats",
            get(eventflow_payments::http::handlers::payments::stats),
        )
        .route(
            "/payments/:reference",
            get(eventflow_payments::http::handlers::payments::get_payment),
        )
        .route(
            "/payments/:reference/receipt",
            get(eventflow_payments::http::handlers::receipts::download_receipt),
        )
        .route(
            "/events/:event_id/payments",
            get(eventflow_payments::http::handlers::payments::list_event_payments),
        )
        .merge(admin_routes)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
