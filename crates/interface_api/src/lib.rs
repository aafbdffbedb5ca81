//! HTTP API Layer
//!
//! This crate exposes the policy ledger over HTTP using Axum.
//!
//! # Architecture
//!
//! - **Dispatch**: maps function names onto the ledger services
//! - **Handlers**: invoke, query, and health endpoints
//! - **Middleware**: request tracing and audit logging
//! - **Error Handling**: one status code per error kind
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::new(store, config));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dispatch;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use core_kernel::LedgerStore;

use crate::config::ApiConfig;
use crate::dispatch::Dispatcher;
use crate::handlers::{health, ledger};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub config: ApiConfig,
}

impl AppState {
    /// Builds the services over `store` using the configured balance lookup
    pub fn new(store: Arc<dyn LedgerStore>, config: ApiConfig) -> Self {
        Self {
            dispatcher: Arc::new(Dispatcher::new(store, config.payment_balance_lookup)),
            config,
        }
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let api_routes = Router::new()
        .route("/invoke/:function", post(ledger::invoke))
        .route("/query/:function", post(ledger::query))
        .layer(axum_middleware::from_fn(audit_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}
