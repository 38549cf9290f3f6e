//! HTTP API server for placing and modifying orders.
//!
//! Provides REST endpoints over the order workflow, with structured logging
//! (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use domain::{Customer, Discount, InMemoryRepositories, Money, Product, Store};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/orders", post(routes::orders::create))
        .route(
            "/orders/{id}",
            get(routes::orders::get).put(routes::orders::modify),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state backed by fresh in-memory repositories.
///
/// The repositories are returned alongside the state so callers can seed
/// or inspect them.
pub fn create_default_state() -> (Arc<AppState>, InMemoryRepositories) {
    let repositories = InMemoryRepositories::new();
    let state = Arc::new(AppState {
        order_service: repositories.service(),
    });
    (state, repositories)
}

/// Seeds a small catalog for local runs.
///
/// Includes one inactive customer, store and discount so every rejection
/// path can be exercised by hand.
pub async fn seed_demo_data(repositories: &InMemoryRepositories) {
    for customer in [
        Customer::new("cust1", true),
        Customer::new("cust2", true),
        Customer::new("cust-inactive", false),
    ] {
        repositories.customers.insert(customer).await;
    }

    for store in [
        Store::new("store1", true),
        Store::new("store2", true),
        Store::new("store-closed", false),
    ] {
        repositories.stores.insert(store).await;
    }

    for discount in [
        Discount::new("DISC10", true),
        Discount::new("DISC20", true),
        Discount::new("EXPIRED", false),
    ] {
        repositories.discounts.insert(discount).await;
    }

    for product in [
        Product::new("prod1", Money::from_dollars(100)),
        Product::new("prod2", Money::from_dollars(200)),
        Product::new("prod3", Money::from_dollars(150)),
        Product::new("prod-free", Money::zero()),
    ] {
        repositories.products.insert(product).await;
    }

    tracing::info!("seeded demo catalog");
}
