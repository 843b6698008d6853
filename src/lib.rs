//! Pousada reservation pricing.
//!
//! Library and HTTP service that price hotel stays from a catalog of rooms,
//! room types and date/weekday-scoped pricing rules.

pub mod config;
pub mod dates;
pub mod error;
pub mod models;
pub mod pricing;
pub mod store;

use axum::{routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::CatalogError;
use crate::pricing::responses::HealthResponse;
use crate::pricing::PricingOptions;
use crate::store::CatalogStore;

/// Shared state for request handlers
#[derive(Clone)]
pub struct AppState {
    pub store: CatalogStore,
    pub pricing: PricingOptions,
    pub currency: String,
}

/// Build application state from configuration, loading the catalog file if one is set
pub async fn build_state(config: &Config) -> Result<AppState, CatalogError> {
    let store = match &config.catalog_path {
        Some(path) => CatalogStore::load_from_file(path).await?,
        None => {
            tracing::info!("No catalog file configured, using the demo catalog");
            CatalogStore::default()
        }
    };

    Ok(AppState {
        store,
        pricing: config.pricing,
        currency: config.currency.clone(),
    })
}

/// Full application router
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(pricing::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Install the global tracing subscriber, honouring `RUST_LOG`
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pousada_pricing=info,tower_http=info")),
        )
        .init();
}
