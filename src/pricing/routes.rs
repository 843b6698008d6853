//! Pricing and catalog route handlers

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;
use crate::models::{Catalog, CatalogStats};
use crate::AppState;

use super::requests::QuoteRequest;
use super::responses::QuoteResponse;
use super::services::quote_stay;

/// Routes for stay pricing and the catalog it prices against
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pricing/quote", post(quote))
        .route("/api/catalog", get(get_catalog).put(replace_catalog))
}

/// Price a stay against the inline catalog, or the store snapshot
pub async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    let stay = request.stay();
    let catalog = match request.catalog {
        Some(inline) => Arc::new(inline),
        None => state.store.snapshot().await,
    };

    let quote = quote_stay(stay, request.room_id, &catalog, &state.pricing)?;
    tracing::debug!(
        "Quoted room {} for {} night(s) from {}: {}",
        quote.room_id,
        quote.nights.len(),
        stay.checkin,
        quote.total
    );

    Ok(Json(QuoteResponse::new(quote, &state.currency)))
}

/// Current catalog snapshot
pub async fn get_catalog(State(state): State<AppState>) -> Json<Catalog> {
    let snapshot = state.store.snapshot().await;
    Json(Catalog::clone(&snapshot))
}

/// Replace the whole catalog
pub async fn replace_catalog(
    State(state): State<AppState>,
    Json(catalog): Json<Catalog>,
) -> Result<Json<CatalogStats>> {
    let stats = state.store.replace(catalog).await?;
    Ok(Json(stats))
}
