use pousada_pricing::{app_router, build_state, config::Config, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();

    let state = build_state(&config).await?;
    tracing::info!(
        "Catalog ready: {:?}, currency {}, negative totals {:?}, max stay {} nights",
        state.store.stats().await,
        state.currency,
        state.pricing.negative_totals,
        state.pricing.max_stay_nights
    );

    let router = app_router(state);
    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
