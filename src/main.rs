mod config;
mod routes;
mod state;

use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env()?;
    let default_network = config.networks.default_network();
    if !default_network.is_deployed() {
        tracing::warn!(network = %default_network.name, "contract address not configured; wallet actions will fail");
    }

    let state = state::AppState::new(&config);
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, chain_id = config.networks.default_chain_id, "arbifreelance listening");
    axum::serve(listener, app).await?;
    Ok(())
}
