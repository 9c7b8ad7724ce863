mod config;

use std::sync::Arc;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use pitchside_api::{create_routes, AppState};
use pitchside_store::{seed_sample_data, Store};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pitchside=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🏏 Starting Pitchside Cricket Prediction Dashboard");

    // Load configuration
    let config = AppConfig::new()?;
    info!("✅ Configuration loaded successfully");
    info!("🌐 Server will bind to: {}", config.server_addr());

    // The store is the single source of truth for the process lifetime.
    let store = Arc::new(Store::new());
    if config.data.seed_sample_data {
        seed_sample_data(&store);
        info!("📊 Sample IPL data seeded");
    }

    let rng = match config.engine.rng_seed {
        Some(seed) => {
            info!("🎲 Prediction RNG seeded with {}", seed);
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_entropy(),
    };

    let state = AppState::new(store, rng);
    let app = create_routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(config.server_addr()).await?;
    info!("✅ Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
