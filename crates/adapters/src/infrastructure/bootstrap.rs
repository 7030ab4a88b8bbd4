//! Process bootstrap for hosting environments.
//!
//! The evaluators are invoked as callbacks by an external trigger; whatever
//! hosts them calls [`init`] once at cold start to load `.env`, set up
//! logging, and read the configuration.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::config::AppConfig;

/// Load `.env`, initialize tracing, and read the app configuration.
///
/// Safe to call in environments without a `.env` file; missing env vars fall
/// back to defaults.
pub fn init() -> AppConfig {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "statwatch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    AppConfig::from_env()
}
