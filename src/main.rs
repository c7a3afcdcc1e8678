//! Main entry point of the application.
//! Loads the configuration, prepares the templates and the password hasher,
//! and starts the web server with Axum.

use anyhow::Context;
use dotenv::dotenv;
use log::info;
use regform::{
    backend::{handlers::AppState, page, router::get_router},
    config::Config,
    registration::Validator,
    repository::LogRepository,
    utils::password_utils::Hasher,
};
use std::{net::SocketAddr, sync::Arc};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().context("Invalid configuration")?;
    let hasher = Hasher::new(config.hash_cost).context("Invalid password hashing cost")?;

    let state = Arc::new(AppState {
        hbs: page::registry().context("Could not register templates")?,
        validator: Validator::new(hasher),
        repository: Arc::new(LogRepository),
    });
    let app = get_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to open web server listener")?;

    axum::serve(listener, app)
        .await
        .context("Failed to bind Axum to listener")?;

    Ok(())
}
