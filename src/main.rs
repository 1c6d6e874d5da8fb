// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use fabstir_image_relay::{
    api::http_server::{start_server, AppState},
    config::Settings,
    inference::HfClient,
};
use std::{env, sync::Arc};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    if dotenv_loaded {
        info!(".env file loaded");
    } else {
        warn!("No .env file found, using system environment variables");
    }

    let settings = Settings::from_env();

    if settings.api_key.is_none() {
        warn!("HF_API_KEY not set; /generate will fail until a key is configured");
    }
    info!(
        "Relay configured: model={}, endpoint={}",
        settings.model_id, settings.api_base
    );

    let provider = Arc::new(HfClient::new(&settings.api_base, settings.api_key.clone())?);
    let state = AppState::new(settings, provider);

    start_server(state).await
}
