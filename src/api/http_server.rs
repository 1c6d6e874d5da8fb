// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use axum::{
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};

use super::generate::generate_handler;
use crate::config::Settings;
use crate::inference::TextToImage;

/// Shared server state: immutable settings plus the provider handle.
/// Cheap to clone per request; no interior mutability.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub provider: Arc<dyn TextToImage>,
}

impl AppState {
    pub fn new(settings: Settings, provider: Arc<dyn TextToImage>) -> Self {
        Self {
            settings: Arc::new(settings),
            provider,
        }
    }
}

/// Build the application router. Split out from `start_server` so tests can
/// drive it without binding a socket.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/generate", post(generate_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn start_server(state: AppState) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], state.settings.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, router(state)).await?;

    Ok(())
}

async fn root_handler() -> impl IntoResponse {
    Json(json!({ "message": "AI Image Generator backend running!" }))
}
