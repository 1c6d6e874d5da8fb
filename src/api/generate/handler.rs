// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation endpoint handler

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::ImageFormat;
use std::io::Cursor;
use tracing::{debug, info, warn};

use super::request::GenerateRequest;
use super::response::GenerateResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /generate - Relay a text prompt to the inference provider
///
/// Pipeline:
/// 1. Require a configured HF API key (500 if absent, no upstream call)
/// 2. Call the provider's text-to-image capability
/// 3. Encode the returned bitmap as PNG, then base64
/// 4. Collapse any failure into a generic upstream error
pub async fn generate_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    debug!(
        "Image generation request received: prompt_len={}",
        request.prompt.len()
    );

    // 1. Credential guard, checked before touching the provider
    if state.settings.api_key.is_none() {
        warn!("Image generation rejected: HF_API_KEY not configured");
        return Err(ApiError::MissingApiKey);
    }

    // 2. Generate image
    let image = state
        .provider
        .text_to_image(&request.prompt, &state.settings.model_id)
        .await
        .map_err(|e| {
            warn!("HF error: {}", e);
            ApiError::Upstream
        })?;

    // 3. Bitmap -> PNG bytes -> base64
    let mut png_bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(|e| {
            warn!("PNG encoding failed: {}", e);
            ApiError::Upstream
        })?;

    let image_base64 = STANDARD.encode(&png_bytes);

    info!(
        "Image generated: model={}, png_bytes={}",
        state.settings.model_id,
        png_bytes.len()
    );

    Ok(Json(GenerateResponse { image_base64 }))
}
