// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON body returned for every failed request: `{"detail": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Closed set of failures surfaced by the API.
///
/// Both map to a 500 with a fixed detail string. The underlying failure is
/// logged server-side and never forwarded to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No upstream credential configured; detected before any network call.
    #[error("HF API key missing")]
    MissingApiKey,
    /// Provider call or image encoding failed.
    #[error("AI API error")]
    Upstream,
}

impl ApiError {
    /// Caller-visible detail string, fixed per variant.
    pub fn detail(&self) -> &'static str {
        match self {
            ApiError::MissingApiKey => "HF API key missing",
            ApiError::Upstream => "AI API error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingApiKey | ApiError::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.detail().to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
