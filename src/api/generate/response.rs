// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation response type

use serde::{Deserialize, Serialize};

/// Response from image generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Base64-encoded PNG bytes of the generated image
    pub image_base64: String,
}
