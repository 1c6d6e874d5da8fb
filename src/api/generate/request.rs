// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation request type

use serde::{Deserialize, Serialize};

/// Request for image generation via POST /generate.
///
/// Only structural presence of `prompt` is checked (by deserialization);
/// length and content policy are the upstream provider's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Text prompt describing the desired image
    pub prompt: String,
}
