// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod inference;

pub use api::{ApiError, ErrorResponse, GenerateRequest, GenerateResponse};
pub use config::Settings;
pub use inference::{HfClient, TextToImage};
