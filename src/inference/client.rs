// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Hugging Face hosted inference client for text-to-image generation

use anyhow::Result;
use async_trait::async_trait;
use image::DynamicImage;
use reqwest::{header, Client};
use std::time::Duration;
use tracing::{debug, info};

/// Synchronous (request/response) text-to-image capability.
///
/// The handler is written against this trait so tests can substitute a
/// stub provider; `HfClient` is the production implementation.
#[async_trait]
pub trait TextToImage: Send + Sync {
    /// Generate one image for `prompt` using `model`, returning the decoded
    /// bitmap. Any network, provider-side, or decode problem is an error.
    async fn text_to_image(&self, prompt: &str, model: &str) -> Result<DynamicImage>;
}

/// Client for the Hugging Face hosted inference API.
///
/// The upstream router picks the concrete serving backend for the model;
/// this client only speaks the plain `{"inputs": prompt}` -> image-bytes
/// contract.
pub struct HfClient {
    client: Client,
    api_base: String,
    api_key: Option<String>,
}

impl HfClient {
    /// Create a new HfClient. The key is optional so the process can start
    /// without one; callers are expected to guard before invoking.
    pub fn new(api_base: &str, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        let api_base = api_base.trim_end_matches('/').to_string();
        info!("Hugging Face client configured: endpoint={}", api_base);

        Ok(Self {
            client,
            api_base,
            api_key,
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

#[async_trait]
impl TextToImage for HfClient {
    async fn text_to_image(&self, prompt: &str, model: &str) -> Result<DynamicImage> {
        let url = format!("{}/models/{}", self.api_base, model);
        debug!("text-to-image POST {}", url);

        let mut request = self
            .client
            .post(&url)
            .header(header::ACCEPT, "image/png")
            .json(&serde_json::json!({ "inputs": prompt }));
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "inference API returned {}: {}",
                status,
                text
            ));
        }

        let bytes = response.bytes().await?;
        let image = image::load_from_memory(&bytes)?;
        Ok(image)
    }
}
