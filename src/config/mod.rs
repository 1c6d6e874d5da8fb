// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Process configuration, read once from the environment at startup

use std::env;

/// Model used when HF_MODEL_ID is not set
pub const DEFAULT_MODEL_ID: &str = "black-forest-labs/FLUX.1-schnell";

/// Hugging Face inference endpoint used when HF_API_BASE is not set
pub const DEFAULT_API_BASE: &str = "https://router.huggingface.co/hf-inference";

const DEFAULT_PORT: u16 = 8000;

/// Immutable process-wide settings. Built once in `main` and shared through
/// the server state; never mutated after startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Upstream API credential. `None` means every /generate call fails
    /// with a configuration error until the process is restarted with a key.
    pub api_key: Option<String>,
    pub model_id: String,
    pub api_base: String,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_key: None,
            model_id: DEFAULT_MODEL_ID.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("HF_API_KEY").ok().filter(|key| !key.is_empty());
        let model_id =
            env::var("HF_MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string());
        let api_base =
            env::var("HF_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let port = env::var("API_PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Settings {
            api_key,
            model_id,
            api_base,
            port,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}
