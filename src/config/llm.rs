// ABOUTME: Primary/fallback model identifiers and Gemini provider settings
// ABOUTME: Loaded from environment variables with compiled-in defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! | Variable | Default |
//! |---|---|
//! | `GEMINI_API_KEY` | empty string |
//! | `NUMEROLOGY_PRIMARY_MODEL` | `gemini-2.5-pro` |
//! | `NUMEROLOGY_FALLBACK_MODEL` | `gemini-2.5-flash` |
//! | `NUMEROLOGY_LLM_BASE_URL` | Gemini `v1beta` endpoint |
//! | `NUMEROLOGY_LLM_TEMPERATURE` | unset (provider default) |

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};

/// Environment variable holding the Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Environment variable overriding the primary model
pub const PRIMARY_MODEL_ENV: &str = "NUMEROLOGY_PRIMARY_MODEL";
/// Environment variable overriding the fallback model
pub const FALLBACK_MODEL_ENV: &str = "NUMEROLOGY_FALLBACK_MODEL";
/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "NUMEROLOGY_LLM_BASE_URL";
/// Environment variable setting the sampling temperature
pub const TEMPERATURE_ENV: &str = "NUMEROLOGY_LLM_TEMPERATURE";

/// Model tried first for every request
pub const DEFAULT_PRIMARY_MODEL: &str = "gemini-2.5-pro";
/// Model tried once when the primary fails
pub const DEFAULT_FALLBACK_MODEL: &str = "gemini-2.5-flash";
/// Gemini generative language API root
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// The two remote models tried in sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model used first, and for chat
    pub primary_model: String,
    /// Model used once if the primary fails
    pub fallback_model: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            primary_model: DEFAULT_PRIMARY_MODEL.to_owned(),
            fallback_model: DEFAULT_FALLBACK_MODEL.to_owned(),
        }
    }
}

impl ModelConfig {
    /// Create a config naming both models
    #[must_use]
    pub fn new(primary_model: impl Into<String>, fallback_model: impl Into<String>) -> Self {
        Self {
            primary_model: primary_model.into(),
            fallback_model: fallback_model.into(),
        }
    }

    /// Load model names from the environment, keeping defaults for unset variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            primary_model: non_empty_env(PRIMARY_MODEL_ENV).unwrap_or(defaults.primary_model),
            fallback_model: non_empty_env(FALLBACK_MODEL_ENV).unwrap_or(defaults.fallback_model),
        }
    }
}

/// Settings for the HTTP provider
#[derive(Clone, PartialEq)]
pub struct ProviderConfig {
    /// API key; empty when not configured
    pub api_key: String,
    /// API root without trailing slash
    pub base_url: String,
    /// Optional sampling temperature
    pub temperature: Option<f32>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            temperature: None,
        }
    }
}

impl ProviderConfig {
    /// Load provider settings from the environment
    ///
    /// A missing API key is not an error here: the remote call fails later
    /// through the normal fallback path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the temperature is not a number in `0.0..=2.0`.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var(GEMINI_API_KEY_ENV).unwrap_or_default();
        if api_key.is_empty() {
            warn!("{GEMINI_API_KEY_ENV} is not set; remote calls will be rejected");
        }

        let base_url = non_empty_env(BASE_URL_ENV)
            .map_or_else(|| DEFAULT_BASE_URL.to_owned(), |url| url.trim_end_matches('/').to_owned());

        let temperature = non_empty_env(TEMPERATURE_ENV)
            .map(|raw| parse_temperature(&raw))
            .transpose()?;

        Ok(Self {
            api_key,
            base_url,
            temperature,
        })
    }
}

fn parse_temperature(raw: &str) -> AppResult<f32> {
    let value: f32 = raw.trim().parse().map_err(|_| {
        AppError::config_invalid(TEMPERATURE_ENV, format!("must be a number, got {raw:?}"))
    })?;
    if !(0.0..=2.0).contains(&value) {
        return Err(AppError::config_invalid(
            TEMPERATURE_ENV,
            format!("must be within 0.0..=2.0, got {value}"),
        ));
    }
    Ok(value)
}

impl Debug for ProviderConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .finish()
    }
}

/// Everything the gateway needs, collected from the environment
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    /// Primary and fallback model names
    pub models: ModelConfig,
    /// HTTP provider settings
    pub provider: ProviderConfig,
}

impl GatewayConfig {
    /// Load the full gateway configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if an environment value cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            models: ModelConfig::from_env(),
            provider: ProviderConfig::from_env()?,
        };
        debug!(
            primary = %config.models.primary_model,
            fallback = %config.models.fallback_model,
            base_url = %config.provider.base_url,
            "loaded gateway configuration"
        );
        Ok(config)
    }
}
