// ABOUTME: Prompt/response gateway holding the injected provider and model pair
// ABOUTME: Every insight and chat operation reaches the remote model through this type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Insight Gateway
//!
//! Holds an `Arc<dyn LlmProvider>` and the primary/fallback model names. There
//! is no global client: production code builds one from the environment with
//! [`InsightGateway::from_env`], tests pass a scripted provider to
//! [`InsightGateway::new`]. The gateway is `Send + Sync` and cheap to clone.
//!
//! The operations themselves live next to their records in
//! [`crate::insights`].

use std::sync::Arc;

use tracing::info;

use crate::config::{GatewayConfig, ModelConfig};
use crate::errors::AppResult;
use crate::llm::{generate_with_fallback, GeminiProvider, LlmProvider};

/// Entry point for insight and chat operations
#[derive(Clone)]
pub struct InsightGateway {
    provider: Arc<dyn LlmProvider>,
    models: ModelConfig,
}

impl InsightGateway {
    /// Create a gateway over an existing provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, models: ModelConfig) -> Self {
        Self { provider, models }
    }

    /// Create a Gemini-backed gateway from loaded configuration
    #[must_use]
    pub fn from_config(config: GatewayConfig) -> Self {
        let provider = GeminiProvider::new(config.provider)
            .with_default_model(config.models.primary_model.clone());
        info!(
            provider = provider.display_name(),
            primary = %config.models.primary_model,
            fallback = %config.models.fallback_model,
            "insight gateway ready"
        );
        Self::new(Arc::new(provider), config.models)
    }

    /// Create a Gemini-backed gateway from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if an environment value cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self::from_config(GatewayConfig::from_env()?))
    }

    /// The injected provider
    #[must_use]
    pub fn provider(&self) -> &dyn LlmProvider {
        self.provider.as_ref()
    }

    /// Primary and fallback model names
    #[must_use]
    pub const fn models(&self) -> &ModelConfig {
        &self.models
    }

    /// Generate raw reply text with the primary/fallback policy
    ///
    /// # Errors
    ///
    /// Returns the fallback model's error when both models fail or reply with
    /// nothing but whitespace.
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        generate_with_fallback(self.provider(), &self.models, prompt).await
    }
}

impl std::fmt::Debug for InsightGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightGateway")
            .field("provider", &self.provider.name())
            .field("models", &self.models)
            .finish()
    }
}
