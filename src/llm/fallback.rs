// ABOUTME: Primary/fallback model policy for remote generation calls
// ABOUTME: Tries the primary model, then the fallback model exactly once, with no backoff
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Model Fallback
//!
//! Every remote call goes through a two-step state machine:
//!
//! ```text
//! TryingPrimary --ok--> Succeeded
//!       |
//!     error
//!       v
//! TryingFallback --ok--> Succeeded
//!       |
//!     error
//!       v
//!    Failed (fallback error propagates)
//! ```
//!
//! An empty or whitespace-only reply counts as a failure. No delay, no third
//! attempt.
//!
//! A provider without [`STREAMING`](super::LlmCapabilities::STREAMING) still serves streamed
//! replies: the whole reply is generated and delivered as one final chunk.

use std::future::Future;

use tracing::{debug, error, warn};

use super::{ChatRequest, ChatStream, LlmProvider, StreamChunk};
use crate::config::ModelConfig;
use crate::errors::{AppError, AppResult};

/// Position in the primary/fallback sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    /// Calling the primary model
    TryingPrimary,
    /// Primary failed; calling the fallback model
    TryingFallback,
    /// A model answered
    Succeeded,
    /// Both models failed
    Failed,
}

impl AttemptState {
    /// Model to call in this state, `None` once terminal
    #[must_use]
    pub fn model<'a>(&self, models: &'a ModelConfig) -> Option<&'a str> {
        match self {
            Self::TryingPrimary => Some(&models.primary_model),
            Self::TryingFallback => Some(&models.fallback_model),
            Self::Succeeded | Self::Failed => None,
        }
    }

    /// Transition after the current attempt failed
    #[must_use]
    pub const fn on_failure(self) -> Self {
        match self {
            Self::TryingPrimary => Self::TryingFallback,
            Self::TryingFallback | Self::Failed => Self::Failed,
            Self::Succeeded => Self::Succeeded,
        }
    }

    /// Transition after the current attempt succeeded
    #[must_use]
    pub const fn on_success(self) -> Self {
        match self {
            Self::TryingPrimary | Self::TryingFallback | Self::Succeeded => Self::Succeeded,
            Self::Failed => Self::Failed,
        }
    }

    /// Whether no further attempt will be made
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// Drive `attempt` through the primary/fallback sequence
///
/// # Errors
///
/// Returns the fallback attempt's error when both attempts fail.
pub async fn run_with_fallback<T, F, Fut>(models: &ModelConfig, mut attempt: F) -> AppResult<T>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let mut state = AttemptState::TryingPrimary;
    let mut last_error = None;

    while let Some(model) = state.model(models) {
        match attempt(model.to_owned()).await {
            Ok(value) => {
                state = state.on_success();
                debug!(model, ?state, "remote call succeeded");
                return Ok(value);
            }
            Err(e) => {
                state = state.on_failure();
                if state == AttemptState::TryingFallback {
                    warn!(
                        model,
                        fallback = %models.fallback_model,
                        error = %e,
                        "primary model failed, trying fallback"
                    );
                } else {
                    error!(model, error = %e, "fallback model failed");
                }
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| AppError::internal("no model was attempted")))
}

/// Generate a complete text reply with the fallback policy
///
/// # Errors
///
/// Returns the fallback model's error when both models fail or return no text.
pub async fn generate_with_fallback(
    provider: &dyn LlmProvider,
    models: &ModelConfig,
    prompt: &str,
) -> AppResult<String> {
    run_with_fallback(models, |model| async move {
        let request = ChatRequest::prompt(prompt).with_model(model.as_str());
        let response = provider.complete(&request).await?;
        if response.content.trim().is_empty() {
            return Err(AppError::empty_response(model));
        }
        debug!(
            model = %response.model,
            finish_reason = response.finish_reason.as_deref(),
            "reply received"
        );
        Ok(response.content)
    })
    .await
}

/// Open a streamed reply with the fallback policy
///
/// Only opening the stream is retried; errors after fragments start flowing
/// are delivered through the stream.
///
/// # Errors
///
/// Returns the fallback model's error when neither stream could be opened.
pub async fn stream_with_fallback(
    provider: &dyn LlmProvider,
    models: &ModelConfig,
    prompt: &str,
) -> AppResult<ChatStream> {
    let streaming = provider.capabilities().supports_streaming();
    if !streaming {
        debug!(provider = provider.name(), "provider cannot stream, buffering reply");
    }

    run_with_fallback(models, |model| async move {
        let request = ChatRequest::prompt(prompt).with_model(model.as_str());
        if streaming {
            return provider.complete_stream(&request).await;
        }

        let response = provider.complete(&request).await?;
        if response.content.trim().is_empty() {
            return Err(AppError::empty_response(model));
        }
        let chunk = StreamChunk {
            delta: response.content,
            is_final: true,
            finish_reason: response.finish_reason,
        };
        let stream: ChatStream = Box::pin(tokio_stream::once(Ok(chunk)));
        Ok(stream)
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_state_transitions() {
        let start = AttemptState::TryingPrimary;
        assert_eq!(start.on_failure(), AttemptState::TryingFallback);
        assert_eq!(start.on_failure().on_failure(), AttemptState::Failed);
        assert_eq!(start.on_success(), AttemptState::Succeeded);
        assert_eq!(start.on_failure().on_success(), AttemptState::Succeeded);
        assert!(AttemptState::Failed.is_terminal());
        assert!(!AttemptState::TryingFallback.is_terminal());
    }

    #[test]
    fn test_state_models() {
        let models = ModelConfig::new("primary", "backup");
        assert_eq!(AttemptState::TryingPrimary.model(&models), Some("primary"));
        assert_eq!(AttemptState::TryingFallback.model(&models), Some("backup"));
        assert_eq!(AttemptState::Succeeded.model(&models), None);
    }

    #[tokio::test]
    async fn test_run_stops_after_two_attempts() {
        let models = ModelConfig::new("primary", "backup");
        let mut seen = Vec::new();
        let result: AppResult<()> = run_with_fallback(&models, |model| {
            seen.push(model.clone());
            async move { Err(AppError::external_service("test", model)) }
        })
        .await;

        assert_eq!(seen, vec!["primary".to_owned(), "backup".to_owned()]);
        let error = result.unwrap_err();
        assert_eq!(error.code, ErrorCode::ExternalServiceError);
        assert!(error.message.contains("backup"));
    }
}
