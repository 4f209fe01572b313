// ABOUTME: Google Gemini provider for the insight gateway with SSE streaming support
// ABOUTME: Calls generateContent and streamGenerateContent over HTTPS and maps API failures to error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Gemini Provider
//!
//! Implementation of [`LlmProvider`] for Google's Gemini models.
//!
//! ## Configuration
//!
//! Set `GEMINI_API_KEY` with a key from Google AI Studio. An empty key is
//! accepted at construction; the API then answers 401/403, which surfaces as
//! `ExternalAuthFailed` and goes through the normal fallback path.
//!
//! ## Example
//!
//! ```rust,no_run
//! use numerology_insights::config::ProviderConfig;
//! use numerology_insights::errors::AppError;
//! use numerology_insights::llm::{ChatRequest, GeminiProvider, LlmProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let provider = GeminiProvider::new(ProviderConfig::from_env()?);
//!     let request = ChatRequest::prompt("What does life path 7 mean?");
//!     let response = provider.complete(&request).await?;
//!     println!("{}", response.content);
//!     Ok(())
//! }
//! ```

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};

use super::sse_parser::create_sse_stream;
use super::{
    ChatMessage, ChatRequest, ChatResponse, ChatStream, LlmCapabilities, LlmProvider, MessageRole,
    StreamChunk,
};
use crate::config::llm::{ProviderConfig, DEFAULT_PRIMARY_MODEL};
use crate::errors::{AppError, ErrorCode};

const PROVIDER_NAME: &str = "Gemini";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// Content structure for Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

/// Text part of a content block
#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    #[serde(default)]
    text: Option<String>,
}

/// Generation configuration
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    candidate_count: u32,
}

/// Gemini API response structure, also used for each streamed event
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    usage_metadata: Option<UsageMetadata>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

/// Usage metadata from Gemini API response
#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    prompt: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    candidates: Option<u32>,
    #[serde(rename = "totalTokenCount")]
    total: Option<u32>,
}

/// API error response from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

impl GeminiResponse {
    fn first_candidate(&self) -> Option<&Candidate> {
        self.candidates.as_ref().and_then(|c| c.first())
    }

    /// Concatenated text of every part of the first candidate
    fn text(&self) -> String {
        self.first_candidate()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn finish_reason(&self) -> Option<String> {
        self.first_candidate().and_then(|c| c.finish_reason.clone())
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini LLM provider
#[derive(Clone)]
pub struct GeminiProvider {
    config: ProviderConfig,
    client: Client,
    default_model: String,
}

impl GeminiProvider {
    /// Create a provider from explicit settings
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            client: Client::new(),
            default_model: DEFAULT_PRIMARY_MODEL.to_owned(),
        }
    }

    /// Set a custom default model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    const fn convert_role(role: MessageRole) -> &'static str {
        match role {
            MessageRole::User => "user",
            MessageRole::Assistant => "model",
        }
    }

    /// Build the API URL for a model and method
    fn build_url(&self, model: &str, method: &str) -> String {
        format!("{}/models/{model}:{method}", self.config.base_url)
    }

    fn convert_messages(messages: &[ChatMessage]) -> Vec<GeminiContent> {
        messages
            .iter()
            .map(|message| GeminiContent {
                role: Some(Self::convert_role(message.role).to_owned()),
                parts: vec![ContentPart {
                    text: Some(message.content.clone()),
                }],
            })
            .collect()
    }

    fn build_gemini_request(&self, request: &ChatRequest) -> GeminiRequest {
        let generation_config = self.config.temperature.map(|temperature| GenerationConfig {
            temperature,
            candidate_count: 1,
        });

        GeminiRequest {
            contents: Self::convert_messages(&request.messages),
            generation_config,
        }
    }

    /// Map a transport failure before any status was received
    fn map_transport_error(error: &reqwest::Error) -> AppError {
        let code = if error.is_connect() || error.is_timeout() {
            ErrorCode::ExternalServiceUnavailable
        } else {
            ErrorCode::ExternalServiceError
        };
        AppError::new(code, format!("{PROVIDER_NAME} request failed: {error}"))
    }

    /// Map API error status to appropriate error type
    fn map_api_error(status: u16, response_text: &str) -> AppError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);

        match status {
            401 | 403 => AppError::new(
                ErrorCode::ExternalAuthFailed,
                format!("{PROVIDER_NAME} rejected the API key ({status}): {message}"),
            ),
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                Self::extract_quota_message(&message),
            ),
            500..=599 => AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                format!("{PROVIDER_NAME} unavailable ({status}): {message}"),
            ),
            _ => AppError::external_service(PROVIDER_NAME, format!("API error ({status}): {message}")),
        }
    }

    /// Turn Gemini's "Please retry in 6.4s." hint into a friendly message
    fn extract_quota_message(message: &str) -> String {
        const RETRY_HINT: &str = "Please retry in ";

        let seconds = message
            .find(RETRY_HINT)
            .map(|pos| &message[pos + RETRY_HINT.len()..])
            .and_then(|rest| rest.split_once('s'))
            .and_then(|(value, _)| value.parse::<f64>().ok());

        match seconds {
            Some(seconds) => format!(
                "AI service quota exceeded. Please try again in {} seconds.",
                seconds.ceil() as u64
            ),
            None => "AI service quota exceeded. Please wait a moment and try again.".to_owned(),
        }
    }

    /// Parse one streamed event into a chunk
    fn parse_stream_event(data: &str) -> Option<Result<StreamChunk, AppError>> {
        match serde_json::from_str::<GeminiResponse>(data) {
            Ok(event) => {
                if let Some(error) = event.error {
                    return Some(Err(AppError::external_service(PROVIDER_NAME, error.message)));
                }
                let finish_reason = event.finish_reason();
                Some(Ok(StreamChunk {
                    delta: event.text(),
                    is_final: finish_reason.is_some(),
                    finish_reason,
                }))
            }
            Err(e) => {
                warn!(error = %e, "Failed to parse streaming chunk");
                None
            }
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn display_name(&self) -> &'static str {
        "Google Gemini"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::STREAMING
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.default_model)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);
        let url = self.build_url(model, "generateContent");
        let gemini_request = self.build_gemini_request(request);

        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| Self::map_transport_error(&e))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| Self::map_transport_error(&e))?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, "Failed to parse Gemini response");
                AppError::external_service(PROVIDER_NAME, format!("unreadable response: {e}"))
            })?;

        if let Some(error) = gemini_response.error {
            return Err(AppError::external_service(PROVIDER_NAME, error.message));
        }

        let content = gemini_response.text();
        if content.trim().is_empty() {
            return Err(AppError::empty_response(model));
        }

        let usage = gemini_response.usage_metadata.as_ref();
        debug!(
            chars = content.len(),
            prompt_tokens = usage.and_then(|u| u.prompt),
            reply_tokens = usage.and_then(|u| u.candidates),
            total_tokens = usage.and_then(|u| u.total),
            "Received Gemini response"
        );

        Ok(ChatResponse {
            content,
            model: model.to_owned(),
            finish_reason: gemini_response.finish_reason(),
        })
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.default_model)))]
    async fn complete_stream(&self, request: &ChatRequest) -> Result<ChatStream, AppError> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);
        let url = self.build_url(model, "streamGenerateContent");
        let gemini_request = self.build_gemini_request(request);

        debug!("Starting streaming request to Gemini API");

        let response = self
            .client
            .post(&url)
            .query(&[("alt", "sse"), ("key", self.config.api_key.as_str())])
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| Self::map_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_owned());
            error!(status = %status, "Gemini streaming API error");
            return Err(Self::map_api_error(status.as_u16(), &error_text));
        }

        Ok(create_sse_stream(
            response.bytes_stream(),
            Self::parse_stream_event,
            PROVIDER_NAME,
        ))
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("default_model", &self.default_model)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
