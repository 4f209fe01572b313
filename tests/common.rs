// ABOUTME: Shared test utilities for gateway integration tests
// ABOUTME: Provides a scripted LLM provider that records every call and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `numerology_insights`

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use chrono::NaiveDate;
use futures_util::{stream, StreamExt};
use numerology_insights::config::ModelConfig;
use numerology_insights::engine::NumerologyProfile;
use numerology_insights::errors::{AppError, ErrorCode};
use numerology_insights::gateway::InsightGateway;
use numerology_insights::llm::{
    ChatRequest, ChatResponse, ChatStream, LlmCapabilities, LlmProvider, StreamChunk,
};

pub const PRIMARY: &str = "primary-model";
pub const FALLBACK: &str = "fallback-model";

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// One scripted outcome, consumed per call in order
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Answer with this text; streamed replies split it into small fragments
    Reply(String),
    /// Fail with this code
    Fail(ErrorCode),
}

impl Scripted {
    pub fn reply(text: impl Into<String>) -> Self {
        Self::Reply(text.into())
    }
}

/// A recorded call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub model: String,
    pub prompt: String,
    pub streamed: bool,
}

/// Counts chunks handed out and flags the stream released once the stream
/// owning it is dropped
#[derive(Debug)]
struct StreamTracker {
    released: Arc<AtomicBool>,
    pulled: Arc<AtomicUsize>,
}

impl StreamTracker {
    fn record_pull(&self) {
        self.pulled.fetch_add(1, Ordering::SeqCst);
    }
}

impl Drop for StreamTracker {
    fn drop(&mut self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

/// Deterministic provider that replays a script and records calls
#[derive(Debug)]
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<Call>>,
    capabilities: LlmCapabilities,
    stream_released: Arc<AtomicBool>,
    chunks_pulled: Arc<AtomicUsize>,
}

impl ScriptedProvider {
    pub fn new(script: impl IntoIterator<Item = Scripted>) -> Arc<Self> {
        Self::with_capabilities(script, LlmCapabilities::STREAMING)
    }

    /// Provider that cannot stream, so streamed replies arrive whole
    pub fn buffered(script: impl IntoIterator<Item = Scripted>) -> Arc<Self> {
        Self::with_capabilities(script, LlmCapabilities::empty())
    }

    fn with_capabilities(
        script: impl IntoIterator<Item = Scripted>,
        capabilities: LlmCapabilities,
    ) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
            capabilities,
            stream_released: Arc::new(AtomicBool::new(false)),
            chunks_pulled: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Whether the last opened stream has been dropped
    pub fn stream_released(&self) -> bool {
        self.stream_released.load(Ordering::SeqCst)
    }

    /// Chunks handed out by the last opened stream, including the final empty one
    pub fn chunks_pulled(&self) -> usize {
        self.chunks_pulled.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn models_called(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.model).collect()
    }

    fn next(&self, request: &ChatRequest, streamed: bool) -> Result<String, AppError> {
        let model = request.model.clone().unwrap_or_default();
        let prompt = request
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        self.calls.lock().unwrap().push(Call {
            model: model.clone(),
            prompt,
            streamed,
        });

        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Reply(text)) => Ok(text),
            Some(Scripted::Fail(code)) => Err(AppError::new(code, format!("scripted failure from {model}"))),
            None => Err(AppError::internal("script exhausted")),
        }
    }
}

/// Split text into fragments of at most `size` characters
pub fn fragments(text: &str, size: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars.chunks(size).map(|c| c.iter().collect()).collect()
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &'static str {
        "Scripted Test Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    fn default_model(&self) -> &str {
        PRIMARY
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let content = self.next(request, false)?;
        Ok(ChatResponse {
            content,
            model: request.model.clone().unwrap_or_default(),
            finish_reason: Some("STOP".to_owned()),
        })
    }

    async fn complete_stream(&self, request: &ChatRequest) -> Result<ChatStream, AppError> {
        let content = self.next(request, true)?;
        let mut chunks: Vec<Result<StreamChunk, AppError>> = fragments(&content, 7)
            .into_iter()
            .map(|delta| {
                Ok(StreamChunk {
                    delta,
                    is_final: false,
                    finish_reason: None,
                })
            })
            .collect();
        chunks.push(Ok(StreamChunk {
            delta: String::new(),
            is_final: true,
            finish_reason: Some("STOP".to_owned()),
        }));

        self.stream_released.store(false, Ordering::SeqCst);
        self.chunks_pulled.store(0, Ordering::SeqCst);
        let tracker = StreamTracker {
            released: Arc::clone(&self.stream_released),
            pulled: Arc::clone(&self.chunks_pulled),
        };
        let chunks = stream::iter(chunks).map(move |chunk| {
            tracker.record_pull();
            chunk
        });
        Ok(Box::pin(chunks))
    }
}

/// Gateway over a scripted provider with distinct model names
pub fn gateway(provider: &Arc<ScriptedProvider>) -> InsightGateway {
    init_test_logging();
    InsightGateway::new(provider.clone(), ModelConfig::new(PRIMARY, FALLBACK))
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn today() -> NaiveDate {
    date(2026, 10, 16)
}

pub fn john() -> NumerologyProfile {
    NumerologyProfile::calculate_on("John Smith", date(1990, 11, 22), today()).unwrap()
}

pub fn ada() -> NumerologyProfile {
    NumerologyProfile::calculate_on("Ada Lovelace", date(1815, 12, 10), today()).unwrap()
}
