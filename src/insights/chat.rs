// ABOUTME: Profile-grounded chat: session context, prompt assembly, full and streamed replies
// ABOUTME: Stateless and stateful entry points render byte-identical prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Chat
//!
//! A chat turn is one prompt: the system context, the last few history
//! messages and the new message. Callers either pass a name and birth date on
//! every turn (stateless) or keep the [`SessionContext`] returned by
//! [`build_chat_context`] and pass it back (stateful). Both paths render the
//! same prompt text.
//!
//! Streamed replies are trimmed like full replies: leading whitespace is
//! dropped and trailing whitespace is held back until more text follows it,
//! so the joined fragments equal the non-streamed reply.

use std::pin::Pin;

use chrono::NaiveDate;
use futures_util::{stream, StreamExt};
use numerology_engine::NumerologyProfile;
use serde::{Deserialize, Serialize};
use tokio_stream::Stream;
use tracing::{debug, instrument};

use crate::errors::AppResult;
use crate::gateway::InsightGateway;
use crate::llm::prompts::{chat_prompt, system_context};
use crate::llm::{stream_with_fallback, ChatMessage};

/// Stream of reply text fragments in arrival order
///
/// Finite and not restartable. Dropping it releases the HTTP response.
pub type FragmentStream = Pin<Box<dyn Stream<Item = AppResult<String>> + Send>>;

/// Drop whitespace at both ends of the concatenated fragments, never yielding
/// an empty fragment
fn trim_fragments<S>(fragments: S) -> impl Stream<Item = AppResult<String>> + Send
where
    S: Stream<Item = AppResult<String>> + Unpin + Send,
{
    stream::unfold(
        (fragments, false, String::new()),
        |(mut fragments, mut started, mut pending)| async move {
            while let Some(item) = fragments.next().await {
                let raw = match item {
                    Ok(raw) => raw,
                    Err(e) => return Some((Err(e), (fragments, started, pending))),
                };
                let fragment = if started { raw.as_str() } else { raw.trim_start() };
                let body = fragment.trim_end();
                if body.is_empty() {
                    if started {
                        pending.push_str(fragment);
                    }
                    continue;
                }

                started = true;
                let mut out = std::mem::take(&mut pending);
                out.push_str(body);
                pending.push_str(&fragment[body.len()..]);
                return Some((Ok(out), (fragments, started, pending)));
            }
            None
        },
    )
}

/// Precomputed chat context, owned by the caller between turns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    /// Profile rendering plus conversational rules
    pub system_context: String,
    /// First token of the display name
    pub first_name: String,
}

impl SessionContext {
    /// Render the context for an existing profile
    #[must_use]
    pub fn from_profile(profile: &NumerologyProfile) -> Self {
        Self {
            system_context: system_context(profile),
            first_name: profile.first_name().to_owned(),
        }
    }

    /// Prompt for one turn
    #[must_use]
    pub fn prompt(&self, history: &[ChatMessage], message: &str) -> String {
        chat_prompt(&self.system_context, &self.first_name, history, message)
    }
}

/// Compute the profile once and render its chat context
///
/// # Errors
///
/// Returns `InvalidInput` if `name` contains no letters.
pub fn build_chat_context(name: &str, birth_date: NaiveDate) -> AppResult<SessionContext> {
    let profile = NumerologyProfile::calculate(name, birth_date)?;
    Ok(SessionContext::from_profile(&profile))
}

/// Prompt for one turn, recomputing the context from name and birth date
///
/// # Errors
///
/// Returns `InvalidInput` if `name` contains no letters.
pub fn stateless_chat_prompt(
    name: &str,
    birth_date: NaiveDate,
    history: &[ChatMessage],
    message: &str,
) -> AppResult<String> {
    Ok(build_chat_context(name, birth_date)?.prompt(history, message))
}

impl InsightGateway {
    /// Single chat reply, recomputing the context on each call
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a name without letters, or the fallback
    /// model's error if both models fail.
    pub async fn chat_response(
        &self,
        name: &str,
        birth_date: NaiveDate,
        history: &[ChatMessage],
        message: &str,
    ) -> AppResult<String> {
        let prompt = stateless_chat_prompt(name, birth_date, history, message)?;
        self.chat_reply(&prompt).await
    }

    /// Single chat reply from a caller-held context
    ///
    /// # Errors
    ///
    /// Returns the fallback model's error if both models fail.
    pub async fn chat_response_with_context(
        &self,
        context: &SessionContext,
        history: &[ChatMessage],
        message: &str,
    ) -> AppResult<String> {
        self.chat_reply(&context.prompt(history, message)).await
    }

    /// Streamed chat reply, recomputing the context on each call
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a name without letters, or the fallback
    /// model's error if neither stream could be opened.
    pub async fn chat_stream(
        &self,
        name: &str,
        birth_date: NaiveDate,
        history: &[ChatMessage],
        message: &str,
    ) -> AppResult<FragmentStream> {
        let prompt = stateless_chat_prompt(name, birth_date, history, message)?;
        self.open_fragment_stream(&prompt).await
    }

    /// Streamed chat reply from a caller-held context
    ///
    /// # Errors
    ///
    /// Returns the fallback model's error if neither stream could be opened.
    pub async fn chat_stream_with_context(
        &self,
        context: &SessionContext,
        history: &[ChatMessage],
        message: &str,
    ) -> AppResult<FragmentStream> {
        self.open_fragment_stream(&context.prompt(history, message))
            .await
    }

    #[instrument(skip_all, fields(prompt_chars = prompt.len()))]
    async fn chat_reply(&self, prompt: &str) -> AppResult<String> {
        let reply = self.generate(prompt).await?;
        Ok(reply.trim().to_owned())
    }

    #[instrument(skip_all, fields(prompt_chars = prompt.len()))]
    async fn open_fragment_stream(&self, prompt: &str) -> AppResult<FragmentStream> {
        let chunks = stream_with_fallback(self.provider(), self.models(), prompt).await?;
        debug!("chat stream opened");

        let fragments = trim_fragments(chunks.map(|chunk| chunk.map(|c| c.delta)));
        Ok(Box::pin(fragments))
    }
}
