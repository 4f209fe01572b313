// ABOUTME: Chat system context and per-turn prompt assembly
// ABOUTME: Renders the profile once and appends a trailing window of the conversation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use numerology_engine::NumerologyProfile;

use super::{cycle_lines, profile_lines, CHAT_RULES};
use crate::llm::ChatMessage;

/// Number of trailing history messages included in a chat prompt
pub const HISTORY_WINDOW: usize = 6;

/// Multi-line system context describing the person being advised
///
/// Includes the personal and universal day numbers for the date the profile
/// was computed on.
#[must_use]
pub fn system_context(profile: &NumerologyProfile) -> String {
    format!(
        "You are advising {name}, born {birth}.\n\
         \n\
         NUMEROLOGY PROFILE\n\
         {profile}\
         {cycle}\
         \n\
         {CHAT_RULES}",
        name = profile.name,
        birth = profile.birth_date.format("%B %-d, %Y"),
        profile = profile_lines(profile, "- "),
        cycle = cycle_lines(profile, "- "),
    )
}

/// Assemble one chat turn from a precomputed system context
///
/// Only the last [`HISTORY_WINDOW`] messages of `history` are rendered.
#[must_use]
pub fn chat_prompt(
    system_context: &str,
    first_name: &str,
    history: &[ChatMessage],
    message: &str,
) -> String {
    let window = &history[history.len().saturating_sub(HISTORY_WINDOW)..];

    let mut prompt = String::with_capacity(system_context.len() + 256);
    prompt.push_str(system_context);
    prompt.push('\n');

    if !window.is_empty() {
        prompt.push_str("CONVERSATION SO FAR\n");
        for entry in window {
            let _ = writeln!(
                prompt,
                "{}: {}",
                entry.role.transcript_label(),
                entry.content.trim()
            );
        }
        prompt.push('\n');
    }

    let _ = write!(prompt, "User: {}\n\nReply to {first_name} now.\nAI:", message.trim());
    prompt
}
