// ABOUTME: Integration tests for personality, daily energy and compatibility insights
// ABOUTME: Covers fenced JSON, schema mismatches and the compatibility safety net
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{ada, date, gateway, john, today, Scripted, ScriptedProvider, FALLBACK, PRIMARY};
use numerology_insights::engine::compatibility;
use numerology_insights::errors::ErrorCode;
use numerology_insights::insights::CompatibilityInsight;
use serde_json::json;

fn personality_json() -> serde_json::Value {
    json!({
        "overview": "You look beneath the surface of things.",
        "strengths": ["Focus", "Patience", "Insight", "Honesty", "Calm"],
        "challenges": ["Aloofness", "Overthinking", "Stubbornness", "Impatience"],
        "lifeLesson": "Trust what you cannot yet prove.",
        "careerPaths": ["Research", "Writing", "Counselling"],
        "relationshipStyle": "Slow to open, loyal once you do.",
        "spiritualGifts": ["Intuition", "Stillness", "Perception"]
    })
}

fn daily_json() -> serde_json::Value {
    json!({
        "theme": "Quiet momentum",
        "description": "A day for finishing rather than starting.",
        "dos": ["Finish one task", "Walk outside", "Call a friend"],
        "donts": ["Overcommit", "Argue online", "Skip meals"],
        "focusArea": "Completion",
        "affirmation": "I finish what I start."
    })
}

fn compatibility_json() -> serde_json::Value {
    json!({
        "overviewNarrative": "You two meet in curiosity.",
        "emotionalConnection": "Steady and unhurried.",
        "communicationDynamic": "Questions before answers.",
        "growthPotential": "Learning to rest together.",
        "dailyLifeTogether": "Shared quiet mornings.",
        "advice": "Schedule time with no plans."
    })
}

// ============================================================================
// Personality
// ============================================================================

#[tokio::test]
async fn test_personality_parses_fenced_reply() {
    let fenced = format!("```json\n{}\n```", personality_json());
    let provider = ScriptedProvider::new([Scripted::Reply(fenced)]);

    let insight = gateway(&provider)
        .personality_insight_for(&john())
        .await
        .unwrap();

    assert_eq!(insight.strengths.len(), 5);
    assert_eq!(insight.life_lesson, "Trust what you cannot yet prove.");
    let prompt = &provider.calls()[0].prompt;
    assert!(prompt.contains("John Smith"));
    assert!(prompt.contains("Life Path: 7"));
}

#[tokio::test]
async fn test_personality_schema_mismatch_propagates() {
    let mut reply = personality_json();
    reply["challenges"] = json!(["Only", "Three", "Items"]);
    let provider = ScriptedProvider::new([Scripted::Reply(reply.to_string())]);

    let error = gateway(&provider)
        .personality_insight_for(&john())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::SchemaMismatch);
    assert!(error.message.contains("`challenges`"));
    // a parse problem is not a remote failure, so no fallback call
    assert_eq!(provider.models_called(), vec![PRIMARY]);
}

#[tokio::test]
async fn test_personality_invalid_json_is_serialization_error() {
    let provider = ScriptedProvider::new([Scripted::reply("You are a seeker. {broken")]);

    let error = gateway(&provider)
        .personality_insight_for(&john())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_personality_rejects_name_without_letters() {
    let provider = ScriptedProvider::new([]);

    let error = gateway(&provider)
        .personality_insight("1234", date(1990, 11, 22))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(provider.calls().is_empty());
}

// ============================================================================
// Daily Energy
// ============================================================================

#[tokio::test]
async fn test_daily_energy_uses_today_numbers() {
    let provider = ScriptedProvider::new([Scripted::Reply(daily_json().to_string())]);

    let energy = gateway(&provider)
        .daily_energy("John Smith", date(1990, 11, 22), today())
        .await
        .unwrap();

    assert_eq!(energy.focus_area, "Completion");
    let prompt = &provider.calls()[0].prompt;
    assert!(prompt.contains("Personal Day: 7"));
    assert!(prompt.contains("Universal Day: 9"));
    assert!(prompt.contains("Friday, October 16, 2026"));
}

#[tokio::test]
async fn test_daily_energy_remote_failure_propagates() {
    let provider = ScriptedProvider::new([
        Scripted::Fail(ErrorCode::ExternalServiceUnavailable),
        Scripted::Fail(ErrorCode::ExternalRateLimited),
    ]);

    let error = gateway(&provider)
        .daily_energy("John Smith", date(1990, 11, 22), today())
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalRateLimited);
}

#[tokio::test]
async fn test_daily_energy_serializes_camel_case() {
    let provider = ScriptedProvider::new([Scripted::Reply(daily_json().to_string())]);
    let energy = gateway(&provider)
        .daily_energy_for(&john(), today())
        .await
        .unwrap();

    assert_eq!(serde_json::to_value(&energy).unwrap(), daily_json());
}

// ============================================================================
// Compatibility
// ============================================================================

#[tokio::test]
async fn test_compatibility_uses_model_reply() {
    let provider = ScriptedProvider::new([Scripted::Reply(compatibility_json().to_string())]);
    let (a, b) = (john(), ada());

    let insight = gateway(&provider).compatibility_insight_for(&a, &b).await;

    assert_eq!(insight.advice, "Schedule time with no plans.");
    let score = compatibility(&a, &b);
    let prompt = &provider.calls()[0].prompt;
    assert!(prompt.contains(&format!("HARMONY: {}/100, {}", score.score, score.level)));
    assert!(prompt.contains("PRIVATE PROFILE OF ADA LOVELACE"));
}

#[tokio::test]
async fn test_compatibility_unparsable_reply_uses_template() {
    let provider = ScriptedProvider::new([Scripted::reply("Sorry, I can't help with that.")]);
    let (a, b) = (john(), ada());

    let insight = gateway(&provider).compatibility_insight_for(&a, &b).await;

    assert_eq!(
        insight,
        CompatibilityInsight::fallback(&a, &b, &compatibility(&a, &b))
    );
    assert!(insight.overview_narrative.contains("John Smith"));
    assert!(insight.overview_narrative.contains("Ada Lovelace"));
    assert!(insight
        .overview_narrative
        .contains(&format!("Life Path {}", a.life_path)));
    assert!(insight
        .overview_narrative
        .contains(&format!("Life Path {}", b.life_path)));
}

#[tokio::test]
async fn test_compatibility_schema_mismatch_uses_template() {
    let mut reply = compatibility_json();
    reply["advice"] = json!(["not", "a", "string"]);
    let provider = ScriptedProvider::new([Scripted::Reply(reply.to_string())]);
    let (a, b) = (john(), ada());

    let insight = gateway(&provider).compatibility_insight_for(&a, &b).await;

    assert!(insight.advice.contains("John"));
    assert!(insight.advice.contains("Ada"));
}

#[tokio::test]
async fn test_compatibility_remote_failure_uses_template() {
    let provider = ScriptedProvider::new([
        Scripted::Fail(ErrorCode::ExternalServiceUnavailable),
        Scripted::Fail(ErrorCode::ExternalServiceUnavailable),
    ]);

    let insight = gateway(&provider)
        .compatibility_insight(
            ("John Smith", date(1990, 11, 22)),
            ("Ada Lovelace", date(1815, 12, 10)),
        )
        .await
        .unwrap();

    assert_eq!(provider.models_called(), vec![PRIMARY, FALLBACK]);
    for field in [
        &insight.overview_narrative,
        &insight.emotional_connection,
        &insight.communication_dynamic,
        &insight.growth_potential,
        &insight.daily_life_together,
        &insight.advice,
    ] {
        assert!(!field.trim().is_empty());
    }
}

#[tokio::test]
async fn test_compatibility_invalid_name_is_still_an_error() {
    let provider = ScriptedProvider::new([]);

    let error = gateway(&provider)
        .compatibility_insight(("John Smith", date(1990, 11, 22)), ("--", date(1815, 12, 10)))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(provider.calls().is_empty());
}
