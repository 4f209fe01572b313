// ABOUTME: Cleanup, parsing and shape validation of JSON replies from the model
// ABOUTME: Strips code fences, then checks required string and fixed-length list fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Reply Parsing
//!
//! Models often wrap JSON in a Markdown code fence even when told not to.
//! [`clean_json_response`] removes the fence, [`parse_insight`] parses the
//! result and validates it field by field before deserializing, so a reply
//! with the right syntax but the wrong shape is reported as
//! `SchemaMismatch` naming the offending field.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};

/// Opening fence, optionally tagged `json`
static LEADING_FENCE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^```(?:json)?[ \t]*\r?\n?").ok());

/// Closing fence at the very end
static TRAILING_FENCE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\r?\n?[ \t]*```$").ok());

/// Strip a leading and a trailing code fence, then trim
#[must_use]
pub fn clean_json_response(text: &str) -> String {
    let trimmed = text.trim();

    let without_leading = LEADING_FENCE
        .as_ref()
        .map_or(Cow::Borrowed(trimmed), |re| re.replace(trimmed, ""));
    let without_trailing = TRAILING_FENCE
        .as_ref()
        .map_or(Cow::Borrowed(without_leading.as_ref()), |re| {
            re.replace(without_leading.as_ref(), "")
        });

    without_trailing.trim().to_owned()
}

/// Expected shape of one top-level field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSpec {
    /// A non-empty string
    Text(&'static str),
    /// An array of exactly `len` non-empty strings
    List(&'static str, usize),
}

impl FieldSpec {
    /// JSON key of the field
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Text(name) | Self::List(name, _) => name,
        }
    }

    fn check(&self, object: &serde_json::Map<String, Value>) -> AppResult<()> {
        let name = self.name();
        let value = object
            .get(name)
            .ok_or_else(|| AppError::schema_mismatch(name, "a value, found nothing"))?;

        match *self {
            Self::Text(_) => match value {
                Value::String(text) if !text.trim().is_empty() => Ok(()),
                Value::String(_) => Err(AppError::schema_mismatch(name, "a non-empty string")),
                other => Err(AppError::schema_mismatch(
                    name,
                    &format!("a string, found {}", kind(other)),
                )),
            },
            Self::List(_, len) => {
                let Value::Array(items) = value else {
                    return Err(AppError::schema_mismatch(
                        name,
                        &format!("an array of {len} strings, found {}", kind(value)),
                    ));
                };
                if items.len() != len {
                    return Err(AppError::schema_mismatch(
                        name,
                        &format!("exactly {len} items, found {}", items.len()),
                    ));
                }
                if let Some(index) = items
                    .iter()
                    .position(|item| !item.as_str().is_some_and(|s| !s.trim().is_empty()))
                {
                    return Err(AppError::schema_mismatch(
                        name,
                        &format!("non-empty strings, item {index} is not"),
                    ));
                }
                Ok(())
            }
        }
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A structured reply the model is asked to produce
pub trait InsightSchema: DeserializeOwned {
    /// Record name used in logs
    const NAME: &'static str;
    /// Required top-level fields
    const FIELDS: &'static [FieldSpec];
}

/// Check a parsed reply against a field list
///
/// # Errors
///
/// Returns `SchemaMismatch` for the first field that is missing or has the wrong shape.
pub fn validate_shape(value: &Value, fields: &[FieldSpec]) -> AppResult<()> {
    let Value::Object(object) = value else {
        return Err(AppError::schema_mismatch(
            "$",
            &format!("an object, found {}", kind(value)),
        ));
    };
    fields.iter().try_for_each(|field| field.check(object))
}

/// Clean, parse, validate and deserialize a model reply
///
/// # Errors
///
/// Returns `SerializationError` if the cleaned text is not JSON and
/// `SchemaMismatch` if it does not match `T::FIELDS`.
pub fn parse_insight<T: InsightSchema>(raw: &str) -> AppResult<T> {
    let cleaned = clean_json_response(raw);
    let value: Value = serde_json::from_str(&cleaned).map_err(|e| {
        warn!(record = T::NAME, error = %e, "model reply is not valid JSON");
        AppError::serialization(format!("{} reply is not valid JSON: {e}", T::NAME)).with_source(e)
    })?;

    if let Err(e) = validate_shape(&value, T::FIELDS) {
        warn!(record = T::NAME, error = %e, "model reply has the wrong shape");
        return Err(e);
    }

    debug!(record = T::NAME, "parsed model reply");
    Ok(serde_json::from_value(value)?)
}
