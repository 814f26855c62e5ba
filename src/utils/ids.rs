// ABOUTME: Shared recipe identifier validation used by the add and delete paths
// ABOUTME: Accepts JSON numbers or strings and normalizes them to an i64 primary key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! Recipe identifier parsing
//!
//! Callers supply recipe ids either as JSON numbers (from search results) or
//! as strings (from URL path segments). Both paths normalize through this one
//! routine so the "Invalid recipe ID format." rejection is consistent.

use crate::errors::{AppError, AppResult};
use serde_json::Value;

/// Error message returned for ids that do not parse as integers
pub const INVALID_ID_MESSAGE: &str = "Invalid recipe ID format.";

/// Parse a loosely typed JSON value into a recipe id.
///
/// Accepts an integer number or a string holding an integer. Anything else,
/// including floats and null, is rejected.
///
/// # Errors
///
/// Returns [`ErrorCode::InvalidFormat`](crate::errors::ErrorCode::InvalidFormat)
/// when the value cannot be converted.
pub fn parse_recipe_id(value: &Value) -> AppResult<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| AppError::invalid_format(INVALID_ID_MESSAGE)),
        Value::String(s) => parse_recipe_id_str(s),
        _ => Err(AppError::invalid_format(INVALID_ID_MESSAGE)),
    }
}

/// Parse a string (e.g. a URL path segment) into a recipe id.
///
/// # Errors
///
/// Returns [`ErrorCode::InvalidFormat`](crate::errors::ErrorCode::InvalidFormat)
/// when the string is not an integer.
pub fn parse_recipe_id_str(raw: &str) -> AppResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::invalid_format(INVALID_ID_MESSAGE))
}
