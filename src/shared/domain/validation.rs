//! Field-level validation primitives composed by domain entities.
//!
//! Each check takes the value, its constraint parameters and the field name;
//! the field name appears verbatim in the failure message. Lengths are
//! counted in characters, not bytes.

use crate::shared::errors::{AppError, AppResult};

/// Fails when the value is absent, returning it otherwise.
pub fn not_null<T>(value: Option<T>, field_name: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::ValidationError(format!("{} should not be null", field_name)))
}

/// Fails when the value is absent, empty, or whitespace-only.
pub fn not_null_or_empty(value: Option<&str>, field_name: &str) -> AppResult<()> {
    match value {
        Some(target) if !target.trim().is_empty() => Ok(()),
        _ => Err(AppError::ValidationError(format!(
            "{} should not be empty or null",
            field_name
        ))),
    }
}

/// Fails when the value is shorter than `min` characters.
pub fn min_length(value: &str, min: usize, field_name: &str) -> AppResult<()> {
    if value.chars().count() < min {
        return Err(AppError::ValidationError(format!(
            "{} should be at least {} characters long",
            field_name, min
        )));
    }
    Ok(())
}

/// Fails when the value is longer than `max` characters.
pub fn max_length(value: &str, max: usize, field_name: &str) -> AppResult<()> {
    if value.chars().count() > max {
        return Err(AppError::ValidationError(format!(
            "{} should be less or equal {} characters long",
            field_name, max
        )));
    }
    Ok(())
}
