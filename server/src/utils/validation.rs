//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! order-intake handlers. SurrealDB strings have no built-in length
//! enforcement, so limits live here.

use crate::utils::AppError;

// ========== Text length limits ==========

/// Customer names, item names
pub const MAX_NAME_LEN: usize = 200;

/// Free-text notes (order note, per-line special notes)
pub const MAX_NOTE_LEN: usize = 500;

/// Phone numbers and other short identifiers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ========== Validation helpers ==========

/// Validate that a required string is present, non-empty and within the
/// length limit.
pub fn validate_required_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<String, AppError> {
    let value = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation(format!("{field} is required")))?;
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(value.to_string())
}

/// Validate an optional string against a length limit (absent is fine).
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<Option<String>, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.len() > max_len => Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        ))),
        Some(v) => Ok(Some(v.to_string())),
    }
}

/// Strip everything but digits from a phone number.
///
/// The messaging gateway only accepts digits-only destinations.
pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}
