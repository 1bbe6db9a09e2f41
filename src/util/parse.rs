//! Parsing helpers shared across handlers.

use crate::error::AppError;

/// Parses a Discord snowflake stored as a string into a u64.
///
/// # Arguments
/// - `value` - The string to parse
///
/// # Returns
/// - `Ok(u64)` - The parsed id
/// - `Err(AppError::InternalError)` - The string is not a valid u64
pub fn parse_u64_from_string(value: &str) -> Result<u64, AppError> {
    value
        .parse::<u64>()
        .map_err(|_| AppError::InternalError(format!("Failed to parse '{}' as u64", value)))
}

/// Derives an onboarding channel name from a member display name.
///
/// Lowercases the name and strips every character outside `[a-z0-9-]`. The
/// result can be empty when the display name contains no usable characters;
/// channel creation then fails downstream and is logged there.
///
/// # Arguments
/// - `display_name` - The member's display name
///
/// # Returns
/// - `String` - The sanitized channel name
pub fn channel_name_from_display_name(display_name: &str) -> String {
    display_name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}
