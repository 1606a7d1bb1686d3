//! Validation rules for user-supplied options.
//!
//! Pure functions with no I/O or side effects.

use crate::error::{ConvertError, Result};

const MAX_PREFIX_LENGTH: usize = 32;

/// Validates a Tailwind class prefix.
///
/// ## Rules
/// - At most 32 characters
/// - No whitespace (it would split the class in two)
/// - No quote characters (they would close the surrounding literal)
/// - No `:` (reserved for variants like `md:`)
///
/// An empty prefix is accepted and means "no prefix".
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.len() > MAX_PREFIX_LENGTH {
        return Err(ConvertError::InvalidPrefix(
            prefix.to_string(),
            format!(
                "exceeds {} chars (has {})",
                MAX_PREFIX_LENGTH,
                prefix.len()
            ),
        ));
    }

    for (idx, ch) in prefix.chars().enumerate() {
        if ch.is_whitespace() {
            return Err(ConvertError::InvalidPrefix(
                prefix.to_string(),
                format!("whitespace at position {}", idx),
            ));
        }

        if matches!(ch, '"' | '\'' | '`') {
            return Err(ConvertError::InvalidPrefix(
                prefix.to_string(),
                format!("quote character {} at position {}", ch, idx),
            ));
        }

        if ch == ':' {
            return Err(ConvertError::InvalidPrefix(
                prefix.to_string(),
                format!("':' at position {} would read as a variant", idx),
            ));
        }
    }

    if prefix.starts_with('-') {
        log::warn!(
            "Prefix '{}' starts with '-', negative classes will read '--'",
            prefix
        );
    }

    Ok(())
}
