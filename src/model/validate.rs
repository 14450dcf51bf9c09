//! Field validators shared by the request DTOs.

use validator::ValidationError;

/// Rejects strings that are empty or contain only whitespace.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}
