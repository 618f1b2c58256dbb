use crate::errors::ModelError;

/// Bounds shared by every employee text field.
pub const MIN_TEXT_LEN: usize = 2;
pub const MAX_TEXT_LEN: usize = 100;

/// Check field constraints, returning the normalized value.
pub trait Validate: Sized {
    fn validate(self) -> Result<Self, ModelError>;
}

/// Bound the raw length in characters, then trim and reject blank.
/// The trimmed value is what gets stored.
pub fn trimmed_text(field: &'static str, value: String, min: usize, max: usize) -> Result<String, ModelError> {
    let len = value.chars().count();
    if len < min {
        return Err(ModelError::invalid(field, format!("must have at least {min} characters")));
    }
    if len > max {
        return Err(ModelError::invalid(field, format!("must have at most {max} characters")));
    }
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ModelError::invalid(field, "must not be empty or whitespace"));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn employee_text(field: &'static str, value: String) -> Result<String, ModelError> {
    trimmed_text(field, value, MIN_TEXT_LEN, MAX_TEXT_LEN)
}
