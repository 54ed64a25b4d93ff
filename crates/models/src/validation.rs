//! Field-level rules for player records.
//!
//! `is_valid_*` answer yes/no; `validate_*` wrap the same checks with a
//! message suitable for a 400 response.

use crate::errors::ModelError;

pub const MAX_NAME_LEN: usize = 12;
pub const MAX_TITLE_LEN: usize = 30;
pub const MAX_EXPERIENCE: i32 = 10_000_000;
/// Earliest accepted birthday, epoch milliseconds.
pub const MIN_BIRTHDAY_MILLIS: i64 = 946_674_000_000;
/// Latest accepted birthday (3000-12-31 23:59:29), epoch milliseconds.
pub const MAX_BIRTHDAY_MILLIS: i64 = 32_535_205_169_000;

/// Lengths count characters, not bytes.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().count() <= MAX_NAME_LEN
}

/// An empty title is allowed.
pub fn is_valid_title(title: &str) -> bool {
    title.chars().count() <= MAX_TITLE_LEN
}

pub fn is_valid_birthday(millis: i64) -> bool {
    (MIN_BIRTHDAY_MILLIS..=MAX_BIRTHDAY_MILLIS).contains(&millis)
}

pub fn is_valid_experience(experience: i32) -> bool {
    experience > 0 && experience <= MAX_EXPERIENCE
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if !is_valid_name(name) {
        return Err(ModelError::Validation(format!("name must be 1..={MAX_NAME_LEN} characters")));
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), ModelError> {
    if !is_valid_title(title) {
        return Err(ModelError::Validation(format!("title must be at most {MAX_TITLE_LEN} characters")));
    }
    Ok(())
}

pub fn validate_birthday(millis: i64) -> Result<(), ModelError> {
    if !is_valid_birthday(millis) {
        return Err(ModelError::Validation("birthday must be between 2000-01-01 and 3000-12-31".into()));
    }
    Ok(())
}

pub fn validate_experience(experience: i32) -> Result<(), ModelError> {
    if !is_valid_experience(experience) {
        return Err(ModelError::Validation(format!("experience must be within 1..={MAX_EXPERIENCE}")));
    }
    Ok(())
}
