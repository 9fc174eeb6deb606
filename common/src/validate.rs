//! Attribute rules shared by every entity.
//!
//! Lengths are counted in Unicode scalar values, not bytes.

use std::ops::RangeInclusive;

use crate::error::{Field, ModelError, ModelResult};

pub const USERNAME_LEN: RangeInclusive<usize> = 2..=16;
pub const SCORE_RANGE: RangeInclusive<i64> = 1..=5000;

pub fn title(value: &str) -> ModelResult<()> {
    if value.is_empty() {
        return Err(ModelError::validation(
            Field::Title,
            "Titles must be longer than 0 characters",
        ));
    }
    Ok(())
}

pub fn username(value: &str) -> ModelResult<()> {
    let len: usize = value.chars().count();
    if !USERNAME_LEN.contains(&len) {
        return Err(ModelError::validation(
            Field::Username,
            format!(
                "Usernames must be between {} and {} characters, inclusive (got {len})",
                USERNAME_LEN.start(),
                USERNAME_LEN.end()
            ),
        ));
    }
    Ok(())
}

pub fn score(value: i64) -> ModelResult<()> {
    if !SCORE_RANGE.contains(&value) {
        return Err(out_of_range(value));
    }
    Ok(())
}

/// Parses and validates a score given as text.
///
/// Anything that is not a plain integer (`"12.5"`, `"ten"`) is rejected as a
/// type error; integers outside [`SCORE_RANGE`] as a range error.
pub fn parse_score(text: &str) -> ModelResult<i64> {
    let trimmed: &str = text.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => {
            score(value)?;
            Ok(value)
        }
        Err(_) if is_integer_literal(trimmed) => Err(ModelError::validation(
            Field::Score,
            format!("Scores must be between {} and {}, inclusive", SCORE_RANGE.start(), SCORE_RANGE.end()),
        )),
        Err(_) => Err(ModelError::validation(
            Field::Score,
            format!("Scores must be of type int (got '{trimmed}')"),
        )),
    }
}

fn out_of_range(value: i64) -> ModelError {
    ModelError::validation(
        Field::Score,
        format!(
            "Scores must be between {} and {}, inclusive (got {value})",
            SCORE_RANGE.start(),
            SCORE_RANGE.end()
        ),
    )
}

// Digits with an optional sign: too large for i64, but still an integer.
fn is_integer_literal(s: &str) -> bool {
    let digits: &str = s.strip_prefix(['-', '+']).unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}
