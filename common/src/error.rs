use std::fmt;

use thiserror::Error;

/// Result type for every fallible model operation.
pub type ModelResult<T> = Result<T, ModelError>;

/// The attribute an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Username,
    Score,
    Player,
    Game,
    /// The result record being reassigned, rather than one of its attributes.
    Result,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Username => "username",
            Field::Score => "score",
            Field::Player => "player",
            Field::Game => "game",
            Field::Result => "result",
        };
        f.write_str(name)
    }
}

/// Errors raised when assigning entity attributes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The value broke a type, range, length or reference rule.
    #[error("invalid {field}: {reason}")]
    Validation { field: Field, reason: String },

    /// The attribute is single-shot and already holds a value.
    #[error("{0} cannot change once it has been set")]
    ImmutableField(Field),
}

impl ModelError {
    pub fn validation(field: Field, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// The attribute this error was raised for.
    pub fn field(&self) -> Field {
        match self {
            Self::Validation { field, .. } => *field,
            Self::ImmutableField(field) => *field,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_immutable(&self) -> bool {
        matches!(self, Self::ImmutableField(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_field() {
        let err = ModelError::validation(Field::Score, "Scores must be between 1 and 5000, inclusive");
        assert_eq!(
            err.to_string(),
            "invalid score: Scores must be between 1 and 5000, inclusive"
        );

        let err = ModelError::ImmutableField(Field::Title);
        assert_eq!(err.to_string(), "title cannot change once it has been set");
    }

    #[test]
    fn kind_helpers() {
        let err = ModelError::validation(Field::Player, "unknown player");
        assert!(err.is_validation());
        assert!(!err.is_immutable());
        assert_eq!(err.field(), Field::Player);

        let err = ModelError::ImmutableField(Field::Score);
        assert!(err.is_immutable());
        assert_eq!(err.field(), Field::Score);
    }
}
