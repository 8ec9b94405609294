//! Error types for pg-escape.

use thiserror::Error;

/// The main error type for escaping and formatting.
#[derive(Debug, Error)]
pub enum EscapeError {
    /// The template could not be scanned.
    #[error("Parse error at position {position}: {message}")]
    Parse { position: usize, message: String },

    /// An identifier was requested for a null or empty value.
    #[error("identifier required")]
    MissingIdentifier,

    /// An array was given where a single identifier is expected.
    #[error("identifier cannot be an array")]
    SequenceIdentifier,

    /// A directive needed an argument but the argument list ran out.
    #[error("Missing argument for %{directive} at position {position} (only {supplied} supplied)")]
    ArgumentUnderflow {
        position: usize,
        directive: char,
        supplied: usize,
    },

    /// `%` followed by a character that is not a known directive.
    #[error("Invalid directive '%{directive}' at position {position}. Expected: %s, %I, %L, %Q or %%")]
    InvalidDirective { position: usize, directive: char },

    /// The template ends with a lone `%`.
    #[error("Template ends with a lone '%' at position {position}")]
    TrailingPercent { position: usize },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EscapeError {
    /// Create a parse error at the given position.
    pub fn parse(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }

    /// Create an argument underflow error for the directive at `position`.
    pub fn underflow(position: usize, directive: char, supplied: usize) -> Self {
        Self::ArgumentUnderflow {
            position,
            directive,
            supplied,
        }
    }

    /// Create an invalid directive error.
    pub fn invalid(position: usize, directive: char) -> Self {
        Self::InvalidDirective {
            position,
            directive,
        }
    }
}

/// Result type alias for pg-escape operations.
pub type EscapeResult<T> = Result<T, EscapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EscapeError::underflow(5, 'L', 1);
        assert_eq!(
            err.to_string(),
            "Missing argument for %L at position 5 (only 1 supplied)"
        );
    }

    #[test]
    fn test_missing_identifier_message() {
        assert_eq!(EscapeError::MissingIdentifier.to_string(), "identifier required");
    }

    #[test]
    fn test_invalid_directive_display() {
        let err = EscapeError::invalid(3, 'd');
        assert_eq!(
            err.to_string(),
            "Invalid directive '%d' at position 3. Expected: %s, %I, %L, %Q or %%"
        );
    }
}
