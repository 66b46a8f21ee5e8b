//! Error types for pattern compilation and parsing.

use thiserror::Error;

/// Error raised while compiling the pattern list at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The pattern list was empty.
    #[error("at least one pattern is required")]
    EmptyList,
    /// A pattern string was empty.
    #[error("patterns must be non-empty strings")]
    EmptyPattern,
    /// The pattern used recursive descent, which is not supported.
    #[error("recursive descent is not supported: `{0}`")]
    RecursiveDescent(String),
    /// The array-wildcard predicate for the pattern failed to compile.
    #[error("cannot compile predicate for `{pattern}`: {message}")]
    Predicate {
        /// The offending pattern text.
        pattern: String,
        /// The compiler's diagnostic.
        message: String,
    },
}

/// Terminal failure of a parse session.
///
/// The first error unwinds to the engine and latches it: subsequent calls to
/// [`StreamingParser::feed`](crate::StreamingParser::feed) re-raise the same
/// error, and the session must be discarded.
///
/// The `path` carried by structural errors is best effort: incremental
/// parsers report the path they are building, while bulk scanners only know
/// the path of the subtree they capture.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A character that cannot start or continue the current construct.
    #[error("unexpected character `{found}` at {path}")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
        /// Path of the construct being parsed.
        path: String,
    },
    /// A comma where no element or pair separator is allowed.
    #[error("unexpected comma at {path}")]
    UnexpectedComma {
        /// Path of the construct being parsed.
        path: String,
    },
    /// A comma directly before the closing bracket of an object or array.
    #[error("trailing comma before `{close}` at {path}")]
    TrailingComma {
        /// The closing bracket that followed the comma.
        close: char,
        /// Path of the construct being parsed.
        path: String,
    },
    /// A non-whitespace character after the top-level value.
    #[error("extra data after top-level value: `{0}`")]
    TrailingData(char),
    /// The host decoder rejected a primitive lexeme or captured subtree.
    #[error("invalid JSON at {path}: {message}")]
    Lexical {
        /// Path of the rejected value.
        path: String,
        /// The host decoder's diagnostic.
        message: String,
    },
    /// End of input was signaled before any value started.
    #[error("empty or whitespace-only input")]
    EmptyInput,
    /// End of input was signaled while the top-level value was unfinished.
    #[error("unexpected end of input: structure not closed")]
    UnexpectedEndOfInput,
}
