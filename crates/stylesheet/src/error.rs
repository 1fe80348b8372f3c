//! Error types for stylesheet parsing.

use thiserror::Error;

/// Errors that can occur while reading a stylesheet.
///
/// # Examples
///
/// ```rust
/// use stylesheet::parser::parse_stylesheet;
///
/// // Missing value after colon
/// let result = parse_stylesheet("foo { width: }");
/// assert!(result.is_err());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StylesheetError {
    /// Invalid CSS syntax was encountered during parsing.
    ///
    /// The string contains details about what was unexpected and where.
    #[error("CSS syntax error: {0}")]
    InvalidSyntax(String),
}
