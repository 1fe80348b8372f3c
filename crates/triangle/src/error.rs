//! Validation errors raised while expanding a `triangle` declaration.
//!
//! None of these are transient: each one describes input the transformer
//! cannot turn into a triangle. The first failing check for a rule wins.

use thiserror::Error;

/// What went wrong. The display text is the message shown to stylesheet
/// authors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    #[error("Unsupported direction: {0}.")]
    UnsupportedDirection(String),

    #[error("Missing required width declaration")]
    MissingWidth,

    #[error("Missing required height declaration")]
    MissingHeight,

    #[error("Missing required width or height declaration")]
    MissingWidthOrHeight,

    /// Right-isosceles and equilateral triangles derive one dimension from
    /// the other, so only one may be given.
    #[error("{0} triangle cannot have both width and height")]
    ConflictingWidthAndHeight(String),

    #[error("Missing required background-color declaration")]
    MissingBackgroundColor,

    #[error("Invalid {property} length: {value}")]
    InvalidLength { property: String, value: String },

    /// Raised before the rule is touched.
    #[error("Only one triangle declaration is allowed per rule, found {0}")]
    MultipleTriangles(usize),
}

/// An [`ErrorKind`] together with the rule (and declaration, when one is to
/// blame) it was raised for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{selector}: {kind}")]
pub struct TriangleError {
    pub kind: ErrorKind,
    pub selector: String,
    pub property: Option<String>,
}

impl TriangleError {
    /// An error about the rule as a whole.
    pub fn rule(selector: &str, kind: ErrorKind) -> Self {
        Self {
            kind,
            selector: selector.to_string(),
            property: None,
        }
    }

    /// An error about one declaration of the rule.
    pub fn declaration(selector: &str, property: &str, kind: ErrorKind) -> Self {
        Self {
            kind,
            selector: selector.to_string(),
            property: Some(property.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, TriangleError>;
