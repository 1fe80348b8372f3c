//! # Stylesheet - raw-preserving CSS reader and writer
//!
//! A small CSS front end for tools that rewrite declarations in place. It
//! understands exactly what a declaration-level transform needs:
//!
//! - **Parsing**: Convert CSS source text into a [`StyleSheet`](parser::StyleSheet)
//!   of style rules, comments and `property: value` declarations
//! - **Editing**: Index-based insert/remove/clone operations on a rule's
//!   declaration list (see [`Rule`](parser::Rule))
//! - **Writing**: Serialize the tree back to text, reusing the whitespace
//!   recorded while parsing
//!
//! ## Quick Start
//!
//! ```rust
//! use stylesheet::parser::parse_stylesheet;
//!
//! let source = "foo {\n    width: 100px;\n    height: 50px;\n}";
//!
//! let mut sheet = parse_stylesheet(source).expect("valid CSS");
//! assert_eq!(sheet.rules().count(), 1);
//!
//! let rule = sheet.rules_mut().next().unwrap();
//! let index = rule.position_of("width").unwrap();
//! rule.declaration_mut(index).unwrap().value = "0".to_string();
//!
//! assert_eq!(sheet.to_string(), "foo {\n    width: 0;\n    height: 50px;\n}");
//! ```
//!
//! ## Not Supported
//!
//! - At-rules (`@media`, `@import`, ...)
//! - Nested rules
//!
//! ## Modules
//!
//! - [`parser`]: Parsing and the rule/declaration data structures
//! - [`writer`]: Serialization back to CSS text
//! - [`error`]: Error types for parsing failures

pub mod error;
pub mod parser;
pub mod writer;

pub use error::StylesheetError;
pub use parser::{
    Comment, Declaration, DeclarationRaws, Node, Rule, RuleItem, RuleRaws, StyleSheet,
    parse_stylesheet,
};
