//! # Triangle - CSS triangles from a single declaration
//!
//! Expands the `triangle` shorthand inside a style rule into the classic
//! zero-sized-box border trick:
//!
//! ```rust
//! use stylesheet::parse_stylesheet;
//! use triangle::{Config, transform_stylesheet};
//!
//! let mut sheet = parse_stylesheet(
//!     "foo { triangle: equilateral pointing-up; width: 100px; background-color: red; }",
//! )
//! .unwrap();
//! transform_stylesheet(&mut sheet, &Config::default()).unwrap();
//!
//! assert_eq!(
//!     sheet.to_css(),
//!     "foo { width: 0; height: 0; border-style: solid; border-color: transparent; \
//!      border-width: 0 50px 86.60254px; border-bottom-color: red; }"
//! );
//! ```
//!
//! ## Triangle Values
//!
//! | Value                              | Requires            |
//! |------------------------------------|---------------------|
//! | `pointing-<dir>`                   | `width` and `height` |
//! | `right-iso pointing-<dir>`         | `width` or `height` |
//! | `equilateral pointing-<dir>`       | `width` or `height` |
//!
//! `<dir>` is one of `up`, `down`, `left`, `right`. Every triangle also needs
//! a `background-color`, which becomes the color of the visible border.
//!
//! ## Modules
//!
//! - [`transform`]: The rule transformer
//! - [`geometry`]: Length parsing/formatting and dimension derivation
//! - [`config`]: Transformation settings
//! - [`error`]: Validation errors

pub mod config;
pub mod error;
pub mod geometry;
pub mod transform;

pub use config::{Config, ConfigError, DEFAULT_UNIT_PRECISION};
pub use error::{ErrorKind, TriangleError};
pub use transform::{TriangleTransformer, transform_rule, transform_stylesheet};
