//! Expand `triangle` shorthand declarations in CSS text.
//!
//! ```rust
//! use triangle_css::{Config, process};
//!
//! let css = process(
//!     ".tip { triangle: right-iso pointing-down; width: 10px; background-color: #333; }",
//!     &Config::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     css,
//!     ".tip { width: 0; height: 0; border-style: solid; border-color: transparent; \
//!      border-width: 5px 5px 0; border-top-color: #333; }"
//! );
//! ```

pub mod error;
pub mod log_init;

use std::fs;
use std::path::Path;

pub use error::{Error, Result};
pub use stylesheet::{StyleSheet, parse_stylesheet};
pub use triangle::{
    Config, ConfigError, DEFAULT_UNIT_PRECISION, ErrorKind, TriangleError, TriangleTransformer,
};

/// Parses `source`, expands every triangle rule and serializes the result.
pub fn process(source: &str, config: &Config) -> Result<String> {
    let mut sheet = parse_stylesheet(source)?;
    TriangleTransformer::new(*config).transform_stylesheet(&mut sheet)?;
    Ok(sheet.to_css())
}

/// Reads and processes a stylesheet file.
pub fn process_file(path: impl AsRef<Path>, config: &Config) -> Result<String> {
    let path = path.as_ref();
    log::debug!("processing {}", path.display());
    let source = fs::read_to_string(path)?;
    process(&source, config)
}
