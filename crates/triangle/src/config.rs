//! Transformation settings.

use thiserror::Error;

/// Decimal places kept on computed lengths unless configured otherwise.
pub const DEFAULT_UNIT_PRECISION: u32 = 5;

/// Largest accepted precision. Beyond this the `10^p` scale factor leaves no
/// room in an `f64` mantissa for the integer part of a length.
pub const MAX_UNIT_PRECISION: u32 = 20;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unit precision {0} is larger than the maximum of {max}", max = MAX_UNIT_PRECISION)]
    PrecisionTooLarge(u32),
}

/// Settings applied uniformly to every rule of a transformation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    unit_precision: u32,
}

impl Config {
    /// Creates a configuration with the given number of decimal places for
    /// computed lengths (e.g., `1.2354` at precision `2` becomes `1.24`).
    pub fn new(unit_precision: u32) -> Result<Self, ConfigError> {
        if unit_precision > MAX_UNIT_PRECISION {
            return Err(ConfigError::PrecisionTooLarge(unit_precision));
        }
        Ok(Self { unit_precision })
    }

    pub fn unit_precision(&self) -> u32 {
        self.unit_precision
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_precision: DEFAULT_UNIT_PRECISION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_precision() {
        assert_eq!(Config::default().unit_precision(), 5);
    }

    #[test]
    fn test_precision_bounds() {
        assert_eq!(Config::new(0).unwrap().unit_precision(), 0);
        assert_eq!(Config::new(20).unwrap().unit_precision(), 20);
        assert_eq!(Config::new(21), Err(ConfigError::PrecisionTooLarge(21)));
    }
}
