//! Triangle geometry: lengths, shapes, directions and the border layout that
//! draws them.
//!
//! A CSS triangle is a zero-sized box whose borders meet at the center. The
//! border facing away from the tip carries the color, the two borders beside
//! it are transparent and each half as wide as the triangle's base:
//!
//! ```text
//!   pointing-up: border-width: 0 <width/2> <height>
//!
//!        /\
//!       /  \     height
//!      /____\
//!       width
//! ```
//!
//! Right-isosceles and equilateral triangles fix the ratio between the height
//! (measured along the direction the triangle points) and its base, so one
//! dimension can be derived from the other.

use nom::{
    IResult,
    branch::alt,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{map_res, opt, recognize},
    sequence::{pair, tuple},
};
use phf::phf_map;

/// A numeric magnitude with an opaque unit suffix (`px`, `rem`, `foo`, ...).
///
/// Units are never checked against a list of CSS units; whatever letters
/// follow the number are carried over to every length derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Length {
    pub magnitude: f64,
    pub unit: String,
}

impl Length {
    pub fn new(magnitude: f64, unit: impl Into<String>) -> Self {
        Self {
            magnitude,
            unit: unit.into(),
        }
    }

    /// Reads a length from a declaration value such as `40.25px` or `2e1em`.
    ///
    /// Returns `None` when the value does not start with a number or when
    /// anything other than letters follows it (`50%`, `10px 20px`). A bare
    /// number yields an empty unit.
    pub fn parse(value: &str) -> Option<Self> {
        let (rest, magnitude) = parse_number(value.trim()).ok()?;
        if !magnitude.is_finite() || !rest.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        Some(Self::new(magnitude, rest))
    }

    /// A length in the same unit with a different magnitude.
    pub fn with_magnitude(&self, magnitude: f64) -> Self {
        Self::new(magnitude, self.unit.clone())
    }

    pub fn half(&self) -> Self {
        self.with_magnitude(self.magnitude / 2.0)
    }

    /// Formats the length with its magnitude rounded to `precision` decimal
    /// places, dropping trailing zeros.
    ///
    /// ```rust
    /// use triangle::geometry::Length;
    ///
    /// let length = Length::new(20.1234567, "px");
    /// assert_eq!(length.format(5), "20.12346px");
    /// assert_eq!(length.format(0), "20px");
    /// ```
    pub fn format(&self, precision: u32) -> String {
        format!("{}{}", round_to(self.magnitude, precision), self.unit)
    }
}

/// Rounds to `precision` decimal places, taking halves toward positive
/// infinity (`-2.5` becomes `-2`, `2.5` becomes `3`).
fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    let floor = scaled.floor();
    let whole = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    let rounded = whole / scale;
    // -0 would print as "-0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Parse the numeric prefix of a length (sign, digits, fraction, exponent).
fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(one_of("+-")),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                recognize(pair(char('.'), digit1)),
            )),
            opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Triangle shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleKind {
    /// Base and height are both given by the author.
    Isosceles,
    /// Height is half the base.
    RightIsosceles,
    /// Height is `sin(60°)` times the base.
    Equilateral,
}

static TRIANGLE_KINDS: phf::Map<&'static str, TriangleKind> = phf_map! {
    "right-iso" => TriangleKind::RightIsosceles,
    "equilateral" => TriangleKind::Equilateral,
};

impl TriangleKind {
    /// Looks up an explicit type keyword. Isosceles has none: it is what a
    /// `triangle` value without a type means.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        TRIANGLE_KINDS.get(keyword).copied()
    }

    /// Ratio of height to base, for shapes that define one.
    pub fn multiplier(self) -> Option<f64> {
        match self {
            TriangleKind::Isosceles => None,
            TriangleKind::RightIsosceles => Some(0.5),
            TriangleKind::Equilateral => Some(sin_degrees(60.0)),
        }
    }
}

fn sin_degrees(angle: f64) -> f64 {
    (angle / 180.0 * std::f64::consts::PI).sin()
}

/// Where the tip of the triangle points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

static DIRECTIONS: phf::Map<&'static str, Direction> = phf_map! {
    "pointing-up" => Direction::Up,
    "pointing-down" => Direction::Down,
    "pointing-left" => Direction::Left,
    "pointing-right" => Direction::Right,
};

impl Direction {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        DIRECTIONS.get(keyword).copied()
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// The box side whose border forms the visible triangle.
    pub fn opposite_side(self) -> &'static str {
        match self {
            Direction::Up => "bottom",
            Direction::Down => "top",
            Direction::Left => "right",
            Direction::Right => "left",
        }
    }
}

/// Everything known about one triangle before its dimensions are resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleSpec {
    pub kind: TriangleKind,
    pub direction: Direction,
    pub width: Option<Length>,
    pub height: Option<Length>,
}

impl TriangleSpec {
    /// Returns `(width, height)`, deriving the missing dimension from the
    /// shape's multiplier.
    ///
    /// Pointing up or down, the multiplier maps width to height; pointing
    /// left or right the roles swap. Returns `None` when neither dimension is
    /// known, or when one is missing for a shape without a multiplier.
    pub fn resolve(self) -> Option<(Length, Length)> {
        let vertical = self.direction.is_vertical();
        match (self.width, self.height) {
            (Some(width), Some(height)) => Some((width, height)),
            (Some(width), None) => {
                let multiplier = self.kind.multiplier()?;
                let height = if vertical {
                    width.with_magnitude(width.magnitude * multiplier)
                } else {
                    width.with_magnitude(width.magnitude / multiplier)
                };
                Some((width, height))
            }
            (None, Some(height)) => {
                let multiplier = self.kind.multiplier()?;
                let width = if vertical {
                    height.with_magnitude(height.magnitude / multiplier)
                } else {
                    height.with_magnitude(height.magnitude * multiplier)
                };
                Some((width, height))
            }
            (None, None) => None,
        }
    }
}

/// Builds the `border-width` value that draws a `width` × `height` triangle
/// pointing in `direction`.
pub fn border_width(
    width: &Length,
    height: &Length,
    direction: Direction,
    precision: u32,
) -> String {
    let w = width.format(precision);
    let h = height.format(precision);
    let hw = width.half().format(precision);
    let hh = height.half().format(precision);

    match direction {
        Direction::Up => format!("0 {hw} {h}"),
        Direction::Down => format!("{h} {hw} 0"),
        Direction::Left => format!("{hh} {w} {hh} 0"),
        Direction::Right => format!("{hh} 0 {hh} {w}"),
    }
}
