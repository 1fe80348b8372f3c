//! Rewrites rules containing a `triangle` declaration into border triangles.
//!
//! ```css
//! foo {                           foo {
//!     triangle: pointing-up;          width: 0;
//!     width: 100px;                   height: 0;
//!     height: 20px;          =>       border-style: solid;
//!     background-color: red;          border-color: transparent;
//! }                                   border-width: 0 50px 20px;
//!                                     border-bottom-color: red;
//!                                 }
//! ```
//!
//! The `triangle` value is `[right-iso | equilateral] <direction>`. Without a
//! type the triangle is isosceles and needs both `width` and `height`; with
//! a type exactly one of them is given and the other is derived.
//!
//! A rule may hold at most one `triangle` declaration. Edits are applied as
//! the rule is inspected. When validation fails the rule is left partly
//! rewritten; callers that need all-or-nothing behavior should transform a
//! clone.

use log::{debug, trace};
use stylesheet::{Rule, StyleSheet};

use crate::config::Config;
use crate::error::{ErrorKind, Result, TriangleError};
use crate::geometry::{Direction, Length, TriangleKind, TriangleSpec, border_width};

const TRIANGLE: &str = "triangle";
const WIDTH: &str = "width";
const HEIGHT: &str = "height";
const BACKGROUND_COLOR: &str = "background-color";

/// Expands `triangle` declarations using one [`Config`].
///
/// Holds no state between rules, so independent rules may be transformed in
/// any order or in parallel.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriangleTransformer {
    config: Config,
}

impl TriangleTransformer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Transforms every style rule of `sheet` in document order, stopping at
    /// the first rule that fails.
    pub fn transform_stylesheet(&self, sheet: &mut StyleSheet) -> Result<()> {
        for rule in sheet.rules_mut() {
            self.transform_rule(rule)?;
        }
        Ok(())
    }

    /// Transforms one rule. Rules without a `triangle` declaration are left
    /// untouched, as are rules with more than one.
    pub fn transform_rule(&self, rule: &mut Rule) -> Result<()> {
        let positions = rule.positions_of(TRIANGLE);
        let index = match positions.as_slice() {
            [] => {
                trace!("{}: no triangle declaration", rule.selector);
                return Ok(());
            }
            [index] => *index,
            _ => {
                return Err(TriangleError::declaration(
                    &rule.selector,
                    TRIANGLE,
                    ErrorKind::MultipleTriangles(positions.len()),
                ));
            }
        };

        let direction = self.expand(rule, index)?;
        rewrite_background_color(rule, direction)
    }

    /// Replaces the `triangle` declaration at `index` with the box and border
    /// declarations. Returns the direction so the caller can color the right
    /// border.
    fn expand(&self, rule: &mut Rule, index: usize) -> Result<Direction> {
        let mut anchor = index;

        let width = gather_dimension(rule, WIDTH, &mut anchor)?;
        let height = gather_dimension(rule, HEIGHT, &mut anchor)?;

        anchor = rule.clone_before(anchor, "border-style", "solid");
        anchor = rule.clone_before(anchor, "border-color", "transparent");

        let value = rule
            .declaration(anchor)
            .map(|decl| decl.value.clone())
            .unwrap_or_default();
        let spec = parse_triangle(&rule.selector, &value, width, height)?;
        debug!(
            "{}: {:?} triangle pointing {:?}",
            rule.selector, spec.kind, spec.direction
        );

        let direction = spec.direction;
        let (width, height) = spec.resolve().ok_or_else(|| {
            TriangleError::rule(&rule.selector, ErrorKind::MissingWidthOrHeight)
        })?;

        let borders = border_width(&width, &height, direction, self.config.unit_precision());
        trace!("{}: border-width: {}", rule.selector, borders);
        anchor = rule.clone_before(anchor, "border-width", &borders);
        rule.remove(anchor);

        Ok(direction)
    }
}

/// Transforms one rule with `config`.
pub fn transform_rule(rule: &mut Rule, config: &Config) -> Result<()> {
    TriangleTransformer::new(*config).transform_rule(rule)
}

/// Transforms every rule of `sheet` with `config`.
pub fn transform_stylesheet(sheet: &mut StyleSheet, config: &Config) -> Result<()> {
    TriangleTransformer::new(*config).transform_stylesheet(sheet)
}

/// Moves every `property` declaration to just before `anchor`, zeroing its
/// value, and returns the last parsed length. Inserts `property: 0` when the
/// rule has none. `anchor` is kept pointing at the triangle declaration.
fn gather_dimension(
    rule: &mut Rule,
    property: &str,
    anchor: &mut usize,
) -> Result<Option<Length>> {
    let mut found = Vec::new();
    for position in rule.positions_of(property).into_iter().rev() {
        if let Some(decl) = rule.remove(position).into_declaration() {
            found.push(decl);
        }
        if position < *anchor {
            *anchor -= 1;
        }
    }
    found.reverse();

    if found.is_empty() {
        *anchor = rule.clone_before(*anchor, property, "0");
        return Ok(None);
    }

    let mut length = None;
    let mut invalid = None;
    for mut decl in found {
        match Length::parse(&decl.value) {
            Some(parsed) => length = Some(parsed),
            None if invalid.is_none() => invalid = Some(decl.value.clone()),
            None => {}
        }
        decl.value = "0".to_string();
        *anchor = rule.insert_before(*anchor, decl);
    }

    match invalid {
        Some(value) => Err(TriangleError::declaration(
            &rule.selector,
            property,
            ErrorKind::InvalidLength {
                property: property.to_string(),
                value,
            },
        )),
        None => Ok(length),
    }
}

/// Splits a `triangle` value into shape and direction and checks that the
/// given dimensions suit the shape.
fn parse_triangle(
    selector: &str,
    value: &str,
    width: Option<Length>,
    height: Option<Length>,
) -> Result<TriangleSpec> {
    let mut tokens = value.split_whitespace();
    let first = tokens.next().unwrap_or_default();

    let (kind, direction) = match tokens.next() {
        None => {
            if width.is_none() {
                return Err(TriangleError::rule(selector, ErrorKind::MissingWidth));
            }
            if height.is_none() {
                return Err(TriangleError::rule(selector, ErrorKind::MissingHeight));
            }
            (TriangleKind::Isosceles, first)
        }
        Some(direction) => {
            let kind = TriangleKind::from_keyword(first).ok_or_else(|| {
                TriangleError::declaration(
                    selector,
                    TRIANGLE,
                    ErrorKind::UnsupportedType(first.to_string()),
                )
            })?;
            match (&width, &height) {
                (None, None) => {
                    return Err(TriangleError::rule(selector, ErrorKind::MissingWidthOrHeight));
                }
                (Some(_), Some(_)) => {
                    return Err(TriangleError::rule(
                        selector,
                        ErrorKind::ConflictingWidthAndHeight(first.to_string()),
                    ));
                }
                _ => {}
            }
            (kind, direction)
        }
    };

    let direction = Direction::from_keyword(direction).ok_or_else(|| {
        TriangleError::declaration(
            selector,
            TRIANGLE,
            ErrorKind::UnsupportedDirection(direction.to_string()),
        )
    })?;

    Ok(TriangleSpec {
        kind,
        direction,
        width,
        height,
    })
}

/// Renames every `background-color` to the border opposite the tip.
fn rewrite_background_color(rule: &mut Rule, direction: Direction) -> Result<()> {
    let positions = rule.positions_of(BACKGROUND_COLOR);
    if positions.is_empty() {
        return Err(TriangleError::rule(
            &rule.selector,
            ErrorKind::MissingBackgroundColor,
        ));
    }

    let property = format!("border-{}-color", direction.opposite_side());
    for position in positions {
        if let Some(decl) = rule.declaration_mut(position) {
            decl.property = property.clone();
        }
    }
    Ok(())
}
