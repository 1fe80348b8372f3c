//! CSS parsing and stylesheet data structures.
//!
//! - [`parse_stylesheet`]: Main entry point for parsing CSS source
//! - [`StyleSheet`]: A parsed stylesheet (rules and comments)
//! - [`Rule`]: A selector with its declarations
//! - [`Declaration`]: A property-value pair like `width: 100px`
//!
//! Selectors and values are kept as opaque text. Whitespace around every node
//! is recorded in its `raws` so the [`writer`](crate::writer) can reproduce
//! the input.
//!
//! ## Example
//!
//! ```rust
//! use stylesheet::parser::parse_stylesheet;
//!
//! let sheet = parse_stylesheet("foo { width: 100px; }").unwrap();
//! let rule = sheet.rules().next().unwrap();
//!
//! assert_eq!(rule.selector, "foo");
//! assert_eq!(rule.declarations().next().unwrap().value, "100px");
//! ```

pub mod stylesheet;

pub use crate::parser::stylesheet::{
    Comment, Declaration, DeclarationRaws, Node, Rule, RuleItem, RuleRaws, StyleSheet,
};

use crate::StylesheetError;

use nom::{
    IResult,
    bytes::complete::{tag, take_till1, take_until, take_while1},
    character::complete::{char, multispace0},
    combinator::recognize,
    error::{Error, ErrorKind},
    multi::many0,
    sequence::{delimited, tuple},
};

/// Parses a full stylesheet.
pub fn parse_stylesheet(source: &str) -> Result<StyleSheet, StylesheetError> {
    let (remaining, nodes) =
        many0(parse_node)(source).map_err(|e| StylesheetError::InvalidSyntax(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(StylesheetError::InvalidSyntax(format!(
            "Unexpected tokens at end of stylesheet: {}",
            remaining.trim()
        )));
    }

    Ok(StyleSheet {
        nodes,
        after: remaining.to_string(),
    })
}

/// Parses a top-level comment or rule.
fn parse_node(input: &str) -> IResult<&str, Node> {
    let (rest, before) = multispace0(input)?;
    if let Ok((rest, text)) = parse_comment(rest) {
        return Ok((
            rest,
            Node::Comment(Comment {
                text: text.to_string(),
                before: before.to_string(),
            }),
        ));
    }

    let (rest, rule) = parse_rule(input)?;
    Ok((rest, Node::Rule(rule)))
}

/// Parses the body of a `/* ... */` comment.
fn parse_comment(input: &str) -> IResult<&str, &str> {
    delimited(tag("/*"), take_until("*/"), tag("*/"))(input)
}

/// Parses a CSS identifier (alphanumeric characters, dashes, and underscores).
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Parser for a single style rule (e.g., "foo { width: 100px; }").
pub fn parse_rule(input: &str) -> IResult<&str, Rule> {
    let (input, before) = multispace0(input)?;
    let (input, raw_selector) = take_till1(|c: char| c == '{' || c == '}' || c == ';')(input)?;

    let selector = raw_selector.trim_end();
    if selector.is_empty() {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify)));
    }
    let between = &raw_selector[selector.len()..];

    let (input, _) = char('{')(input)?;
    let (input, entries) = many0(parse_rule_item)(input)?;
    let (input, after) = multispace0(input)?;
    let (input, _) = char('}')(input)?;

    let semicolon = entries
        .iter()
        .rev()
        .find(|(item, _)| matches!(item, RuleItem::Declaration(_)))
        .is_some_and(|(_, semicolon)| *semicolon);

    Ok((
        input,
        Rule {
            selector: selector.to_string(),
            items: entries.into_iter().map(|(item, _)| item).collect(),
            raws: RuleRaws {
                before: before.to_string(),
                between: between.to_string(),
                after: after.to_string(),
                semicolon,
            },
        },
    ))
}

/// Parses a comment or declaration inside a rule. The flag tells whether a
/// declaration was terminated by `;`.
fn parse_rule_item(input: &str) -> IResult<&str, (RuleItem, bool)> {
    let (rest, before) = multispace0(input)?;
    if let Ok((rest, text)) = parse_comment(rest) {
        return Ok((
            rest,
            (
                RuleItem::Comment(Comment {
                    text: text.to_string(),
                    before: before.to_string(),
                }),
                false,
            ),
        ));
    }

    let (rest, (decl, semicolon)) = parse_declaration(input)?;
    Ok((rest, (RuleItem::Declaration(decl), semicolon)))
}

/// Parses one `property: value` declaration and its optional semicolon.
pub fn parse_declaration(input: &str) -> IResult<&str, (Declaration, bool)> {
    let (input, before) = multispace0(input)?;
    let (input, property) = parse_ident(input)?;
    let (input, between) = recognize(tuple((multispace0, char(':'), multispace0)))(input)?;

    let (rest, raw_value) = take_value(input)?;
    if rest.starts_with('{') {
        // Nested blocks are not supported.
        return Err(nom::Err::Error(Error::new(rest, ErrorKind::Char)));
    }

    let value = raw_value.trim_end();
    if value.is_empty() {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::TakeTill1)));
    }

    // Without a semicolon the trailing whitespace stays unconsumed so it lands
    // in the next item's `before` or in the rule's `after`.
    let input = &input[value.len()..];
    let (after_ws, after) = multispace0(input)?;
    let (input, after, semicolon) = match char::<&str, Error<&str>>(';')(after_ws) {
        Ok((rest, _)) => (rest, after, true),
        Err(_) => (input, "", false),
    };

    Ok((
        input,
        (
            Declaration {
                property: property.to_string(),
                value: value.to_string(),
                raws: DeclarationRaws {
                    before: before.to_string(),
                    between: between.to_string(),
                    after: after.to_string(),
                },
            },
            semicolon,
        ),
    ))
}

/// Takes a declaration value up to the first `;`, `{` or `}` that is not
/// inside parentheses or a quoted string.
fn take_value(input: &str) -> IResult<&str, &str> {
    let mut depth = 0usize;
    let mut quote = None;
    let mut escaped = false;

    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';' | '{' | '}') if depth == 0 => return Ok((&input[i..], &input[..i])),
            _ => {}
        }
    }

    Ok(("", input))
}
