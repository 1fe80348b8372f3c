//! Integration tests for stylesheet parsing.
//!
//! Covers:
//! - Rule and declaration structure
//! - Recorded raws (whitespace, semicolons)
//! - Comments
//! - Syntax errors

use stylesheet::StylesheetError;
use stylesheet::parser::{Node, RuleItem, parse_declaration, parse_rule, parse_stylesheet};

// ============================================================================
// RULES
// ============================================================================

#[test]
fn test_rule_single_declaration() {
    let (remaining, rule) = parse_rule("foo { width: 100px; }").unwrap();
    assert!(remaining.is_empty());

    assert_eq!(rule.selector, "foo");
    let decls: Vec<_> = rule.declarations().collect();
    assert_eq!(decls.len(), 1);
    assert_eq!(decls[0].property, "width");
    assert_eq!(decls[0].value, "100px");
}

#[test]
fn test_rule_keeps_declaration_order() {
    let (_, rule) = parse_rule(
        "foo {
            triangle: pointing-up;
            width: 100px;
            height: 20px;
            background-color: red;
        }",
    )
    .unwrap();

    let properties: Vec<_> = rule.declarations().map(|d| d.property.as_str()).collect();
    assert_eq!(
        properties,
        vec!["triangle", "width", "height", "background-color"]
    );
}

#[test]
fn test_rule_complex_selector_is_opaque() {
    let (_, rule) = parse_rule(".a > b:hover, #c::before { color: red; }").unwrap();
    assert_eq!(rule.selector, ".a > b:hover, #c::before");
}

#[test]
fn test_value_with_spaces_and_functions() {
    let (_, rule) = parse_rule("foo { border: 1px solid rgba(0, 0, 0, 0.5); }").unwrap();
    assert_eq!(
        rule.declarations().next().unwrap().value,
        "1px solid rgba(0, 0, 0, 0.5)"
    );
}

#[test]
fn test_empty_rule() {
    let (_, rule) = parse_rule("foo{}").unwrap();
    assert!(rule.items.is_empty());
    assert_eq!(rule.raws.between, "");
}

// ============================================================================
// RAWS
// ============================================================================

#[test]
fn test_declaration_raws() {
    let (_, (decl, semicolon)) = parse_declaration("\n  width :  100px;").unwrap();
    assert_eq!(decl.raws.before, "\n  ");
    assert_eq!(decl.raws.between, " :  ");
    assert!(semicolon);
}

#[test]
fn test_declaration_without_semicolon() {
    let (remaining, (decl, semicolon)) = parse_declaration("width: 100px }").unwrap();
    assert_eq!(decl.value, "100px");
    assert!(!semicolon);
    assert_eq!(remaining, " }");
}

#[test]
fn test_whitespace_before_semicolon_is_recorded() {
    let (remaining, (decl, semicolon)) = parse_declaration("color: red \t; }").unwrap();
    assert_eq!(decl.value, "red");
    assert_eq!(decl.raws.after, " \t");
    assert!(semicolon);
    assert_eq!(remaining, " }");
}

#[test]
fn test_value_keeps_semicolon_inside_parentheses() {
    let (remaining, (decl, _)) =
        parse_declaration("background: url(data:image/png;base64,AAAA);").unwrap();
    assert_eq!(decl.value, "url(data:image/png;base64,AAAA)");
    assert_eq!(remaining, "");
}

#[test]
fn test_value_keeps_braces_and_semicolons_inside_strings() {
    let (_, (decl, _)) = parse_declaration("content: \"a;}{\";").unwrap();
    assert_eq!(decl.value, "\"a;}{\"");

    let (_, (decl, _)) = parse_declaration("content: 'it\\'s;';").unwrap();
    assert_eq!(decl.value, "'it\\'s;'");
}

#[test]
fn test_rule_raws() {
    let (_, rule) = parse_rule("\nfoo  {\n\twidth: 0\n}").unwrap();
    assert_eq!(rule.raws.before, "\n");
    assert_eq!(rule.raws.between, "  ");
    assert_eq!(rule.raws.after, "\n");
    assert!(!rule.raws.semicolon);
}

#[test]
fn test_semicolon_recorded_for_last_declaration() {
    let (_, rule) = parse_rule("foo { a: 1; b: 2; }").unwrap();
    assert!(rule.raws.semicolon);
}

// ============================================================================
// COMMENTS
// ============================================================================

#[test]
fn test_comments_inside_rule() {
    let (_, rule) = parse_rule("foo { /* size */ width: 1px; /* end */ }").unwrap();
    assert_eq!(rule.items.len(), 3);
    assert!(matches!(&rule.items[0], RuleItem::Comment(c) if c.text == " size "));
    assert!(matches!(&rule.items[2], RuleItem::Comment(c) if c.text == " end "));
    assert_eq!(rule.declarations().count(), 1);
}

#[test]
fn test_comment_between_rules() {
    let sheet = parse_stylesheet("a { b: c; }\n/* between */\nd { e: f; }\n").unwrap();
    assert_eq!(sheet.nodes.len(), 3);
    assert!(matches!(&sheet.nodes[1], Node::Comment(c) if c.text == " between "));
    assert_eq!(sheet.rules().count(), 2);
    assert_eq!(sheet.after, "\n");
}

// ============================================================================
// STYLESHEETS AND ERRORS
// ============================================================================

#[test]
fn test_empty_stylesheet() {
    let sheet = parse_stylesheet("").unwrap();
    assert!(sheet.nodes.is_empty());

    let sheet = parse_stylesheet("  \n ").unwrap();
    assert!(sheet.nodes.is_empty());
    assert_eq!(sheet.after, "  \n ");
}

#[test]
fn test_missing_value_is_error() {
    assert!(parse_stylesheet("foo { width: }").is_err());
}

#[test]
fn test_unclosed_rule_is_error() {
    assert!(parse_stylesheet("foo { width: 1px;").is_err());
}

#[test]
fn test_nested_rule_is_error() {
    assert!(parse_stylesheet("foo { &:hover { color: red; } }").is_err());
}

#[test]
fn test_stray_tokens_are_error() {
    let err = parse_stylesheet("foo { a: b; } }").unwrap_err();
    assert!(err.to_string().contains("Unexpected tokens"));
}

#[test]
fn test_errors_are_syntax_errors() {
    let StylesheetError::InvalidSyntax(message) = parse_stylesheet("foo { a: b; } }").unwrap_err();
    assert_eq!(message, "Unexpected tokens at end of stylesheet: }");

    let err = parse_stylesheet("foo { content: \"open; }").unwrap_err();
    assert!(matches!(err, StylesheetError::InvalidSyntax(_)));
}
