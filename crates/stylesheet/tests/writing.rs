//! Integration tests for serializing parsed stylesheets.

use stylesheet::parser::parse_stylesheet;

fn round_trip(source: &str) -> String {
    parse_stylesheet(source).unwrap().to_css()
}

#[test]
fn test_identity_compact() {
    let css = "foo{}";
    assert_eq!(round_trip(css), css);
}

#[test]
fn test_identity_multiline() {
    let css = "foo {\nwidth: 100px;\nheight: 50px;\nbackground-color: red;\n}";
    assert_eq!(round_trip(css), css);
}

#[test]
fn test_identity_without_final_semicolon() {
    let css = "foo { width: 100px; height: 50px }";
    assert_eq!(round_trip(css), css);
}

#[test]
fn test_identity_with_comments_and_indentation() {
    let css = "/* header */\n.a,\n.b {\n    /* size */\n    width : 1em;\n    color:red;\n}\n\n#c{d:e}\n";
    assert_eq!(round_trip(css), css);
}

#[test]
fn test_identity_with_whitespace_before_semicolon() {
    let css = "a { color: red ; }";
    assert_eq!(round_trip(css), css);

    let css = "a {\n    width: 1px\t;\n    height: 2px  ;\n}";
    assert_eq!(round_trip(css), css);
}

#[test]
fn test_identity_with_semicolon_inside_url() {
    let css = "a { background: url(data:image/png;base64,AAAA); }";
    assert_eq!(round_trip(css), css);
}

#[test]
fn test_identity_with_punctuation_inside_strings() {
    let css = "a { content: \";\"; }\nb::after { content: '}{'; quotes: \"\\\"\" \"'\" }";
    assert_eq!(round_trip(css), css);
}
