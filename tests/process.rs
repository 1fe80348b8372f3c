use std::fs;

use triangle_css::{Config, Error, ErrorKind, process, process_file};

#[test]
fn test_process_expands_triangles() {
    let css = process(
        "foo {\n\
         triangle: pointing-up;\n\
         width: 100px;\n\
         height: 20px;\n\
         background-color: red;\n\
         }\n",
        &Config::default(),
    )
    .unwrap();

    assert_eq!(
        css,
        "foo {\n\
         width: 0;\n\
         height: 0;\n\
         border-style: solid;\n\
         border-color: transparent;\n\
         border-width: 0 50px 20px;\n\
         border-bottom-color: red;\n\
         }\n"
    );
}

#[test]
fn test_process_identity_without_triangles() {
    let css = "/* base */\nfoo{}\nbar { color: red }\n";
    assert_eq!(process(css, &Config::default()).unwrap(), css);

    let css = "a { color: red ; background: url(data:image/png;base64,AAAA); }";
    assert_eq!(process(css, &Config::default()).unwrap(), css);
}

#[test]
fn test_process_reports_syntax_errors() {
    let err = process("foo { width: 1px;", &Config::default()).unwrap_err();
    assert!(matches!(err, Error::Stylesheet(_)));
}

#[test]
fn test_process_reports_triangle_errors() {
    let err = process("foo{triangle:bar pointing-up;}", &Config::default()).unwrap_err();
    match err {
        Error::Triangle(err) => {
            assert_eq!(err.kind, ErrorKind::UnsupportedType("bar".to_string()));
        }
        other => panic!("expected triangle error, got {other:?}"),
    }
    let err = process("foo{triangle:bar pointing-up;}", &Config::default()).unwrap_err();
    assert_eq!(err.to_string(), "foo: Unsupported type: bar");
}

#[test]
fn test_process_file() {
    let path = std::env::temp_dir().join(format!("triangle-css-{}.css", std::process::id()));
    fs::write(
        &path,
        "a { triangle: right-iso pointing-left; height: 10px; background-color: red; }",
    )
    .unwrap();

    let css = process_file(&path, &Config::new(0).unwrap()).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(
        css,
        "a { width: 0; height: 0; border-style: solid; border-color: transparent; \
         border-width: 5px 5px 5px 0; border-right-color: red; }"
    );
}

#[test]
fn test_process_missing_file() {
    let err = process_file("/definitely/not/here.css", &Config::default()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
