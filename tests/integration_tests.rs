//! Integration tests for the Packal front end over the fixture programs

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use packal::ast::{Declaration, DeclarationKind, Program};
use packal::diagnostics::{Diagnostics, Severity, SyntaxError, SyntaxErrorKind};
use packal::parser;

/// Helper to run the parser on a fixture file
fn parse_fixture(path: &Path) -> (Result<Program, SyntaxError>, Diagnostics) {
    let file = File::open(path).unwrap_or_else(|e| panic!("cannot open {}: {}", path.display(), e));
    let mut sink = Diagnostics::new();
    let result = parser::parse(file, &mut sink);
    (result, sink)
}

fn fixtures(dir: &str) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = fs::read_dir(Path::new("tests/fixtures").join(dir))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|e| e == "pas"))
        .collect();
    paths.sort();
    paths
}

/// Test that all valid fixtures parse without errors
#[test]
fn test_valid_fixtures() {
    let paths = fixtures("valid");
    assert!(!paths.is_empty());
    for path in paths {
        let (result, sink) = parse_fixture(&path);
        assert!(
            result.is_ok(),
            "Expected {} to parse successfully, got: {}",
            path.display(),
            result.unwrap_err()
        );
        assert!(!sink.has_errors(), "{}: {:?}", path.display(), sink.entries());
    }
}

/// Test that invalid fixtures produce exactly one fatal error
#[test]
fn test_invalid_fixtures() {
    let paths = fixtures("invalid");
    assert!(!paths.is_empty());
    for path in paths {
        let (result, sink) = parse_fixture(&path);
        assert!(result.is_err(), "Expected {} to fail", path.display());
        assert_eq!(sink.count(Severity::Error), 1, "{}: {:?}", path.display(), sink.entries());
    }
}

#[test]
fn test_tables_fixture_declarations() {
    let (result, sink) = parse_fixture(Path::new("tests/fixtures/valid/tables.pas"));
    let program = result.unwrap();
    assert!(sink.is_empty(), "{:?}", sink.entries());
    assert_eq!(program.name, "Tables");
    assert_eq!(program.declarations.get("low"), Some(&Declaration::Constant(10)));
    assert_eq!(program.declarations.get("high"), Some(&Declaration::Constant(10)));
    assert_eq!(program.declarations.get("offset"), Some(&Declaration::Constant(-3)));
    assert_eq!(program.declarations.get("xs"), Some(&Declaration::Array { start: 1, end: 10 }));
    assert_eq!(program.declarations.kind_of("total"), Some(DeclarationKind::Integer));
    assert_eq!(program.declarations.len(), 6);
    assert_eq!(program.block.statements.len(), 4);
}

#[test]
fn test_shadow_fixture_warns() {
    let (result, sink) = parse_fixture(Path::new("tests/fixtures/valid/shadow.pas"));
    let program = result.unwrap();
    let warnings: Vec<_> = sink.warnings().collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].input_line, Some(3));
    assert_eq!(program.declarations.kind_of("n"), Some(DeclarationKind::Integer));
}

#[test]
fn test_invalid_fixture_kinds_and_lines() {
    let expectations = [
        ("missing_dot.pas", SyntaxErrorKind::Syntax, 4),
        ("missing_semicolon.pas", SyntaxErrorKind::Syntax, 2),
        ("procedure.pas", SyntaxErrorKind::Unsupported, 2),
        ("reversed_bounds.pas", SyntaxErrorKind::InvalidLiteral, 2),
        ("unknown_identifier.pas", SyntaxErrorKind::UnknownIdentifier, 4),
        ("write_constant.pas", SyntaxErrorKind::TypeMismatch, 4),
    ];
    for (name, kind, line) in expectations {
        let path = Path::new("tests/fixtures/invalid").join(name);
        let (result, _) = parse_fixture(&path);
        let err = result.unwrap_err();
        assert_eq!(err.kind, kind, "{name}: {err}");
        assert_eq!(err.input_line, line, "{name}: {err}");
    }
}
