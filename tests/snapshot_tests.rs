//! Snapshot tests for what the front end builds from the fixture programs.
//!
//! Review changes: `cargo insta review`

use std::fs::File;

use packal::diagnostics::Diagnostics;
use packal::parser;

/// Declaration table (sorted by name) followed by the block's statements.
fn summary(fixture: &str) -> String {
    let file = File::open(format!("tests/fixtures/valid/{fixture}")).unwrap();
    let mut sink = Diagnostics::new();
    let program = parser::parse(file, &mut sink).unwrap();

    let mut lines = vec![format!("program {}", program.name)];
    for (name, declaration) in program.declarations.iter() {
        lines.push(format!("  {name}: {declaration:?}"));
    }
    lines.push("begin".to_string());
    for statement in &program.block.statements {
        lines.push(format!("  {statement:?}"));
    }
    lines.push("end".to_string());
    for warning in sink.warnings() {
        lines.push(format!("warning (line {:?}): {}", warning.input_line, warning.message));
    }
    lines.join("\n")
}

#[test]
fn test_tables_fixture_summary() {
    insta::assert_snapshot!(summary("tables.pas"), @r#"
    program Tables
      high: Constant(10)
      i: Integer
      low: Constant(10)
      offset: Constant(-3)
      total: Integer
      xs: Array { start: 1, end: 10 }
    begin
      Readln("i")
      Readln("xs")
      Writeln("total")
      Writeln("xs")
    end
    "#);
}

#[test]
fn test_shadow_fixture_summary() {
    insta::assert_snapshot!(summary("shadow.pas"), @r#"
    program Shadow
      n: Integer
    begin
      Writeln("n")
    end
    warning (line Some(3)): Integer variable "n" hides previous declaration of "n"
    "#);
}
