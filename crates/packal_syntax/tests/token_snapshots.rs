//! Token-dump snapshot tests for the lexer.
//!
//! Review changes: `cargo insta review`

use packal_syntax::diagnostics::Diagnostics;
use packal_syntax::lexer;

/// One line per token: input line, kind, quoted lexeme.
fn dump(source: &str) -> (String, Diagnostics) {
    let mut sink = Diagnostics::new();
    let tokens = lexer::lex(source.as_bytes(), &mut sink);
    let lines: Vec<String> = tokens
        .iter()
        .map(|t| format!("{} {} {:?}", t.line, t.kind, t.text))
        .collect();
    (lines.join("\n"), sink)
}

#[test]
fn test_program_token_dump() {
    let (dump, sink) = dump("program P;\nvar a : integer;\nbegin readln(a); writeln(a) end.");
    assert!(sink.is_empty());
    insta::assert_snapshot!(dump, @r#"
    1 Keyword(program) "program"
    1 Identifier "P"
    1 Operator ";"
    2 Keyword(var) "var"
    2 Identifier "a"
    2 Operator ":"
    2 Keyword(integer) "integer"
    2 Operator ";"
    3 Keyword(begin) "begin"
    3 Keyword(readln) "readln"
    3 Operator "("
    3 Identifier "a"
    3 Operator ");"
    3 Keyword(writeln) "writeln"
    3 Operator "("
    3 Identifier "a"
    3 Operator ")"
    3 Keyword(end) "end"
    3 Operator "."
    3 Eof ""
    "#);
}

#[test]
fn test_declarations_token_dump() {
    let (dump, _) = dump("const lo, hi =-3;\nvar xs : array[1..10] of integer;");
    insta::assert_snapshot!(dump, @r#"
    1 Keyword(const) "const"
    1 Identifier "lo"
    1 Operator ","
    1 Identifier "hi"
    1 Operator "=-"
    1 Number "3"
    1 Operator ";"
    2 Keyword(var) "var"
    2 Identifier "xs"
    2 Operator ":"
    2 Keyword(array) "array"
    2 Operator "["
    2 Number "1"
    2 Operator ".."
    2 Number "10"
    2 Operator "]"
    2 Keyword(of) "of"
    2 Keyword(integer) "integer"
    2 Operator ";"
    2 Eof ""
    "#);
}

#[test]
fn test_unknown_bytes_dump() {
    let (dump, sink) = dump("a\u{1}\n\u{7f}b");
    insta::assert_snapshot!(dump, @r#"
    1 Identifier "a"
    1 Unknown "\\x01"
    2 Unknown "\\x7f"
    2 Identifier "b"
    2 Eof ""
    "#);

    let messages: Vec<String> = sink
        .errors()
        .map(|d| format!("{} line {:?}", d.message, d.input_line))
        .collect();
    insta::assert_snapshot!(messages.join("\n"), @r"
    Unknown character '\x01' line Some(1)
    Unknown character '\x7f' line Some(2)
    ");
}
