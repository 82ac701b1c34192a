use litexpr_core::{compile, parse, CompileError, Literal, Node, Value};

/// Helper: compile and invoke, panicking with the source on failure.
fn eval(source: &str) -> Value {
    compile(source)
        .unwrap_or_else(|e| panic!("compile failed for {source:?}: {e}"))
        .call()
}

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn assert_number(source: &str, expected: f64) {
    let actual = eval(source);
    assert_eq!(actual, num(expected), "source: {source:?}");
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn integer() {
    assert_number("42", 42.0);
}

#[test]
fn floating_point() {
    assert_number("1.2", 1.2);
}

#[test]
fn float_without_integer_part() {
    assert_number(".22", 0.22);
}

#[test]
fn scientific_notation() {
    assert_number("23e3", 23000.0);
}

#[test]
fn scientific_notation_with_float_coefficient() {
    assert_number(".23e3", 230.0);
}

#[test]
fn scientific_notation_with_negative_exponent() {
    assert_number("2200e-2", 22.0);
}

#[test]
fn scientific_notation_with_plus_sign() {
    assert_number("2200e+2", 220000.0);
}

#[test]
fn upper_case_scientific_notation() {
    assert_number(".22E2", 22.0);
    assert_number("2200E+2", 220000.0);
}

#[test]
fn overflowing_literal_is_infinite() {
    assert_eq!(eval("1e400"), num(f64::INFINITY));
}

#[test]
fn invalid_scientific_notation() {
    for source in [".23e", ".23e-", ".23ea", ".23-3"] {
        let err = compile(source).unwrap_err();
        assert!(
            matches!(err, CompileError::InvalidNumber { .. }),
            "{source:?} gave {err:?}"
        );
    }
}

#[test]
fn repeated_dots_fail_conversion() {
    let err = compile("1.2.3").unwrap_err();
    assert!(matches!(err, CompileError::NumberFormat { .. }), "{err:?}");
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn string_in_single_quotes() {
    assert_eq!(eval("'abc'"), Value::from("abc"));
}

#[test]
fn string_in_double_quotes() {
    assert_eq!(eval("\"abc\""), Value::from("abc"));
}

#[test]
fn mismatching_quotes() {
    let err = compile("\"abc'").unwrap_err();
    assert_eq!(
        err,
        CompileError::MismatchedQuote {
            open: '"',
            close: '\'',
            offset: 0
        }
    );
}

#[test]
fn unclosed_string() {
    let err = compile("'abc").unwrap_err();
    assert_eq!(err, CompileError::UnclosedString { offset: 0 });
    let err = compile("[1, \"ab\\\"").unwrap_err();
    assert_eq!(err, CompileError::UnclosedString { offset: 4 });
}

#[test]
fn other_quote_inside_is_content() {
    assert_eq!(eval("'say \"hi\"'"), Value::from("say \"hi\""));
    assert_eq!(eval("\"it's\""), Value::from("it's"));
}

#[test]
fn escaped_single_quote_inside() {
    assert_eq!(eval("'a\\'b'"), Value::from("a'b"));
}

#[test]
fn escaped_double_quote_inside() {
    assert_eq!(eval("\"a\\\"b\""), Value::from("a\"b"));
}

#[test]
fn escape_table() {
    assert_eq!(
        eval(r#""\n\f\r\t\v""#),
        Value::from("\n\u{000C}\r\t\u{000B}")
    );
}

#[test]
fn unknown_escapes_pass_through() {
    assert_eq!(eval(r#""\a\\\/""#), Value::from("a\\/"));
}

#[test]
fn unicode_escape() {
    assert_eq!(eval("\"\\u00A0\""), Value::from("\u{00A0}"));
    assert_eq!(eval("'\\u0041\\u00e9'"), Value::from("A\u{00e9}"));
}

#[test]
fn unicode_surrogate_pair() {
    assert_eq!(eval(r#""\uD83D\uDE00""#), Value::from("\u{1F600}"));
}

#[test]
fn invalid_unicode_escapes() {
    for source in [r#""\u00T0""#, r#""\u00""#, r#""\u""#, r#""\uDE00""#, r#""\uD83Dx""#] {
        let err = compile(source).unwrap_err();
        assert!(
            matches!(err, CompileError::InvalidUnicodeEscape { .. }),
            "{source:?} gave {err:?}"
        );
    }
}

// ============================================================================
// Constants
// ============================================================================

#[test]
fn null() {
    assert_eq!(eval("null"), Value::Null);
}

#[test]
fn true_constant() {
    assert_eq!(eval("true"), Value::Bool(true));
}

#[test]
fn false_constant() {
    assert_eq!(eval("false"), Value::Bool(false));
}

#[test]
fn unknown_identifier_is_a_parse_error() {
    let err = compile("undefined").unwrap_err();
    assert_eq!(
        err,
        CompileError::Parse {
            expected: "a literal".into(),
            found: "undefined".into()
        }
    );
}

// ============================================================================
// Whitespace
// ============================================================================

#[test]
fn ignores_whitespace() {
    assert_eq!(eval(" \n42 "), eval("42"));
    assert_eq!(eval("\t\r\u{000B}\u{00A0}[ 1 ,\n2 ]\n"), eval("[1,2]"));
}

#[test]
fn unexpected_character() {
    let err = compile("[1, -2]").unwrap_err();
    assert_eq!(err, CompileError::UnexpectedCharacter { ch: '-', offset: 4 });
    let err = compile("{}").unwrap_err();
    assert_eq!(err, CompileError::UnexpectedCharacter { ch: '{', offset: 0 });
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn empty_array() {
    assert_eq!(eval("[]"), Value::Array(vec![]));
}

#[test]
fn non_empty_array() {
    assert_eq!(
        eval("[1, 'two', true, [3]]"),
        Value::Array(vec![
            num(1.0),
            Value::from("two"),
            Value::Bool(true),
            Value::Array(vec![num(3.0)]),
        ])
    );
}

#[test]
fn value_accessors() {
    let value = eval("[1, 'two', true, [3], null]");
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 5);
    assert_eq!(items[0].as_f64(), Some(1.0));
    assert_eq!(items[1].as_str(), Some("two"));
    assert_eq!(items[2].as_bool(), Some(true));
    assert_eq!(items[3].as_array(), Some(&[num(3.0)][..]));
    assert!(items[4].is_null());

    assert_eq!(items[1].as_f64(), None);
    assert_eq!(items[0].as_str(), None);
    assert_eq!(items[4].as_bool(), None);
    assert!(items[0].as_array().is_none());
    assert!(!value.is_null());
}

#[test]
fn callable_exposes_its_tree() {
    let callable = compile("[null, 'a']").unwrap();
    assert_eq!(
        callable.ast(),
        &Node::program(Node::array(vec![
            Node::literal(Literal::Null),
            Node::literal(Literal::String("a".into())),
        ]))
    );
}

#[test]
fn array_with_trailing_comma() {
    assert_eq!(eval("[1,2,3,]"), Value::from(vec![1.0, 2.0, 3.0]));
}

#[test]
fn malformed_arrays() {
    for source in ["[1,,2]", "[,]", "[1,2", "[1 2]", "[", "]", "[1]]"] {
        let err = compile(source).unwrap_err();
        assert!(
            matches!(err, CompileError::Parse { .. }),
            "{source:?} gave {err:?}"
        );
    }
}

#[test]
fn empty_input_is_a_parse_error() {
    let err = compile("  ").unwrap_err();
    assert_eq!(
        err,
        CompileError::Parse {
            expected: "a literal".into(),
            found: "end of input".into()
        }
    );
}

#[test]
fn trailing_tokens_are_rejected() {
    let err = compile("1 2").unwrap_err();
    assert_eq!(
        err,
        CompileError::Parse {
            expected: "end of input".into(),
            found: "2".into()
        }
    );
}

// ============================================================================
// Facade behavior
// ============================================================================

#[test]
fn parse_is_compile() {
    assert_eq!(parse("[null]").unwrap(), compile("[null]").unwrap());
}

#[test]
fn compiling_twice_is_independent() {
    let a = compile("[1, ['x']]").unwrap();
    let b = compile("[1, ['x']]").unwrap();
    assert_eq!(a.call(), b.call());
    assert_eq!(a.call(), a.call());
}

#[test]
fn concurrent_compiles() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("[{i}, '{i}']");
                compile(&source).unwrap().call()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let value = handle.join().unwrap();
        assert_eq!(
            value,
            Value::Array(vec![num(i as f64), Value::String(i.to_string())])
        );
    }
}
