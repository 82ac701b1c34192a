//! Code generator — turns an AST into the source text of a zero-argument function body.
//!
//! The output is JavaScript function-body syntax (`return [1,"a"];`) for hosts
//! that build a callable from text. Because that text becomes live code, string
//! values are re-serialized through a strict allowlist:
//!
//! - ASCII letters, digits and the space character pass through unchanged.
//! - Every other character, including both quote characters and the backslash,
//!   becomes a `\uXXXX` escape of its UTF-16 code unit(s).
//!
//! Numbers, booleans and `null` are emitted in canonical form; they were already
//! validated by the tokenizer and cannot carry injectable syntax.

use crate::ast::{Literal, Node};
use log::debug;
use std::fmt::Write;

/// Generate the body of a callable that returns the value described by `ast`.
pub fn generate(ast: &Node) -> String {
    let mut out = String::new();
    recurse(ast, &mut out);
    debug!("generated {} bytes of code", out.len());
    out
}

fn recurse(node: &Node, out: &mut String) {
    match node {
        Node::Program { body } => {
            out.push_str("return ");
            recurse(body, out);
            out.push(';');
        }
        Node::Literal { value } => escape_literal(value, out),
        Node::ArrayExpression { elements } => {
            out.push('[');
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                recurse(element, out);
            }
            out.push(']');
        }
    }
}

fn escape_literal(value: &Literal, out: &mut String) {
    match value {
        Literal::Null => out.push_str("null"),
        Literal::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Literal::Number(n) => out.push_str(&format_number(*n)),
        Literal::String(s) => escape_string(s, out),
    }
}

/// Canonical decimal text of a number. Integral values print without a
/// fractional part; infinities print as `Infinity`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{n}")
    }
}

/// Emit `s` as a double-quoted string literal using the allowlist escape.
pub fn escape_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        if ch.is_ascii_alphanumeric() || ch == ' ' {
            out.push(ch);
        } else {
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                // Writing to a String cannot fail.
                let _ = write!(out, "\\u{unit:04x}");
            }
        }
    }
    out.push('"');
}
