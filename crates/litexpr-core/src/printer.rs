//! Source printer — renders a [`Value`] back into literal-expression source text.
//!
//! This is the inverse of compiling: for every value it accepts,
//! `compile(&to_source(&v)?)?.call() == v`. The language has no sign operator,
//! so negative and non-finite numbers are rejected, as are arrays nested
//! deeper than [`DEFAULT_MAX_DEPTH`], which `compile` would refuse.

use crate::error::{CompileError, Result};
use crate::options::DEFAULT_MAX_DEPTH;
use crate::value::Value;
use std::fmt::Write;

/// Render `value` as literal-expression source.
pub fn to_source(value: &Value) -> Result<String> {
    let mut out = String::new();
    print_value(value, 0, &mut out)?;
    Ok(out)
}

fn print_value(value: &Value, depth: usize, out: &mut String) -> Result<()> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => {
            if !n.is_finite() || n.is_sign_negative() {
                return Err(CompileError::Unrepresentable(format!("number {n}")));
            }
            // Display for f64 never uses exponent notation and round-trips.
            let _ = write!(out, "{n}");
        }
        Value::String(s) => print_string(s, out),
        Value::Array(items) => {
            if depth >= DEFAULT_MAX_DEPTH {
                return Err(CompileError::Unrepresentable(format!(
                    "arrays nested deeper than {DEFAULT_MAX_DEPTH}"
                )));
            }
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                print_value(item, depth + 1, out)?;
            }
            out.push(']');
        }
    }
    Ok(())
}

fn print_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{000C}' => out.push_str("\\f"),
            '\u{000B}' => out.push_str("\\v"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
