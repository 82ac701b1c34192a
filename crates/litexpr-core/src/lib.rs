//! # litexpr-core
//!
//! Compiler for the **literal-expression** language: numbers (with scientific
//! notation), quoted strings (with escapes), `null`/`true`/`false`, and array
//! literals. Source text goes through a strict pipeline and comes out as a
//! [`Callable`] that reproduces the value described by the source.
//!
//! ## Quick start
//!
//! ```rust
//! use litexpr_core::{compile, Value};
//!
//! let f = compile("[1, 'two', true, [3]]").unwrap();
//! assert_eq!(
//!     f.call(),
//!     Value::Array(vec![
//!         Value::Number(1.0),
//!         Value::from("two"),
//!         Value::Bool(true),
//!         Value::Array(vec![Value::Number(3.0)]),
//!     ])
//! );
//! assert_eq!(f.source(), r#"return [1,"two",true,[3]];"#);
//! ```
//!
//! ## Modules
//!
//! - [`lexer`] — source text → tokens
//! - [`parser`] — tokens → AST (`Program` root)
//! - [`codegen`] — AST → escaped function-body text
//! - [`compiler`] — the facade: `compile`, `compile_with`, `parse`, [`Callable`]
//! - [`printer`] — [`Value`] → source text (inverse of compiling)
//! - [`ast`], [`value`], [`options`], [`error`] — data types

pub mod ast;
pub mod codegen;
pub mod compiler;
pub mod error;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod printer;
pub mod value;

pub use ast::{Literal, Node};
pub use codegen::generate;
pub use compiler::{compile, compile_with, parse, Callable};
pub use error::{CompileError, Result};
pub use lexer::{tokenize, Token, TokenValue};
pub use options::{CompileOptions, DEFAULT_MAX_DEPTH, MAX_SAFE_DEPTH};
pub use parser::{build, build_with};
pub use printer::to_source;
pub use value::Value;
