//! Compiler facade — tokenizer → AST builder → code generator in one call.
//!
//! The returned [`Callable`] captures the AST and evaluates it with a tree walk
//! each time it is invoked. The generated code text is kept alongside for hosts
//! that want to embed it.

use crate::ast::{Literal, Node};
use crate::codegen;
use crate::error::Result;
use crate::lexer;
use crate::options::CompileOptions;
use crate::parser;
use crate::value::Value;

/// A compiled literal expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Callable {
    ast: Node,
    source: String,
}

impl Callable {
    /// Evaluate the expression. Every call returns a fresh value.
    pub fn call(&self) -> Value {
        evaluate(&self.ast)
    }

    /// The generated function body, e.g. `return [1,"a"];`.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The `Program` tree this callable evaluates.
    pub fn ast(&self) -> &Node {
        &self.ast
    }

    /// Adapt into a plain closure.
    pub fn into_fn(self) -> impl Fn() -> Value + Send + Sync + Clone {
        move || self.call()
    }
}

/// Compile `source` with default options.
pub fn compile(source: &str) -> Result<Callable> {
    compile_with(source, &CompileOptions::default())
}

/// Compile `source`. Errors from any stage are returned unchanged.
pub fn compile_with(source: &str, options: &CompileOptions) -> Result<Callable> {
    let tokens = lexer::tokenize(source)?;
    let ast = parser::build_with(&tokens, options)?;
    let code = codegen::generate(&ast);
    Ok(Callable { ast, source: code })
}

/// Lexer → AST → compile in one call; same as [`compile`].
pub fn parse(expr: &str) -> Result<Callable> {
    compile(expr)
}

fn evaluate(node: &Node) -> Value {
    match node {
        Node::Program { body } => evaluate(body),
        Node::Literal { value } => match value {
            Literal::Null => Value::Null,
            Literal::Boolean(b) => Value::Bool(*b),
            Literal::Number(n) => Value::Number(*n),
            Literal::String(s) => Value::String(s.clone()),
        },
        Node::ArrayExpression { elements } => {
            let mut items = Vec::with_capacity(elements.len());
            for element in elements {
                items.push(evaluate(element));
            }
            Value::Array(items)
        }
    }
}
