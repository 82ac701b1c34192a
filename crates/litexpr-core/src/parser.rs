//! AST builder — recursive descent over the token list.
//!
//! Grammar (the language has no operators, so there is a single production chain):
//!
//! ```text
//! program          := primary EOF
//! primary          := '[' arrayDeclaration | constant | literal
//! arrayDeclaration := (primary (',' primary)*)? ','? ']'
//! ```
//!
//! The cursor only moves forward. Any mismatch fails immediately; no partial
//! tree is returned.

use crate::ast::{self, Literal, Node};
use crate::error::{CompileError, Result};
use crate::lexer::{Token, TokenValue};
use crate::options::CompileOptions;
use log::debug;

/// Build a `Program` tree from tokens using default options.
pub fn build(tokens: &[Token]) -> Result<Node> {
    build_with(tokens, &CompileOptions::default())
}

/// Build a `Program` tree from tokens.
///
/// Nesting is bounded by [`CompileOptions::effective_max_depth`].
pub fn build_with(tokens: &[Token], options: &CompileOptions) -> Result<Node> {
    let mut builder = Builder {
        tokens,
        index: 0,
        depth: 0,
        deepest: 0,
        max_depth: options.effective_max_depth(),
    };
    let program = builder.program()?;
    debug!(
        "built AST from {} tokens, array depth {}",
        tokens.len(),
        builder.deepest
    );
    Ok(program)
}

struct Builder<'a> {
    tokens: &'a [Token],
    index: usize,
    depth: usize,
    deepest: usize,
    max_depth: usize,
}

impl<'a> Builder<'a> {
    fn program(&mut self) -> Result<Node> {
        let body = self.primary()?;
        if let Some(extra) = self.tokens.get(self.index) {
            return Err(CompileError::Parse {
                expected: "end of input".to_string(),
                found: extra.text.clone(),
            });
        }
        Ok(Node::program(body))
    }

    fn primary(&mut self) -> Result<Node> {
        if self.expect(Some("[")).is_some() {
            return self.array_declaration();
        }
        if let Some(node) = self
            .peek(None)
            .filter(|token| token.value.is_none())
            .and_then(|token| ast::constant(&token.text))
        {
            self.index += 1;
            return Ok(node);
        }

        let token = self.consume(None)?;
        match &token.value {
            Some(TokenValue::Number(n)) => Ok(Node::literal(Literal::Number(*n))),
            Some(TokenValue::String(s)) => Ok(Node::literal(Literal::String(s.clone()))),
            None => Err(CompileError::Parse {
                expected: "a literal".to_string(),
                found: token.text.clone(),
            }),
        }
    }

    /// Parse the rest of an array; the opening `[` is already consumed.
    fn array_declaration(&mut self) -> Result<Node> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(CompileError::RecursionLimit {
                limit: self.max_depth,
            });
        }
        self.deepest = self.deepest.max(self.depth);

        let mut elements = Vec::new();
        if self.peek(Some("]")).is_none() {
            loop {
                elements.push(self.primary()?);
                if self.expect(Some(",")).is_none() {
                    break;
                }
                if self.peek(Some("]")).is_some() {
                    break;
                }
            }
        }
        self.consume(Some("]"))?;

        self.depth -= 1;
        Ok(Node::array(elements))
    }

    /// Look at the next token without consuming it, optionally requiring its text.
    ///
    /// String tokens never match an expected text even when their decoded
    /// content is `]` or `,`.
    fn peek(&self, expected: Option<&str>) -> Option<&'a Token> {
        let token = self.tokens.get(self.index)?;
        match expected {
            Some(text) if token.value.is_some() || token.text != text => None,
            _ => Some(token),
        }
    }

    /// Consume the next token if it matches.
    fn expect(&mut self, expected: Option<&str>) -> Option<&'a Token> {
        let token = self.peek(expected)?;
        self.index += 1;
        Some(token)
    }

    fn consume(&mut self, expected: Option<&str>) -> Result<&'a Token> {
        self.expect(expected).ok_or_else(|| CompileError::Parse {
            expected: expected.map_or_else(|| "a literal".to_string(), |t| format!("'{t}'")),
            found: self
                .tokens
                .get(self.index)
                .map_or_else(|| "end of input".to_string(), |t| t.text.clone()),
        })
    }
}
