//! Abstract syntax tree for literal expressions.
//!
//! The tree mirrors the shape hosts expect when they inspect it as JSON:
//! `{"type": "Program", "body": ...}`, `{"type": "Literal", "value": ...}`
//! and `{"type": "ArrayExpression", "elements": [...]}`.

use serde::Serialize;

/// A fully decoded scalar held by a `Literal` node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    #[serde(serialize_with = "crate::value::serialize_number")]
    Number(f64),
    String(String),
    Boolean(bool),
    Null,
}

/// One node of the tree. Every tree has exactly one `Program` at the root.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    Program { body: Box<Node> },
    Literal { value: Literal },
    ArrayExpression { elements: Vec<Node> },
}

impl Node {
    pub fn program(body: Node) -> Self {
        Node::Program {
            body: Box::new(body),
        }
    }

    pub fn literal(value: Literal) -> Self {
        Node::Literal { value }
    }

    pub fn array(elements: Vec<Node>) -> Self {
        Node::ArrayExpression { elements }
    }
}

/// Identifiers with a fixed literal meaning.
pub const CONSTANTS: [(&str, Literal); 3] = [
    ("null", Literal::Null),
    ("true", Literal::Boolean(true)),
    ("false", Literal::Boolean(false)),
];

/// Look up an identifier in the constant table.
pub fn constant(text: &str) -> Option<Node> {
    CONSTANTS
        .iter()
        .find(|(name, _)| *name == text)
        .map(|(_, value)| Node::literal(value.clone()))
}
