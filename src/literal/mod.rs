//! # GraphQL Value Literals
//!
//! Parser and printer for values written inline in a document.
//! Pure functions with no schema dependency.

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{Literal, ObjectField};

use crate::Result;

/// Parse the text of one value literal into an AST node.
pub fn parse(text: &str) -> Result<Literal> {
    let tokens = lexer::tokenize(text)?;
    parser::parse_value_literal(&tokens)
}
