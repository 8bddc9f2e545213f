//! Script source code parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parser struct, cursor helpers and error types
//! - [`declarations`], [`statements`], [`expressions`]: the grammar, split by rule family
//! - [`ast`]: AST node definitions
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one function per precedence
//! level for binary operators. No external parser generator dependencies.

pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod lexer;
pub mod parse;
pub mod statements;

use ast::Program;
use parse::{ParseError, Parser};

/// Tokenize and parse a complete source string.
pub fn parse_source(source: &str) -> Result<Program, ParseError> {
    let mut parser = Parser::from_source(source)?;
    Ok(parser.parse_program()?)
}
