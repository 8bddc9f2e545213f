//! # Introduction
//!
//! `scriptfront` is the front-end of a small imperative scripting language:
//! `var` declarations, functions, `if`/`while`/`for` with braced bodies, and
//! integer, string and boolean-style (`and`, `or`, `!`) expressions.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST
//! ```
//!
//! 1. [`parser::lexer`] — turns source text into [`parser::lexer::Token`]s,
//!    stopping at the first character it does not recognise.
//! 2. [`parser::parse`] — recursive descent over the token buffer with one
//!    token of lookahead, producing a [`parser::ast::Program`].
//!
//! Both stages fail fast: the first error ends the pass and no partial tree is
//! returned.
//!
//! ```
//! use scriptfront::parser::ast::{AstNode, BinOp};
//!
//! let program = scriptfront::parser::parse_source("var x = 1 + 2;").unwrap();
//! match &program.nodes[0] {
//!     AstNode::VariableDeclaration { name, init: Some(init) } => {
//!         assert_eq!(name, "x");
//!         assert!(matches!(**init, AstNode::BinaryOp { op: BinOp::Add, .. }));
//!     }
//!     other => panic!("unexpected node {:?}", other),
//! }
//! ```

pub mod parser;

pub use parser::parse_source;
