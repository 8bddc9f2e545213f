//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, cursor helpers, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: declaration dispatch, `var` and `function` declarations
//! - `statements`: blocks and control flow (`if`, `while`, `for`, ...)
//! - `expressions`: expressions with one function per precedence level
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! The only state is a cursor into the token buffer. Every grammar decision is
//! made from the kind of the current token; nothing is ever backtracked.

use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexer, Token, TokenKind, TokenValue};
use thiserror::Error;

/// Maximum nesting of blocks, parentheses, prefix operators and assignments.
///
/// Deeper input is rejected with [`SyntaxError::NestingTooDeep`] before the
/// recursion can exhaust the stack.
pub const MAX_NESTING_DEPTH: usize = 200;

/// Syntax error: the token stream does not match the grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// `eat` saw a different token (or none at all) than the grammar requires.
    #[error("Expected {expected}, found {}", describe(.found))]
    UnexpectedToken {
        expected: TokenKind,
        found: Option<TokenKind>,
    },

    /// A primary expression was required but the current token cannot start one.
    #[error("Expected expression, found {}", describe(.found))]
    ExpectedExpression { found: Option<TokenKind> },

    /// The keyword is reserved but has no grammar rule.
    #[error("Unsupported declaration: {0} has no grammar rule")]
    UnsupportedDeclaration(TokenKind),

    /// A literal or identifier token without the payload its kind requires.
    #[error("Malformed {0} token: missing value")]
    MalformedToken(TokenKind),

    #[error("Nesting too deep: more than {} levels", MAX_NESTING_DEPTH)]
    NestingTooDeep,
}

fn describe(found: &Option<TokenKind>) -> String {
    match found {
        Some(kind) => kind.to_string(),
        None => "end of input".to_string(),
    }
}

/// Any failure on the way from source text to a [`Program`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Lexer error: {0}")]
    Lex(#[from] LexError),

    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

/// Recursive descent parser for the scripting language
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    depth: usize,
}

impl Parser {
    /// Create a parser over an already tokenized stream.
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
            position: 0,
            depth: 0,
        }
    }

    /// Tokenize `source` and create a parser over the result.
    pub fn from_source(source: &str) -> Result<Self, LexError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self::new(tokens))
    }

    /// Parse the entire program (top-level declarations)
    pub fn parse_program(&mut self) -> Result<Program, SyntaxError> {
        let mut program = Program::new();

        while !self.is_at_end() {
            let decl = self.parse_declaration()?;
            program.nodes.push(decl);
        }

        Ok(program)
    }

    // ===== Helper methods =====

    /// Kind of the current token, `None` at end of input.
    pub(crate) fn current_kind(&self) -> Option<TokenKind> {
        self.tokens.get(self.position).map(|t| t.kind)
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Consume the current token if it has the expected kind, otherwise fail.
    ///
    /// Returns the consumed token so callers can take its payload.
    pub(crate) fn eat(&mut self, expected: TokenKind) -> Result<Token, SyntaxError> {
        match self.tokens.get(self.position) {
            Some(token) if token.kind == expected => {
                let token = token.clone();
                self.position += 1;
                Ok(token)
            }
            other => Err(SyntaxError::UnexpectedToken {
                expected,
                found: other.map(|t| t.kind),
            }),
        }
    }

    /// Run `rule` one nesting level deeper, failing past [`MAX_NESTING_DEPTH`].
    pub(crate) fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(SyntaxError::NestingTooDeep);
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<String, SyntaxError> {
        let token = self.eat(TokenKind::Id)?;
        match token.value {
            TokenValue::Ident(name) => Ok(name),
            _ => Err(SyntaxError::MalformedToken(TokenKind::Id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_declaration() {
        let mut parser = Parser::from_source("var x = 5;").unwrap();
        let program = parser.parse_program().unwrap();

        assert_eq!(
            program.nodes,
            vec![AstNode::VariableDeclaration {
                name: "x".to_string(),
                init: Some(Box::new(AstNode::Number(5))),
            }]
        );
    }

    #[test]
    fn test_parse_from_tokens() {
        let tokens = vec![
            Token::new(TokenKind::Var),
            Token::ident("y"),
            Token::new(TokenKind::Semicolon),
        ];
        let program = Parser::new(tokens).parse_program().unwrap();

        assert_eq!(
            program.nodes,
            vec![AstNode::VariableDeclaration {
                name: "y".to_string(),
                init: None,
            }]
        );
    }

    #[test]
    fn test_empty_program() {
        let program = Parser::new(Vec::new()).parse_program().unwrap();
        assert!(program.nodes.is_empty());
    }

    #[test]
    fn test_eat_mismatch() {
        let mut parser = Parser::from_source("var x 5;").unwrap();
        let err = parser.parse_program().unwrap_err();

        assert_eq!(
            err,
            SyntaxError::UnexpectedToken {
                expected: TokenKind::Semicolon,
                found: Some(TokenKind::Number),
            }
        );
        assert_eq!(err.to_string(), "Expected ';', found number literal");
    }

    #[test]
    fn test_eat_at_end_of_input() {
        let mut parser = Parser::from_source("var x = 1").unwrap();
        let err = parser.parse_program().unwrap_err();

        assert_eq!(
            err,
            SyntaxError::UnexpectedToken {
                expected: TokenKind::Semicolon,
                found: None,
            }
        );
        assert_eq!(err.to_string(), "Expected ';', found end of input");
    }

    #[test]
    fn test_identifier_without_payload() {
        let tokens = vec![Token::new(TokenKind::Var), Token::new(TokenKind::Id)];
        let err = Parser::new(tokens).parse_program().unwrap_err();
        assert_eq!(err, SyntaxError::MalformedToken(TokenKind::Id));
    }

    #[test]
    fn test_nesting_limit_is_inclusive() {
        let at_limit = format!(
            "{}x{}",
            "(".repeat(MAX_NESTING_DEPTH),
            ")".repeat(MAX_NESTING_DEPTH)
        );
        let program = Parser::from_source(&at_limit).unwrap().parse_program().unwrap();
        assert_eq!(program.nodes, vec![AstNode::Identifier("x".to_string())]);

        let over = format!("({})", at_limit);
        let err = Parser::from_source(&over).unwrap().parse_program().unwrap_err();
        assert_eq!(err, SyntaxError::NestingTooDeep);
    }

    #[test]
    fn test_depth_resets_between_siblings() {
        // Many shallow groups in sequence never add up to a deep one
        let source = "(1) + ".repeat(MAX_NESTING_DEPTH * 2) + "(1)";
        assert!(Parser::from_source(&source).unwrap().parse_program().is_ok());
    }

    #[test]
    fn test_lex_error_converts() {
        let err: ParseError = Parser::from_source("var $x;").map(|_| ()).unwrap_err().into();
        assert_eq!(err, ParseError::Lex(LexError::UnexpectedChar('$')));
    }
}
