//! Expression parsing implementation
//!
//! Each precedence level is its own function. A level parses one operand at
//! the next tighter level, then keeps folding `left op right` into a
//! [`AstNode::BinaryOp`] while the current token is one of its operators,
//! which makes every binary level left-associative.
//!
//! # Precedence
//!
//! From loosest to tightest:
//!
//! ```text
//! assignment      ::= logical [ "=" assignment ]              (right-assoc)
//! logical         ::= relational { ("and" | "or") relational }
//! relational      ::= additive { ("<" | "<=" | ">" | ">=" | "==" | "!=") additive }
//! additive        ::= multiplicative { ("+" | "-") multiplicative }
//! multiplicative  ::= unary { ("*" | "/" | "%") unary }
//! unary           ::= ("+" | "-" | "!") unary | primary
//! primary         ::= NUMBER | STRING | ID | "(" assignment ")"
//! ```
//!
//! `and` and `or` share one level, as do equality and ordering comparisons.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::{TokenKind, TokenValue};
use crate::parser::parse::{Parser, SyntaxError};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<AstNode, SyntaxError> {
        self.parse_assignment()
    }

    /// Parse assignment (right-associative)
    fn parse_assignment(&mut self) -> Result<AstNode, SyntaxError> {
        let target = self.parse_logical()?;

        if self.match_token(TokenKind::Assign) {
            let value = self.nested(Self::parse_assignment)?;
            return Ok(AstNode::BinaryOp {
                op: BinOp::Assign,
                left: Box::new(target),
                right: Box::new(value),
            });
        }

        Ok(target)
    }

    /// Parse logical (and or)
    fn parse_logical(&mut self) -> Result<AstNode, SyntaxError> {
        let mut left = self.parse_relational()?;

        loop {
            let op = if self.match_token(TokenKind::And) {
                BinOp::And
            } else if self.match_token(TokenKind::Or) {
                BinOp::Or
            } else {
                break;
            };

            let right = Box::new(self.parse_relational()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse relational (< <= > >= == !=)
    fn parse_relational(&mut self) -> Result<AstNode, SyntaxError> {
        let mut left = self.parse_additive()?;

        while let Some(kind) = self.current_kind() {
            let op = match kind {
                TokenKind::Lt => BinOp::Lt,
                TokenKind::Lte => BinOp::Le,
                TokenKind::Gt => BinOp::Gt,
                TokenKind::Gte => BinOp::Ge,
                TokenKind::Eq => BinOp::Eq,
                TokenKind::Neq => BinOp::Ne,
                _ => break,
            };
            self.eat(kind)?;

            let right = Box::new(self.parse_additive()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<AstNode, SyntaxError> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = if self.match_token(TokenKind::Add) {
                BinOp::Add
            } else if self.match_token(TokenKind::Sub) {
                BinOp::Sub
            } else {
                break;
            };

            let right = Box::new(self.parse_multiplicative()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse multiplicative (* / %)
    fn parse_multiplicative(&mut self) -> Result<AstNode, SyntaxError> {
        let mut left = self.parse_unary()?;

        loop {
            let op = if self.match_token(TokenKind::Mul) {
                BinOp::Mul
            } else if self.match_token(TokenKind::Div) {
                BinOp::Div
            } else if self.match_token(TokenKind::Mod) {
                BinOp::Mod
            } else {
                break;
            };

            let right = Box::new(self.parse_unary()?);
            left = AstNode::BinaryOp {
                op,
                left: Box::new(left),
                right,
            };
        }

        Ok(left)
    }

    /// Parse unary (+ - !)
    fn parse_unary(&mut self) -> Result<AstNode, SyntaxError> {
        let op = if self.match_token(TokenKind::Add) {
            UnOp::Plus
        } else if self.match_token(TokenKind::Sub) {
            UnOp::Neg
        } else if self.match_token(TokenKind::Not) {
            UnOp::Not
        } else {
            return self.parse_primary();
        };

        let operand = Box::new(self.nested(Self::parse_unary)?);
        Ok(AstNode::UnaryOp { op, operand })
    }

    /// Parse primary (literals, identifiers, parenthesized expressions)
    fn parse_primary(&mut self) -> Result<AstNode, SyntaxError> {
        match self.current_kind() {
            Some(TokenKind::Number) => match self.eat(TokenKind::Number)?.value {
                TokenValue::Integer(n) => Ok(AstNode::Number(n)),
                _ => Err(SyntaxError::MalformedToken(TokenKind::Number)),
            },
            Some(TokenKind::String) => match self.eat(TokenKind::String)?.value {
                TokenValue::Str(s) => Ok(AstNode::String(s)),
                _ => Err(SyntaxError::MalformedToken(TokenKind::String)),
            },
            Some(TokenKind::Id) => Ok(AstNode::Identifier(self.expect_identifier()?)),
            Some(TokenKind::LParen) => {
                self.eat(TokenKind::LParen)?;
                let expr = self.nested(Self::parse_expression)?;
                self.eat(TokenKind::RParen)?;
                Ok(expr)
            }
            found => Err(SyntaxError::ExpectedExpression { found }),
        }
    }
}
