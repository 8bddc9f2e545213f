//! Statement parsing implementation
//!
//! This module handles blocks and the control-flow statements:
//!
//! - Conditionals: `if (c) { ... } else { ... }`
//! - Loops: `while (c) { ... }`, `for (var i = 0; i < n; i = i + 1) { ... }`
//! - Jump statements: `return`, `break`, `continue`
//! - Expression statements: `x = x + 1;`
//!
//! # Grammar
//!
//! ```text
//! block         ::= "{" declaration* "}"
//! if_stmt       ::= "if" "(" expression ")" block [ "else" block ]
//! while_stmt    ::= "while" "(" expression ")" block
//! for_stmt      ::= "for" "(" [ var_decl ] expression ";" [ expression ] ")" block
//! break_stmt    ::= "break" ";"
//! continue_stmt ::= "continue" ";"
//! return_stmt   ::= "return" expression ";"
//! expr_stmt     ::= expression [ ";" ]
//! ```
//!
//! Bodies are always braced. The `for` init slot only accepts a `var`
//! declaration, which brings its own `;`.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{Parser, SyntaxError};

impl Parser {
    /// Parse a braced block, returning its declarations
    pub(crate) fn parse_block(&mut self) -> Result<Vec<AstNode>, SyntaxError> {
        self.eat(TokenKind::LBrace)?;

        let statements = self.nested(|parser| {
            let mut statements = Vec::new();
            while !parser.check(TokenKind::RBrace) && !parser.is_at_end() {
                statements.push(parser.parse_declaration()?);
            }
            Ok(statements)
        })?;

        self.eat(TokenKind::RBrace)?;

        Ok(statements)
    }

    /// Parse if statement
    pub(crate) fn parse_if_statement(&mut self) -> Result<AstNode, SyntaxError> {
        self.eat(TokenKind::If)?;

        self.eat(TokenKind::LParen)?;
        let condition = Box::new(self.parse_expression()?);
        self.eat(TokenKind::RParen)?;

        let then_branch = self.parse_block()?;

        let else_branch = if self.match_token(TokenKind::Else) {
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(AstNode::IfStatement {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// Parse while statement
    pub(crate) fn parse_while_statement(&mut self) -> Result<AstNode, SyntaxError> {
        self.eat(TokenKind::While)?;

        self.eat(TokenKind::LParen)?;
        let condition = Box::new(self.parse_expression()?);
        self.eat(TokenKind::RParen)?;

        let body = self.parse_block()?;

        Ok(AstNode::WhileStatement { condition, body })
    }

    /// Parse for statement
    pub(crate) fn parse_for_statement(&mut self) -> Result<AstNode, SyntaxError> {
        self.eat(TokenKind::For)?;
        self.eat(TokenKind::LParen)?;

        // Init: only a `var` declaration, which consumes its own ';'
        let init = if self.check(TokenKind::Var) {
            Some(Box::new(self.parse_variable_declaration()?))
        } else {
            None
        };

        let condition = Box::new(self.parse_expression()?);
        self.eat(TokenKind::Semicolon)?;

        let update = if self.check(TokenKind::RParen) {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };

        self.eat(TokenKind::RParen)?;

        let body = self.parse_block()?;

        Ok(AstNode::ForStatement {
            init,
            condition,
            update,
            body,
        })
    }

    pub(crate) fn parse_break_statement(&mut self) -> Result<AstNode, SyntaxError> {
        self.eat(TokenKind::Break)?;
        self.eat(TokenKind::Semicolon)?;
        Ok(AstNode::Break)
    }

    pub(crate) fn parse_continue_statement(&mut self) -> Result<AstNode, SyntaxError> {
        self.eat(TokenKind::Continue)?;
        self.eat(TokenKind::Semicolon)?;
        Ok(AstNode::Continue)
    }

    /// Parse return statement
    pub(crate) fn parse_return_statement(&mut self) -> Result<AstNode, SyntaxError> {
        self.eat(TokenKind::Return)?;
        let value = Box::new(self.parse_expression()?);
        self.eat(TokenKind::Semicolon)?;

        Ok(AstNode::ReturnStatement { value })
    }

    /// Parse a bare expression used as a statement; the trailing ';' is optional
    pub(crate) fn parse_expression_statement(&mut self) -> Result<AstNode, SyntaxError> {
        let expr = self.parse_expression()?;
        self.match_token(TokenKind::Semicolon);
        Ok(expr)
    }
}
