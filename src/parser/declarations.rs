//! Declaration parsing implementation
//!
//! This module holds the dispatch used at every statement position (top level
//! and inside blocks) together with the declaration forms:
//!
//! - Variable declarations: `var x = 42;` or `var x;`
//! - Function declarations: `function add(a, b) { ... }`
//!
//! # Grammar
//!
//! ```text
//! declaration   ::= var_decl | function_decl | class_decl
//!                 | if_stmt | while_stmt | for_stmt
//!                 | break_stmt | continue_stmt | return_stmt | expr_stmt
//! var_decl      ::= "var" ID [ "=" expression ] ";"
//! function_decl ::= "function" ID "(" [ ID { "," ID } ] ")" "{" declaration* "}"
//! ```
//!
//! `class` is a reserved word with no grammar rule; reaching it is an error.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{Parser, SyntaxError};

impl Parser {
    /// Parse one declaration or statement, chosen by the current token
    pub(crate) fn parse_declaration(&mut self) -> Result<AstNode, SyntaxError> {
        match self.current_kind() {
            Some(TokenKind::Var) => self.parse_variable_declaration(),
            Some(TokenKind::Function) => self.parse_function_declaration(),
            Some(TokenKind::Class) => Err(SyntaxError::UnsupportedDeclaration(TokenKind::Class)),
            Some(TokenKind::If) => self.parse_if_statement(),
            Some(TokenKind::While) => self.parse_while_statement(),
            Some(TokenKind::For) => self.parse_for_statement(),
            Some(TokenKind::Break) => self.parse_break_statement(),
            Some(TokenKind::Continue) => self.parse_continue_statement(),
            Some(TokenKind::Return) => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parse variable declaration: var name [= init];
    pub(crate) fn parse_variable_declaration(&mut self) -> Result<AstNode, SyntaxError> {
        self.eat(TokenKind::Var)?;
        let name = self.expect_identifier()?;

        let init = if self.match_token(TokenKind::Assign) {
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };

        self.eat(TokenKind::Semicolon)?;

        Ok(AstNode::VariableDeclaration { name, init })
    }

    /// Parse function declaration: function name(params) { body }
    fn parse_function_declaration(&mut self) -> Result<AstNode, SyntaxError> {
        self.eat(TokenKind::Function)?;
        let name = self.expect_identifier()?;

        self.eat(TokenKind::LParen)?;
        let params = self.parse_parameter_list()?;
        self.eat(TokenKind::RParen)?;

        let body = self.parse_block()?;

        Ok(AstNode::FunctionDeclaration { name, params, body })
    }

    /// Parse parameter list: name, name, ...
    fn parse_parameter_list(&mut self) -> Result<Vec<String>, SyntaxError> {
        let mut params = Vec::new();

        if self.check(TokenKind::RParen) {
            return Ok(params);
        }

        loop {
            params.push(self.expect_identifier()?);

            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }

        Ok(params)
    }
}
