/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/pawx
 * 
 * License:
 * This file is part of the PAWX programming language project.
 * 
 * PAWX is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use crate::ast::{Node, NodeKind, Parameters, MAX_PRECEDENCE};
use crate::error::{StaticError, StaticResult};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;
use crate::span::LocationRange;

/// Result of [`Parser::parse_comma_list`].
pub(super) struct CommaList {
    /// The closing token that ended the list.
    pub end: Token,
    pub exprs: Vec<Node>,
    pub trailing_comma: bool,
}

impl Parser {
    /// Returns the next token without consuming it.
    pub(super) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Consumes and returns the next token.
    ///
    /// The final `EndOfFile` token is never consumed: popping at the end of
    /// the stream keeps returning it.
    pub(super) fn pop(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        if token.kind != TokenKind::EndOfFile {
            self.current += 1;
        }
        token
    }

    /// Consumes the next token and keeps only its range.
    pub(super) fn pop_location(&mut self) -> LocationRange {
        self.pop().location
    }

    /// Consumes a token of the given kind or fails with
    /// `Expected token <kind> but got <token>`.
    pub(super) fn pop_expect(&mut self, kind: TokenKind) -> StaticResult<Token> {
        let token = self.pop();
        if token.kind != kind {
            return Err(StaticError::parse_error(
                format!("Expected token {} but got {}", kind, token),
                token.location,
            ));
        }
        Ok(token)
    }

    /// Consumes the operator `op` or fails with
    /// `Expected operator <op> but got <token>`.
    pub(super) fn pop_expect_op(&mut self, op: &str) -> StaticResult<Token> {
        let token = self.pop();
        if token.kind != TokenKind::Operator || token.data != op {
            return Err(StaticError::parse_error(
                format!("Expected operator {} but got {}", op, token),
                token.location,
            ));
        }
        Ok(token)
    }

    /// Whether the next token is the operator `op`.
    pub(super) fn peek_is_op(&self, op: &str) -> bool {
        let next = self.peek();
        next.kind == TokenKind::Operator && next.data == op
    }

    /// Parses full expressions separated by commas up to and including a
    /// token of kind `end`.
    ///
    /// A trailing comma before `end` is allowed and reported. Two elements
    /// without a comma between them fail with
    /// `Expected a comma before next <element_kind>.`
    pub(super) fn parse_comma_list(
        &mut self,
        end: TokenKind,
        element_kind: &str,
    ) -> StaticResult<CommaList> {
        let mut exprs = Vec::new();
        let mut got_comma = false;
        let mut first = true;

        loop {
            if !first && self.peek().kind == TokenKind::Comma {
                self.pop();
                got_comma = true;
            }

            if self.peek().kind == end {
                return Ok(CommaList {
                    end: self.pop(),
                    exprs,
                    trailing_comma: got_comma,
                });
            }

            if !first && !got_comma {
                return Err(StaticError::parse_error(
                    format!("Expected a comma before next {}.", element_kind),
                    self.peek().location.clone(),
                ));
            }

            exprs.push(self.parse(MAX_PRECEDENCE)?);
            got_comma = false;
            first = false;
        }
    }

    /// Parses a parameter list whose `(` is already consumed, through the
    /// closing `)`. Every element must be a plain identifier.
    pub(super) fn parse_identifier_list(&mut self, element_kind: &str) -> StaticResult<Parameters> {
        let list = self.parse_comma_list(TokenKind::ParenR, element_kind)?;

        let names = list
            .exprs
            .into_iter()
            .map(|expr| match expr.kind {
                NodeKind::Var { id, .. } => Ok(id),
                _ => Err(StaticError::parse_error(
                    "Expected simple identifier but got a complex expression.",
                    expr.location,
                )),
            })
            .collect::<StaticResult<Vec<_>>>()?;

        Ok(Parameters {
            names,
            trailing_comma: list.trailing_comma,
        })
    }
}
