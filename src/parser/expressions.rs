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

use crate::ast::{CompSpec, IndexTarget, Node, NodeKind, StringKind, MAX_PRECEDENCE};
use crate::error::{StaticError, StaticResult};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;
use crate::span::LocationRange;

impl Parser {
    /// Parses a terminal: a literal, a variable, `self`, `$`, `super.x` or
    /// `super[e]`.
    ///
    /// Arrays, objects and parenthesised expressions are dispatched by the
    /// caller before a terminal is read.
    #[inline(never)]
    pub(super) fn parse_terminal(&mut self) -> StaticResult<Node> {
        let token = self.pop();

        let kind = match token.kind {
            TokenKind::Assert
            | TokenKind::BraceR
            | TokenKind::BracketR
            | TokenKind::Comma
            | TokenKind::Dot
            | TokenKind::Else
            | TokenKind::Error
            | TokenKind::For
            | TokenKind::Function
            | TokenKind::If
            | TokenKind::In
            | TokenKind::Import
            | TokenKind::ImportStr
            | TokenKind::Local
            | TokenKind::Operator
            | TokenKind::ParenR
            | TokenKind::Semicolon
            | TokenKind::TailStrict
            | TokenKind::Then => {
                return Err(StaticError::parse_error(
                    format!("Unexpected: {} while parsing terminal", token),
                    token.location,
                ));
            }

            TokenKind::EndOfFile => {
                return Err(StaticError::parse_error("Unexpected end of file.", token.location));
            }

            TokenKind::BraceL | TokenKind::BracketL | TokenKind::ParenL => {
                unreachable!("bracketed expressions are dispatched before terminals")
            }

            TokenKind::Number => match token.data.parse::<f64>() {
                Ok(value) => NodeKind::LiteralNumber {
                    value,
                    original: token.data.clone(),
                },
                Err(_) => {
                    return Err(StaticError::parse_error(
                        "Could not parse floating point number.",
                        token.location,
                    ));
                }
            },

            TokenKind::StringSingle | TokenKind::StringDouble | TokenKind::StringBlock => {
                string_literal(&token)
            }

            TokenKind::False => NodeKind::LiteralBoolean { value: false },
            TokenKind::True => NodeKind::LiteralBoolean { value: true },
            TokenKind::Null => NodeKind::LiteralNull,

            TokenKind::Dollar => NodeKind::Dollar,
            TokenKind::SelfRef => NodeKind::SelfRef,
            TokenKind::Identifier => NodeKind::Var {
                id: token.data.clone(),
                original: token.data.clone(),
            },

            TokenKind::Super => return self.parse_super_index(token),
        };

        Ok(Node::new(token.location, kind))
    }

    /// `super.field` or `super[expr]`, with `super` already consumed.
    fn parse_super_index(&mut self, begin: Token) -> StaticResult<Node> {
        let next = self.pop();

        let (index, end) = match next.kind {
            TokenKind::Dot => {
                let field = self.pop_expect(TokenKind::Identifier)?;
                (IndexTarget::Field(field.data), field.location)
            }
            TokenKind::BracketL => {
                let expr = self.parse(MAX_PRECEDENCE)?;
                let end = self.pop_expect(TokenKind::BracketR)?;
                (IndexTarget::Expr(Box::new(expr)), end.location)
            }
            _ => {
                return Err(StaticError::parse_error(
                    "Expected . or [ after super.",
                    begin.location,
                ));
            }
        };

        Ok(Node::new(
            LocationRange::between(&begin.location, &end),
            NodeKind::SuperIndex { index },
        ))
    }

    /// `( expr )`. The inner node is returned unchanged; the parentheses do
    /// not become part of its range.
    #[inline(never)]
    pub(super) fn parse_parenthesised(&mut self) -> StaticResult<Node> {
        self.pop();
        let inner = self.parse(MAX_PRECEDENCE)?;
        self.pop_expect(TokenKind::ParenR)?;
        Ok(inner)
    }

    /// An object literal or object comprehension starting at the `{` under
    /// the cursor.
    #[inline(never)]
    pub(super) fn parse_object(&mut self) -> StaticResult<Node> {
        let open = self.pop_location();
        self.parse_object_remainder(&open)
    }

    /// An array or array comprehension starting at the `[` under the
    /// cursor.
    #[inline(never)]
    pub(super) fn parse_array(&mut self) -> StaticResult<Node> {
        let open = self.pop_location();

        if self.peek().kind == TokenKind::BracketR {
            let end = self.pop_location();
            return Ok(Node::new(
                LocationRange::between(&open, &end),
                NodeKind::Array {
                    elements: Vec::new(),
                    trailing_comma: false,
                },
            ));
        }

        let first = self.parse(MAX_PRECEDENCE)?;

        let mut got_comma = false;
        if self.peek().kind == TokenKind::Comma {
            self.pop();
            got_comma = true;
        }

        if self.peek().kind == TokenKind::For {
            return self.parse_array_comp(&open, first, got_comma);
        }

        let mut elements = vec![first];
        let end = loop {
            if self.peek().kind == TokenKind::BracketR {
                break self.pop_location();
            }

            if !got_comma {
                return Err(StaticError::parse_error(
                    "Expected a comma before next array element.",
                    self.peek().location.clone(),
                ));
            }

            elements.push(self.parse(MAX_PRECEDENCE)?);

            got_comma = self.peek().kind == TokenKind::Comma;
            if got_comma {
                self.pop();
            }
        };

        Ok(Node::new(
            LocationRange::between(&open, &end),
            NodeKind::Array {
                elements,
                trailing_comma: got_comma,
            },
        ))
    }

    /// `[body for ...]` with the `for` under the cursor.
    #[inline(never)]
    fn parse_array_comp(
        &mut self,
        open: &LocationRange,
        body: Node,
        trailing_comma: bool,
    ) -> StaticResult<Node> {
        self.pop();
        let (specs, end) = self.parse_comprehension_specs(TokenKind::BracketR)?;
        Ok(Node::new(
            LocationRange::between(open, &end),
            NodeKind::ArrayComp {
                body: Box::new(body),
                trailing_comma,
                specs,
            },
        ))
    }

    /// Parses comprehension clauses after the first `for`, which is already
    /// consumed, through the closing token of kind `end`.
    ///
    /// ```text
    /// for x in e (if e)* (for y in e (if e)*)* END
    /// ```
    ///
    /// # Returns
    /// The clauses in source order and the range of the closing token.
    pub(super) fn parse_comprehension_specs(
        &mut self,
        end: TokenKind,
    ) -> StaticResult<(Vec<CompSpec>, LocationRange)> {
        let mut specs = Vec::new();

        loop {
            let variable = self.pop_expect(TokenKind::Identifier)?;
            self.pop_expect(TokenKind::In)?;
            let expr = self.parse(MAX_PRECEDENCE)?;
            specs.push(CompSpec::For {
                variable: variable.data,
                expr,
            });

            let mut next = self.pop();
            while next.kind == TokenKind::If {
                let expr = self.parse(MAX_PRECEDENCE)?;
                specs.push(CompSpec::If { expr });
                next = self.pop();
            }

            if next.kind == end {
                return Ok((specs, next.location));
            }

            if next.kind != TokenKind::For {
                return Err(StaticError::parse_error(
                    format!("Expected for, if or {} after for clause, got: {}", end, next),
                    next.location,
                ));
            }
        }
    }
}

/// Builds the literal for a string token of any of the three forms.
pub(super) fn string_literal(token: &Token) -> NodeKind {
    let (kind, block_indent) = match token.kind {
        TokenKind::StringSingle => (StringKind::Single, None),
        TokenKind::StringBlock => (
            StringKind::Block,
            token.text_block.as_ref().map(|block| block.indent.clone()),
        ),
        _ => (StringKind::Double, None),
    };

    NodeKind::LiteralString {
        value: token.data.clone(),
        kind,
        block_indent,
    }
}
