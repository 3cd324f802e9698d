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

use crate::ast::{LocalBind, Node, NodeKind, MAX_PRECEDENCE};
use crate::error::{StaticError, StaticResult};
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::span::LocationRange;

impl Parser {
    /// Parses a keyword-led form if the next token starts one.
    ///
    /// # Grammar
    /// ```text
    /// assert COND [: MSG] ; REST
    /// error EXPR
    /// if COND then EXPR [else EXPR]
    /// function ( PARAMS ) BODY
    /// import STRING
    /// importstr STRING
    /// local BIND (, BIND)* ; BODY
    /// ```
    ///
    /// # Returns
    /// `None` without consuming anything when the next token is not one of
    /// these keywords.
    pub(super) fn parse_keyword_form(&mut self) -> StaticResult<Option<Node>> {
        let node = match self.peek().kind {
            TokenKind::Assert => self.parse_assert()?,
            TokenKind::Error => self.parse_error_expr()?,
            TokenKind::If => self.parse_conditional()?,
            TokenKind::Function => self.parse_function()?,
            TokenKind::Import | TokenKind::ImportStr => self.parse_import()?,
            TokenKind::Local => self.parse_local()?,
            _ => return Ok(None),
        };
        Ok(Some(node))
    }

    fn parse_assert(&mut self) -> StaticResult<Node> {
        let begin = self.pop();
        let condition = self.parse(MAX_PRECEDENCE)?;

        let mut message = None;
        if self.peek_is_op(":") {
            self.pop();
            message = Some(Box::new(self.parse(MAX_PRECEDENCE)?));
        }

        self.pop_expect(TokenKind::Semicolon)?;
        let rest = self.parse(MAX_PRECEDENCE)?;

        Ok(Node::new(
            LocationRange::between(&begin.location, &rest.location),
            NodeKind::Assert {
                condition: Box::new(condition),
                message,
                rest: Box::new(rest),
            },
        ))
    }

    fn parse_error_expr(&mut self) -> StaticResult<Node> {
        let begin = self.pop();
        let expr = self.parse(MAX_PRECEDENCE)?;

        Ok(Node::new(
            LocationRange::between(&begin.location, &expr.location),
            NodeKind::Error {
                expr: Box::new(expr),
            },
        ))
    }

    fn parse_conditional(&mut self) -> StaticResult<Node> {
        let begin = self.pop();
        let condition = self.parse(MAX_PRECEDENCE)?;
        self.pop_expect(TokenKind::Then)?;
        let branch_true = self.parse(MAX_PRECEDENCE)?;

        let mut branch_false = None;
        if self.peek().kind == TokenKind::Else {
            self.pop();
            branch_false = Some(Box::new(self.parse(MAX_PRECEDENCE)?));
        }

        let last = match &branch_false {
            Some(node) => &node.location,
            None => &branch_true.location,
        };
        let location = LocationRange::between(&begin.location, last);

        Ok(Node::new(
            location,
            NodeKind::Conditional {
                condition: Box::new(condition),
                branch_true: Box::new(branch_true),
                branch_false,
            },
        ))
    }

    fn parse_function(&mut self) -> StaticResult<Node> {
        let begin = self.pop();

        let next = self.pop();
        if next.kind != TokenKind::ParenL {
            return Err(StaticError::parse_error(
                format!("Expected ( but got {}", next),
                next.location,
            ));
        }

        let parameters = self.parse_identifier_list("function parameter")?;
        let body = self.parse(MAX_PRECEDENCE)?;

        Ok(Node::new(
            LocationRange::between(&begin.location, &body.location),
            NodeKind::Function {
                parameters,
                body: Box::new(body),
            },
        ))
    }

    /// `import` and `importstr` only accept a string literal; anything else
    /// would need evaluation before the file could be located.
    fn parse_import(&mut self) -> StaticResult<Node> {
        let begin = self.pop();
        let body = self.parse(MAX_PRECEDENCE)?;
        let location = LocationRange::between(&begin.location, &body.location);

        let file = match body.kind {
            NodeKind::LiteralString { value, .. } => value,
            _ => {
                return Err(StaticError::parse_error(
                    "Computed imports are not allowed",
                    body.location,
                ));
            }
        };

        let kind = if begin.kind == TokenKind::ImportStr {
            NodeKind::ImportStr { file }
        } else {
            NodeKind::Import { file }
        };
        Ok(Node::new(location, kind))
    }

    fn parse_local(&mut self) -> StaticResult<Node> {
        let begin = self.pop();
        let mut binds = Vec::new();

        loop {
            self.parse_bind(&mut binds)?;

            let delim = self.pop();
            match delim.kind {
                TokenKind::Semicolon => break,
                TokenKind::Comma => {}
                _ => {
                    return Err(StaticError::parse_error(
                        format!("Expected , or ; but got {}", delim),
                        delim.location,
                    ));
                }
            }
        }

        let body = self.parse(MAX_PRECEDENCE)?;

        Ok(Node::new(
            LocationRange::between(&begin.location, &body.location),
            NodeKind::Local {
                binds,
                body: Box::new(body),
            },
        ))
    }

    /// Parses `name = expr` or `name(params) = expr` and appends it to
    /// `binds`, rejecting a name already bound in the same `local`.
    pub(super) fn parse_bind(&mut self, binds: &mut Vec<LocalBind>) -> StaticResult<()> {
        let variable = self.pop_expect(TokenKind::Identifier)?;

        if binds.iter().any(|bind| bind.variable == variable.data) {
            return Err(StaticError::parse_error(
                format!("Duplicate local var: {}", variable.data),
                variable.location,
            ));
        }

        let function = if self.peek().kind == TokenKind::ParenL {
            self.pop();
            Some(self.parse_identifier_list("function parameter")?)
        } else {
            None
        };

        self.pop_expect_op("=")?;
        let body = self.parse(MAX_PRECEDENCE)?;

        binds.push(LocalBind {
            variable: variable.data,
            body: Box::new(body),
            function,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Node, NodeKind};
    use crate::error::StaticResult;
    use crate::lexer::lex;
    use crate::parser::parse;

    fn parse_str(source: &str) -> StaticResult<Node> {
        parse(lex("test", source)?)
    }

    #[test]
    fn assert_message_is_optional() {
        let root = parse_str("assert true; 1").unwrap();
        assert!(matches!(root.kind, NodeKind::Assert { message: None, .. }));

        let root = parse_str("assert true: 'woah!'; true").unwrap();
        assert!(matches!(root.kind, NodeKind::Assert { message: Some(_), .. }));
        assert_eq!(root.location.to_string(), "test:1:1-27");
    }

    #[test]
    fn conditional_range_ends_at_last_branch() {
        let root = parse_str("if a then b").unwrap();
        assert_eq!(root.location.to_string(), "test:1:1-12");

        let root = parse_str("if n > 1 then 'foos' else 'foo'").unwrap();
        match root.kind {
            NodeKind::Conditional { branch_false, .. } => assert!(branch_false.is_some()),
            other => panic!("expected Conditional, got {}", other.name()),
        }
    }

    #[test]
    fn local_function_sugar_keeps_parameters() {
        let root = parse_str("local foo(bar, baz,) = bar; foo(1, 2)").unwrap();
        match root.kind {
            NodeKind::Local { binds, .. } => {
                let params = binds[0].function.as_ref().unwrap();
                assert_eq!(params.names, vec!["bar".to_string(), "baz".to_string()]);
                assert!(params.trailing_comma);
            }
            other => panic!("expected Local, got {}", other.name()),
        }
    }

    #[test]
    fn import_keeps_the_file_name() {
        let root = parse_str("importstr 'foo.text'").unwrap();
        match root.kind {
            NodeKind::ImportStr { file } => assert_eq!(file, "foo.text"),
            other => panic!("expected ImportStr, got {}", other.name()),
        }
    }

    #[test]
    fn keyword_forms_may_start_an_operand() {
        let root = parse_str("1 + local x = 2; x").unwrap();
        assert!(matches!(root.kind, NodeKind::Binary { .. }));
    }
}
