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

use crate::ast::{BinaryOp, IndexTarget, Node, NodeKind, UnaryOp, MAX_PRECEDENCE};
use crate::error::{StaticError, StaticResult};
use crate::lexer::token::{Token, TokenKind};
use crate::span::LocationRange;
use std::panic;
use std::sync::Arc;
use std::thread;
use tracing::{debug, trace};

/// The recursive-descent parser.
///
/// This structure maintains:
/// - The full token stream produced by the lexer
/// - The current cursor position into that stream
///
/// The grammar itself is spread over extension modules (`statements`,
/// `expressions`, `objects`, `helpers`) as additional `impl Parser` blocks.
pub struct Parser {
    /// Complete list of tokens to be parsed, always ending in `EndOfFile`.
    pub(super) tokens: Vec<Token>,

    /// Index of the next token to be read.
    pub(super) current: usize,

    /// Number of `parse` calls currently on the stack.
    depth: usize,
}

/// Expressions nested deeper than this are rejected with a parse error.
pub const MAX_NESTING_DEPTH: usize = 2048;

/// Stack reserved for the parsing thread; enough for `MAX_NESTING_DEPTH`
/// levels of any bracket, keyword or operator nesting.
const PARSER_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Public entry point for the parsing phase.
///
/// # Parameters
/// - `tokens`: The token stream produced by [`crate::lexer::lex`]
///
/// # Returns
/// The root of the syntax tree, or the first grammar violation found.
///
/// # Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → AST → (desugarer, evaluator)
/// ```
///
/// Parsing runs on its own thread with a 64 MiB stack, so
/// callers on small thread stacks can still parse deeply nested input.
pub fn parse(tokens: Vec<Token>) -> StaticResult<Node> {
    let mut parser = Parser::new(tokens);
    let file_name = parser.file_name();

    match run_on_parser_stack(&mut parser) {
        Ok(root) => {
            debug!(file = %file_name, root = root.kind.name(), "parsed source");
            Ok(root)
        }
        Err(err) => {
            trace!(file = %file_name, error = %err, "parse failed");
            Err(err)
        }
    }
}

/// Runs `parse_program` on a scoped thread with a large stack, or inline
/// when no thread can be spawned. A panic on the parser thread is resumed
/// on the caller's.
fn run_on_parser_stack(parser: &mut Parser) -> StaticResult<Node> {
    let spawned = thread::scope(|scope| {
        thread::Builder::new()
            .name("jsonnet-parser".into())
            .stack_size(PARSER_STACK_SIZE)
            .spawn_scoped(scope, || parser.parse_program())
            .map(|handle| handle.join())
    });

    match spawned {
        Ok(Ok(result)) => result,
        Ok(Err(payload)) => panic::resume_unwind(payload),
        Err(err) => {
            trace!(error = %err, "parser thread unavailable, parsing inline");
            parser.parse_program()
        }
    }
}

impl Parser {
    /// Creates a parser over `tokens`.
    ///
    /// A stream that does not end in `EndOfFile` gets one appended, placed
    /// at the end of the last token, so the parser never reads past the end.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let needs_eof = tokens.last().map_or(true, |t| t.kind != TokenKind::EndOfFile);

        if needs_eof {
            let location = match tokens.last() {
                Some(last) => LocationRange::point(last.location.file_name.clone(), last.location.end),
                None => LocationRange::unset(Arc::from("")),
            };
            tokens.push(Token::new(TokenKind::EndOfFile, "", location));
        }

        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Parses a whole program: one expression followed by end of file.
    ///
    /// # Behavior
    /// - Guarantees full token consumption.
    /// - Any token left over after the expression is reported as
    ///   `Did not expect: <token>`.
    pub fn parse_program(&mut self) -> StaticResult<Node> {
        let root = self.parse(MAX_PRECEDENCE)?;

        let next = self.peek();
        if next.kind != TokenKind::EndOfFile {
            return Err(StaticError::parse_error(
                format!("Did not expect: {}", next),
                next.location.clone(),
            ));
        }

        Ok(root)
    }

    /// Precedence-climbing core.
    ///
    /// Parses the longest expression whose operators bind at least as
    /// tightly as `precedence`:
    ///
    /// ```text
    /// 16      assert / error / if / function / import / importstr / local
    /// 5..=14  binary operators (see BinaryOp::precedence)
    /// 4       unary ! ~ + -
    /// 2       a.b  a[b]  a(b)  a{b}
    /// 0       terminals
    /// ```
    ///
    /// The keyword-led forms extend as far right as possible, so they are
    /// recognised wherever an operand may start.
    ///
    /// Binary operators of the same level associate to the left. Each call
    /// counts one level against [`MAX_NESTING_DEPTH`].
    pub(super) fn parse(&mut self, precedence: u8) -> StaticResult<Node> {
        self.enter()?;
        let result = self.parse_expression(precedence);
        self.depth -= 1;
        result
    }

    /// Counts one more level of nesting, failing past
    /// [`MAX_NESTING_DEPTH`].
    fn enter(&mut self) -> StaticResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(StaticError::parse_error(
                format!("Exceeded maximum nesting depth of {}", MAX_NESTING_DEPTH),
                self.peek().location.clone(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_expression(&mut self, precedence: u8) -> StaticResult<Node> {
        if let Some(node) = self.parse_keyword_form()? {
            return Ok(node);
        }

        let begin = self.peek().location.clone();
        let mut lhs = self.parse_unary()?;

        while let Some(op) = self.peek_binary_op(precedence)? {
            self.pop();
            lhs = self.parse_binary_rhs(&begin, lhs, op)?;
        }

        Ok(lhs)
    }

    /// The binary operator at the cursor, if it binds at least as tightly
    /// as `precedence`.
    ///
    /// A bare `:` ends the expression, e.g. the condition of
    /// `assert cond : message`.
    fn peek_binary_op(&self, precedence: u8) -> StaticResult<Option<BinaryOp>> {
        let next = self.peek();
        if next.kind != TokenKind::Operator || next.data == ":" {
            return Ok(None);
        }

        let op = BinaryOp::from_symbol(&next.data).ok_or_else(|| {
            StaticError::parse_error(
                format!("Not a binary operator: {}", next.data),
                next.location.clone(),
            )
        })?;

        Ok((op.precedence() <= precedence).then_some(op))
    }

    /// Right operand of `op`, whose token is already consumed.
    #[inline(never)]
    fn parse_binary_rhs(&mut self, begin: &LocationRange, lhs: Node, op: BinaryOp) -> StaticResult<Node> {
        let rhs = self.parse(op.precedence() - 1)?;
        Ok(Node::new(
            LocationRange::between(begin, &rhs.location),
            NodeKind::Binary {
                left: Box::new(lhs),
                op,
                right: Box::new(rhs),
            },
        ))
    }

    /// Unary operators, then a terminal followed by any number of
    /// `.f`, `[e]`, `(args)` or `{fields}` suffixes.
    fn parse_unary(&mut self) -> StaticResult<Node> {
        if self.peek().kind == TokenKind::Operator {
            return self.parse_unary_op();
        }

        let begin = self.peek().location.clone();
        let mut lhs = match self.peek().kind {
            TokenKind::BraceL => self.parse_object()?,
            TokenKind::BracketL => self.parse_array()?,
            TokenKind::ParenL => self.parse_parenthesised()?,
            _ => self.parse_terminal()?,
        };

        while matches!(
            self.peek().kind,
            TokenKind::Dot | TokenKind::BraceL | TokenKind::ParenL | TokenKind::BracketL
        ) {
            lhs = self.parse_postfix(&begin, lhs)?;
        }

        Ok(lhs)
    }

    #[inline(never)]
    fn parse_unary_op(&mut self) -> StaticResult<Node> {
        let token = self.pop();
        let op = UnaryOp::from_symbol(&token.data).ok_or_else(|| {
            StaticError::parse_error(
                format!("Not a unary operator: {}", token.data),
                token.location.clone(),
            )
        })?;

        self.enter()?;
        let expr = match self.parse_keyword_form()? {
            Some(node) => node,
            None => self.parse_unary()?,
        };
        self.depth -= 1;

        Ok(Node::new(
            LocationRange::between(&token.location, &expr.location),
            NodeKind::Unary {
                op,
                expr: Box::new(expr),
            },
        ))
    }

    /// One `.f`, `[e]`, `(args) [tailstrict]` or `{fields}` suffix applied
    /// to `lhs`, whose source starts at `begin`.
    #[inline(never)]
    fn parse_postfix(&mut self, begin: &LocationRange, lhs: Node) -> StaticResult<Node> {
        let op_token = self.pop();

        let (end, kind) = match op_token.kind {
            TokenKind::BracketL => {
                let index = self.parse(MAX_PRECEDENCE)?;
                let end = self.pop_expect(TokenKind::BracketR)?;
                (
                    end.location,
                    NodeKind::Index {
                        target: Box::new(lhs),
                        index: IndexTarget::Expr(Box::new(index)),
                    },
                )
            }

            TokenKind::Dot => {
                let field = self.pop_expect(TokenKind::Identifier)?;
                (
                    field.location,
                    NodeKind::Index {
                        target: Box::new(lhs),
                        index: IndexTarget::Field(field.data),
                    },
                )
            }

            TokenKind::ParenL => {
                let args = self.parse_comma_list(TokenKind::ParenR, "function argument")?;

                let mut end = args.end.location;
                let tail_strict = self.peek().kind == TokenKind::TailStrict;
                if tail_strict {
                    end = self.pop_location();
                }

                (
                    end,
                    NodeKind::Apply {
                        target: Box::new(lhs),
                        arguments: args.exprs,
                        trailing_comma: args.trailing_comma,
                        tail_strict,
                    },
                )
            }

            TokenKind::BraceL => {
                let object = self.parse_object_remainder(&op_token.location)?;
                (
                    object.location.clone(),
                    NodeKind::ApplyBrace {
                        left: Box::new(lhs),
                        right: Box::new(object),
                    },
                )
            }

            kind => unreachable!("token {:?} does not start a suffix", kind),
        };

        Ok(Node::new(LocationRange::between(begin, &end), kind))
    }

    /// Name of the file the tokens came from.
    fn file_name(&self) -> Arc<str> {
        self.tokens
            .last()
            .map(|t| t.location.file_name.clone())
            .unwrap_or_else(|| Arc::from(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    fn parse_str(source: &str) -> StaticResult<Node> {
        parse(lex("test", source)?)
    }

    fn shape(node: &Node) -> String {
        match &node.kind {
            NodeKind::Binary { left, op, right } => {
                format!("({} {} {})", shape(left), op, shape(right))
            }
            NodeKind::Unary { op, expr } => format!("{}{}", op, shape(expr)),
            NodeKind::Var { id, .. } => id.clone(),
            NodeKind::LiteralNumber { original, .. } => original.clone(),
            NodeKind::Index { target, index } => match index {
                IndexTarget::Field(field) => format!("{}.{}", shape(target), field),
                IndexTarget::Expr(expr) => format!("{}[{}]", shape(target), shape(expr)),
            },
            other => other.name().to_string(),
        }
    }

    #[test]
    fn binary_operators_climb_by_precedence() {
        let root = parse_str("1 + 2 * 3 - 4").unwrap();
        assert_eq!(shape(&root), "((1 + (2 * 3)) - 4)");

        let root = parse_str("0 && 1 || 0").unwrap();
        assert_eq!(shape(&root), "((0 && 1) || 0)");

        let root = parse_str("a == b & c").unwrap();
        assert_eq!(shape(&root), "((a == b) & c)");
    }

    #[test]
    fn unary_binds_tighter_than_binary_but_looser_than_apply() {
        let root = parse_str("-a.b * !c").unwrap();
        assert_eq!(shape(&root), "(-a.b * !c)");

        let root = parse_str("- -x").unwrap();
        assert_eq!(shape(&root), "--x");
    }

    #[test]
    fn node_ranges_span_their_source() {
        let root = parse_str("foo(bar) tailstrict").unwrap();
        assert_eq!(root.location.to_string(), "test:1:1-20");
        assert!(matches!(root.kind, NodeKind::Apply { tail_strict: true, .. }));

        let root = parse_str("a.b[c]").unwrap();
        assert_eq!(root.location.to_string(), "test:1:1-7");
    }

    #[test]
    fn parenthesised_expression_is_returned_unchanged() {
        let root = parse_str("(a + b)").unwrap();
        assert_eq!(root.location.to_string(), "test:1:2-7");
    }

    #[test]
    fn missing_end_of_file_is_supplied() {
        let mut tokens = lex("test", "a").unwrap();
        tokens.pop();

        let root = parse(tokens).unwrap();
        assert!(matches!(root.kind, NodeKind::Var { .. }));
    }

    #[test]
    fn nesting_past_the_limit_is_a_parse_error() {
        let deep = MAX_NESTING_DEPTH + 100;

        let arrays = format!("{}1{}", "[".repeat(deep), "]".repeat(deep));
        let err = parse_str(&arrays).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("test:1:2049-2050 Exceeded maximum nesting depth of {}", MAX_NESTING_DEPTH)
        );

        let negations = format!("{}1", "-".repeat(deep));
        let err = parse_str(&negations).unwrap_err();
        assert!(err.message.starts_with("Exceeded maximum nesting depth"));
    }

    #[test]
    fn binary_chains_do_not_nest() {
        let source = vec!["x"; MAX_NESTING_DEPTH + 1].join(" + ");
        let root = parse_str(&source).unwrap();
        assert!(matches!(root.kind, NodeKind::Binary { op: BinaryOp::Plus, .. }));
    }

    #[test]
    fn leftover_tokens_are_rejected() {
        let err = parse_str("a b").unwrap_err();
        assert_eq!(err.to_string(), "test:1:3-4 Did not expect: (IDENTIFIER, \"b\")");
    }
}
