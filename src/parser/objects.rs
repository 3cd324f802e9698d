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

//! Object literals and object comprehensions.
//!
//! ```text
//! { member (, member)* [,] }
//! { [k]: v (, local ...)* for x in e ... }
//!
//! member := key [( params )] [+](:|::|:::) expr
//!         | local name [( params )] = expr
//!         | assert cond [: msg]
//! key    := identifier | string | [ expr ]
//! ```

use crate::ast::{
    FieldKey, LocalBind, Node, NodeKind, ObjectField, Parameters, Visibility, MAX_PRECEDENCE,
};
use crate::error::{StaticError, StaticResult};
use crate::lexer::token::TokenKind;
use crate::parser::expressions::string_literal;
use crate::parser::parser::Parser;
use crate::span::LocationRange;
use std::collections::HashSet;

/// Key, method parameters and assignment operator of a keyed field.
struct FieldHead {
    key: FieldKey,
    visibility: Visibility,
    plus_sugar: bool,
    method: Option<Parameters>,
}

impl Parser {
    /// Parses the members of an object whose `{` (at `open`) is already
    /// consumed, through the closing `}`.
    ///
    /// The returned `Object` or `ObjectComp` ends where the closing `}`
    /// ends, so callers building `ApplyBrace` can take their range from it.
    pub(super) fn parse_object_remainder(&mut self, open: &LocationRange) -> StaticResult<Node> {
        let mut fields = Vec::new();
        let mut literal_fields = HashSet::new();
        let mut binds = HashSet::new();

        let mut got_comma = false;
        let mut first = true;

        loop {
            if !got_comma && !first && self.peek().kind == TokenKind::Comma {
                self.pop();
                got_comma = true;
            }

            match self.peek().kind {
                TokenKind::BraceR => {
                    let end = self.pop_location();
                    return Ok(Node::new(
                        LocationRange::between(open, &end),
                        NodeKind::Object {
                            fields,
                            trailing_comma: got_comma,
                        },
                    ));
                }
                TokenKind::For => return self.parse_object_comp(open, fields, got_comma),
                _ => {}
            }

            if !got_comma && !first {
                return Err(StaticError::parse_error(
                    "Expected a comma before next field.",
                    self.pop_location(),
                ));
            }
            first = false;

            let field = match self.peek().kind {
                TokenKind::BracketL
                | TokenKind::Identifier
                | TokenKind::StringDouble
                | TokenKind::StringSingle
                | TokenKind::StringBlock => self.parse_field(&mut literal_fields)?,
                TokenKind::Local => self.parse_object_local(&mut binds)?,
                TokenKind::Assert => self.parse_object_assert()?,
                _ => return Err(self.unexpected_member()),
            };

            fields.push(field);
            got_comma = false;
        }
    }

    /// `{ [k]: v for ... }` with the `for` under the cursor.
    #[inline(never)]
    fn parse_object_comp(
        &mut self,
        open: &LocationRange,
        fields: Vec<ObjectField>,
        trailing_comma: bool,
    ) -> StaticResult<Node> {
        let for_location = self.pop_location();
        check_comprehension_fields(&fields, &for_location)?;

        let (specs, end) = self.parse_comprehension_specs(TokenKind::BraceR)?;
        Ok(Node::new(
            LocationRange::between(open, &end),
            NodeKind::ObjectComp {
                fields,
                trailing_comma,
                specs,
            },
        ))
    }

    #[inline(never)]
    fn unexpected_member(&mut self) -> StaticError {
        let next = self.pop();
        StaticError::parse_error(
            format!("Unexpected: {} while parsing field definition", next),
            next.location,
        )
    }

    /// `assert cond [: message]` inside an object.
    #[inline(never)]
    fn parse_object_assert(&mut self) -> StaticResult<ObjectField> {
        self.pop();
        let condition = self.parse(MAX_PRECEDENCE)?;
        let mut message = None;
        if self.peek_is_op(":") {
            self.pop();
            message = Some(self.parse(MAX_PRECEDENCE)?);
        }
        Ok(ObjectField::Assert { condition, message })
    }

    /// Parses a keyed field starting at the key under the cursor.
    #[inline(never)]
    fn parse_field(&mut self, literal_fields: &mut HashSet<String>) -> StaticResult<ObjectField> {
        let head = self.parse_field_head(literal_fields)?;
        let body = self.parse(MAX_PRECEDENCE)?;

        Ok(ObjectField::Field {
            key: head.key,
            visibility: head.visibility,
            plus_sugar: head.plus_sugar,
            method: head.method,
            body,
        })
    }

    /// Everything of a keyed field before its body: key, optional method
    /// parameters and the assignment operator.
    #[inline(never)]
    fn parse_field_head(&mut self, literal_fields: &mut HashSet<String>) -> StaticResult<FieldHead> {
        let key_token = self.pop();

        let key = match key_token.kind {
            TokenKind::Identifier => FieldKey::Identifier(key_token.data.clone()),
            TokenKind::BracketL => {
                let expr = self.parse(MAX_PRECEDENCE)?;
                self.pop_expect(TokenKind::BracketR)?;
                FieldKey::Computed(Box::new(expr))
            }
            _ => FieldKey::String(Box::new(Node::new(
                key_token.location.clone(),
                string_literal(&key_token),
            ))),
        };

        let method = if self.peek().kind == TokenKind::ParenL {
            self.pop();
            Some(self.parse_identifier_list("method parameter")?)
        } else {
            None
        };

        let (visibility, plus_sugar) = self.parse_object_assign_op()?;

        if plus_sugar && method.is_some() {
            return Err(StaticError::parse_error(
                format!("Cannot use +: syntax sugar in a method: {}", key_token.data),
                key_token.location,
            ));
        }

        if let Some(name) = key.literal_name() {
            if !literal_fields.insert(name.to_string()) {
                return Err(StaticError::parse_error(
                    format!("Duplicate field: {}", name),
                    key_token.location,
                ));
            }
        }

        Ok(FieldHead {
            key,
            visibility,
            plus_sugar,
            method,
        })
    }

    /// Reads a field assignment operator: `:`, `::` or `:::`, each
    /// optionally prefixed with `+`.
    fn parse_object_assign_op(&mut self) -> StaticResult<(Visibility, bool)> {
        let op = self.pop_expect(TokenKind::Operator)?;

        let (plus_sugar, colons) = match op.data.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, op.data.as_str()),
        };

        match Visibility::from_colons(colons) {
            Some(visibility) => Ok((visibility, plus_sugar)),
            None => Err(StaticError::parse_error(
                format!("Expected one of :, ::, :::, +:, +::, +:::, got: {}", op.data),
                op.location,
            )),
        }
    }

    /// `local name [( params )] = expr` inside an object.
    #[inline(never)]
    fn parse_object_local(&mut self, binds: &mut HashSet<String>) -> StaticResult<ObjectField> {
        self.pop();
        let variable = self.pop_expect(TokenKind::Identifier)?;

        if binds.contains(&variable.data) {
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
        binds.insert(variable.data.clone());

        Ok(ObjectField::Local {
            bind: LocalBind {
                variable: variable.data,
                body: Box::new(body),
                function,
            },
        })
    }
}

/// Checks that the members parsed before `for` can form a comprehension:
/// no asserts, and exactly one field besides locals, which must be a
/// computed-key field with `:` visibility.
fn check_comprehension_fields(fields: &[ObjectField], for_location: &LocationRange) -> StaticResult<()> {
    let error = |message: &str| StaticError::parse_error(message, for_location.clone());

    if fields.iter().any(|f| matches!(f, ObjectField::Assert { .. })) {
        return Err(error("Object comprehension cannot have asserts."));
    }

    let mut keyed = fields.iter().filter_map(|f| match f {
        ObjectField::Field { key, visibility, .. } => Some((key, *visibility)),
        _ => None,
    });

    let (key, visibility) = match (keyed.next(), keyed.next()) {
        (Some(field), None) => field,
        _ => return Err(error("Object comprehension can only have one field.")),
    };

    if visibility != Visibility::Inherit {
        return Err(error("Object comprehensions cannot have hidden fields."));
    }

    if !matches!(key, FieldKey::Computed(_)) {
        return Err(error("Object comprehensions can only have [e] fields."));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::ast::{FieldKey, Node, NodeKind, ObjectField, ObjectFieldKind, Visibility};
    use crate::error::StaticResult;
    use crate::lexer::lex;
    use crate::parser::parse;

    fn parse_str(source: &str) -> StaticResult<Node> {
        parse(lex("test", source)?)
    }

    fn object_fields(node: Node) -> Vec<ObjectField> {
        match node.kind {
            NodeKind::Object { fields, .. } | NodeKind::ObjectComp { fields, .. } => fields,
            other => panic!("expected an object, got {}", other.name()),
        }
    }

    #[test]
    fn field_kinds_and_visibility() {
        let source = "{\n  hello: \"world\",\n\t\"name\":: joe,\n\t'mood'::: \"happy\",\n\t|||\n\t  key type\n|||: \"block\",\n}";
        let root = parse_str(source).unwrap();
        assert!(matches!(root.kind, NodeKind::Object { trailing_comma: true, .. }));

        let fields = object_fields(root);
        let kinds: Vec<ObjectFieldKind> = fields.iter().map(ObjectField::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ObjectFieldKind::IdentifierKey,
                ObjectFieldKind::StringKey,
                ObjectFieldKind::StringKey,
                ObjectFieldKind::StringKey,
            ]
        );

        let visibilities: Vec<Visibility> = fields
            .iter()
            .filter_map(|f| match f {
                ObjectField::Field { visibility, .. } => Some(*visibility),
                _ => None,
            })
            .collect();
        assert_eq!(
            visibilities,
            vec![
                Visibility::Inherit,
                Visibility::Hidden,
                Visibility::Visible,
                Visibility::Inherit,
            ]
        );
    }

    #[test]
    fn plus_sugar_and_method_sugar() {
        let fields = object_fields(parse_str("{ hello +: \"world\" }").unwrap());
        assert!(matches!(fields[0], ObjectField::Field { plus_sugar: true, .. }));

        let fields = object_fields(parse_str("{ foo(bar, baz): bar+baz }").unwrap());
        match &fields[0] {
            ObjectField::Field { method: Some(params), .. } => {
                assert_eq!(params.names, vec!["bar".to_string(), "baz".to_string()]);
            }
            _ => panic!("expected a method field"),
        }
    }

    #[test]
    fn assert_without_message_is_kept() {
        let fields = object_fields(parse_str("{ assert true, foo: bar }").unwrap());
        assert_eq!(fields.len(), 2);
        assert!(matches!(fields[0], ObjectField::Assert { message: None, .. }));
    }

    #[test]
    fn comprehension_may_carry_locals() {
        let root = parse_str("{ local y = x, [\"field\" + x]: x for x in [1, 2, 3] }").unwrap();
        assert_eq!(root.location.to_string(), "test:1:1-53");

        let fields = object_fields(root);
        assert_eq!(fields[0].kind(), ObjectFieldKind::Local);
        assert!(matches!(
            &fields[1],
            ObjectField::Field { key: FieldKey::Computed(_), .. }
        ));
    }

    #[test]
    fn apply_brace_covers_both_sides() {
        let root = parse_str("{a: b}{c: d}").unwrap();
        assert!(matches!(root.kind, NodeKind::ApplyBrace { .. }));
        assert_eq!(root.location.to_string(), "test:1:1-13");
    }
}
