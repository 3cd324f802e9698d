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

//! The syntax tree produced by the parser.
//!
//! The tree is closed: every construct is one variant of [`NodeKind`], and
//! every node carries the [`LocationRange`] of the source text it was parsed
//! from. Sugared forms (`ApplyBrace`, method fields, comprehensions) are
//! kept as written; lowering them is left to later passes.

/// Prefix and infix operators with their precedence table.
pub mod operators;

/// Object members, keys and visibility.
pub mod object;

/// Parameter lists, `local` bindings and comprehension clauses.
pub mod binding;

pub use binding::{CompSpec, LocalBind, Parameters};
pub use object::{FieldKey, ObjectField, ObjectFieldKind, Visibility};
pub use operators::{BinaryOp, UnaryOp, APPLY_PRECEDENCE, MAX_PRECEDENCE, UNARY_PRECEDENCE};

use crate::span::LocationRange;
use serde::Serialize;

/// A variable, field or parameter name.
pub type Identifier = String;

/// A syntax tree node: a location plus the construct found there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub location: LocationRange,
    #[serde(flatten)]
    pub kind: NodeKind,
}

/// What follows the target in `a.b` / `a[b]`, or `super` in `super.b` /
/// `super[b]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexTarget {
    Expr(Box<Node>),
    Field(Identifier),
}

/// The three spellings of a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StringKind {
    Single,
    Double,
    Block,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum NodeKind {
    /// `target(arguments)` with an optional `tailstrict`.
    Apply {
        target: Box<Node>,
        arguments: Vec<Node>,
        trailing_comma: bool,
        tail_strict: bool,
    },

    /// `left { ... }`, shorthand for `left + { ... }`.
    ApplyBrace { left: Box<Node>, right: Box<Node> },

    Array {
        elements: Vec<Node>,
        trailing_comma: bool,
    },

    /// `[body for x in xs if cond]`
    ArrayComp {
        body: Box<Node>,
        trailing_comma: bool,
        specs: Vec<CompSpec>,
    },

    /// `assert condition [: message]; rest`
    Assert {
        condition: Box<Node>,
        message: Option<Box<Node>>,
        rest: Box<Node>,
    },

    Binary {
        left: Box<Node>,
        op: BinaryOp,
        right: Box<Node>,
    },

    /// `if condition then branch_true [else branch_false]`
    Conditional {
        condition: Box<Node>,
        branch_true: Box<Node>,
        branch_false: Option<Box<Node>>,
    },

    /// `$`, the outermost object.
    Dollar,

    Error { expr: Box<Node> },

    Function {
        parameters: Parameters,
        body: Box<Node>,
    },

    Import { file: String },

    ImportStr { file: String },

    Index { target: Box<Node>, index: IndexTarget },

    LiteralBoolean { value: bool },

    LiteralNull,

    /// `original` is the literal exactly as written.
    LiteralNumber { value: f64, original: String },

    /// `value` holds the raw text: escapes are not interpreted. Block
    /// strings also record their indent.
    LiteralString {
        value: String,
        kind: StringKind,
        block_indent: Option<String>,
    },

    Local {
        binds: Vec<LocalBind>,
        body: Box<Node>,
    },

    Object {
        fields: Vec<ObjectField>,
        trailing_comma: bool,
    },

    /// `{ [k]: v for x in xs }`. Besides object locals, `fields` holds
    /// exactly one computed-key field with inherit visibility.
    ObjectComp {
        fields: Vec<ObjectField>,
        trailing_comma: bool,
        specs: Vec<CompSpec>,
    },

    /// `self`
    SelfRef,

    SuperIndex { index: IndexTarget },

    Unary { op: UnaryOp, expr: Box<Node> },

    Var { id: Identifier, original: String },
}

impl Node {
    pub fn new(location: LocationRange, kind: NodeKind) -> Self {
        Self { location, kind }
    }

    /// The direct child nodes, in source order.
    ///
    /// Function and comprehension variables are names, not nodes, so they
    /// do not appear here.
    pub fn children(&self) -> Vec<&Node> {
        let mut out: Vec<&Node> = Vec::new();

        match &self.kind {
            NodeKind::Apply { target, arguments, .. } => {
                out.push(target);
                out.extend(arguments);
            }
            NodeKind::ApplyBrace { left, right } => {
                out.push(left);
                out.push(right);
            }
            NodeKind::Array { elements, .. } => out.extend(elements),
            NodeKind::ArrayComp { body, specs, .. } => {
                out.push(body);
                out.extend(specs.iter().map(CompSpec::expr));
            }
            NodeKind::Assert { condition, message, rest } => {
                out.push(condition);
                out.extend(message.as_deref());
                out.push(rest);
            }
            NodeKind::Binary { left, right, .. } => {
                out.push(left);
                out.push(right);
            }
            NodeKind::Conditional {
                condition,
                branch_true,
                branch_false,
            } => {
                out.push(condition);
                out.push(branch_true);
                out.extend(branch_false.as_deref());
            }
            NodeKind::Error { expr } | NodeKind::Unary { expr, .. } => out.push(expr),
            NodeKind::Function { body, .. } => out.push(body),
            NodeKind::Index { target, index } => {
                out.push(target);
                if let IndexTarget::Expr(index) = index {
                    out.push(index);
                }
            }
            NodeKind::Local { binds, body } => {
                out.extend(binds.iter().map(|bind| bind.body.as_ref()));
                out.push(body);
            }
            NodeKind::Object { fields, .. } => {
                out.extend(fields.iter().flat_map(ObjectField::children));
            }
            NodeKind::ObjectComp { fields, specs, .. } => {
                out.extend(fields.iter().flat_map(ObjectField::children));
                out.extend(specs.iter().map(CompSpec::expr));
            }
            NodeKind::SuperIndex { index } => {
                if let IndexTarget::Expr(index) = index {
                    out.push(index);
                }
            }
            NodeKind::Dollar
            | NodeKind::Import { .. }
            | NodeKind::ImportStr { .. }
            | NodeKind::LiteralBoolean { .. }
            | NodeKind::LiteralNull
            | NodeKind::LiteralNumber { .. }
            | NodeKind::LiteralString { .. }
            | NodeKind::SelfRef
            | NodeKind::Var { .. } => {}
        }

        out
    }
}

impl NodeKind {
    /// The variant name, as used in JSON dumps and log events.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Apply { .. } => "Apply",
            NodeKind::ApplyBrace { .. } => "ApplyBrace",
            NodeKind::Array { .. } => "Array",
            NodeKind::ArrayComp { .. } => "ArrayComp",
            NodeKind::Assert { .. } => "Assert",
            NodeKind::Binary { .. } => "Binary",
            NodeKind::Conditional { .. } => "Conditional",
            NodeKind::Dollar => "Dollar",
            NodeKind::Error { .. } => "Error",
            NodeKind::Function { .. } => "Function",
            NodeKind::Import { .. } => "Import",
            NodeKind::ImportStr { .. } => "ImportStr",
            NodeKind::Index { .. } => "Index",
            NodeKind::LiteralBoolean { .. } => "LiteralBoolean",
            NodeKind::LiteralNull => "LiteralNull",
            NodeKind::LiteralNumber { .. } => "LiteralNumber",
            NodeKind::LiteralString { .. } => "LiteralString",
            NodeKind::Local { .. } => "Local",
            NodeKind::Object { .. } => "Object",
            NodeKind::ObjectComp { .. } => "ObjectComp",
            NodeKind::SelfRef => "SelfRef",
            NodeKind::SuperIndex { .. } => "SuperIndex",
            NodeKind::Unary { .. } => "Unary",
            NodeKind::Var { .. } => "Var",
        }
    }
}

/// Dumps a tree as JSON: every node becomes an object with its `type`, its
/// rendered `location` and its payload fields.
pub fn to_json(node: &Node) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(node)
}

/// Same as [`to_json`], rendered as indented text.
pub fn to_json_pretty(node: &Node) -> serde_json::Result<String> {
    serde_json::to_string_pretty(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Location;
    use serde_json::json;
    use std::sync::Arc;

    fn at(column: usize, end: usize) -> LocationRange {
        LocationRange::new(Arc::from("t"), Location::new(1, column), Location::new(1, end))
    }

    fn var(name: &str, column: usize) -> Node {
        Node::new(
            at(column, column + name.len()),
            NodeKind::Var {
                id: name.to_string(),
                original: name.to_string(),
            },
        )
    }

    #[test]
    fn children_follow_source_order() {
        let node = Node::new(
            at(1, 10),
            NodeKind::Conditional {
                condition: Box::new(var("a", 4)),
                branch_true: Box::new(var("b", 11)),
                branch_false: Some(Box::new(var("c", 18))),
            },
        );

        let names: Vec<&str> = node
            .children()
            .into_iter()
            .map(|child| match &child.kind {
                NodeKind::Var { id, .. } => id.as_str(),
                other => other.name(),
            })
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn field_index_has_no_index_child() {
        let node = Node::new(
            at(1, 4),
            NodeKind::Index {
                target: Box::new(var("a", 1)),
                index: IndexTarget::Field("b".to_string()),
            },
        );
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn json_dump_is_tagged_and_located() {
        let node = Node::new(
            at(1, 6),
            NodeKind::Binary {
                left: Box::new(var("a", 1)),
                op: BinaryOp::Plus,
                right: Box::new(Node::new(at(5, 6), NodeKind::LiteralNull)),
            },
        );

        assert_eq!(
            to_json(&node).unwrap(),
            json!({
                "location": "t:1:1-6",
                "type": "Binary",
                "left": { "location": "t:1:1-2", "type": "Var", "id": "a", "original": "a" },
                "op": "Plus",
                "right": { "location": "t:1:5-6", "type": "LiteralNull" },
            })
        );
    }
}
