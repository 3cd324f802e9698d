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

use crate::ast::binding::{LocalBind, Parameters};
use crate::ast::{Identifier, Node, NodeKind};
use serde::Serialize;

/// How a field shows up when its object is manifested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Visibility {
    /// `:` keeps the visibility of an inherited field, visible otherwise.
    Inherit,
    /// `::`
    Hidden,
    /// `:::`
    Visible,
}

impl Visibility {
    /// Maps the colon run of a field assignment operator.
    pub fn from_colons(colons: &str) -> Option<Self> {
        match colons {
            ":" => Some(Visibility::Inherit),
            "::" => Some(Visibility::Hidden),
            ":::" => Some(Visibility::Visible),
            _ => None,
        }
    }
}

/// The key of a regular object field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldKey {
    /// `name: ...`
    Identifier(Identifier),
    /// `"name": ...` in any of the three string forms. Always a
    /// `LiteralString` node.
    String(Box<Node>),
    /// `[expr]: ...`
    Computed(Box<Node>),
}

impl FieldKey {
    /// The key text when it is known without evaluation.
    pub fn literal_name(&self) -> Option<&str> {
        match self {
            FieldKey::Identifier(id) => Some(id.as_str()),
            FieldKey::String(node) => match &node.kind {
                NodeKind::LiteralString { value, .. } => Some(value.as_str()),
                _ => None,
            },
            FieldKey::Computed(_) => None,
        }
    }
}

/// Discriminates the shapes an object member can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ObjectFieldKind {
    Assert,
    IdentifierKey,
    StringKey,
    ComputedKey,
    Local,
}

/// One member of an object literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum ObjectField {
    /// `assert condition [: message]`
    Assert {
        condition: Node,
        message: Option<Node>,
    },

    /// `key [+]:[:[:]] body`, or `key(params): body` with method sugar.
    Field {
        key: FieldKey,
        visibility: Visibility,
        plus_sugar: bool,
        method: Option<Parameters>,
        body: Node,
    },

    /// `local name = body`
    Local { bind: LocalBind },
}

impl ObjectField {
    pub fn kind(&self) -> ObjectFieldKind {
        match self {
            ObjectField::Assert { .. } => ObjectFieldKind::Assert,
            ObjectField::Field { key, .. } => match key {
                FieldKey::Identifier(_) => ObjectFieldKind::IdentifierKey,
                FieldKey::String(_) => ObjectFieldKind::StringKey,
                FieldKey::Computed(_) => ObjectFieldKind::ComputedKey,
            },
            ObjectField::Local { .. } => ObjectFieldKind::Local,
        }
    }

    /// Direct child nodes in source order.
    pub(crate) fn children(&self) -> Vec<&Node> {
        match self {
            ObjectField::Assert { condition, message } => {
                let mut out = vec![condition];
                out.extend(message.as_ref());
                out
            }
            ObjectField::Field { key, body, .. } => match key {
                FieldKey::Identifier(_) => vec![body],
                FieldKey::String(node) | FieldKey::Computed(node) => vec![node.as_ref(), body],
            },
            ObjectField::Local { bind } => vec![bind.body.as_ref()],
        }
    }
}
