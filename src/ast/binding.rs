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

//! Constructs that introduce variable names: function parameter lists,
//! `local` bindings and comprehension `for` clauses.

use crate::ast::{Identifier, Node};
use serde::Serialize;

/// A parenthesised parameter list, as written in `function (a, b)`, in
/// method sugar `f(a, b): ...` or in a local function `local f(a, b) = ...`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Parameters {
    pub names: Vec<Identifier>,
    pub trailing_comma: bool,
}

/// One `name = expr` binding of a `local` expression or object local.
///
/// When the binding uses function sugar (`local f(x) = x * 2`), `function`
/// holds the parameter list and `body` is the function body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalBind {
    pub variable: Identifier,
    pub body: Box<Node>,
    pub function: Option<Parameters>,
}

impl LocalBind {
    pub fn is_function(&self) -> bool {
        self.function.is_some()
    }
}

/// One clause of an array or object comprehension.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CompSpec {
    /// `for variable in expr`
    For { variable: Identifier, expr: Node },

    /// `if expr`
    If { expr: Node },
}

impl CompSpec {
    /// The governing expression of either clause.
    pub fn expr(&self) -> &Node {
        match self {
            CompSpec::For { expr, .. } | CompSpec::If { expr } => expr,
        }
    }
}
