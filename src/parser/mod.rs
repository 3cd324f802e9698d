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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the main `parse(tokens)` entry point
/// - Precedence climbing over unary, binary and application operators
pub mod parser;

/// Keyword-led forms:
/// - assert / error / if / function
/// - import / importstr
/// - local and its bindings
pub mod statements;

/// Terminals and arrays:
/// - literals, variables, self, $, super
/// - parenthesised expressions
/// - arrays, array comprehensions and comprehension clauses
pub mod expressions;

/// Object bodies:
/// - keyed fields, method and `+:` sugar
/// - object locals and asserts
/// - object comprehensions
pub mod objects;

/// Shared parser helpers:
/// - token peeking and popping
/// - expected-token checks
/// - comma and identifier lists
pub mod helpers;

pub use parser::{parse, Parser, MAX_NESTING_DEPTH};
