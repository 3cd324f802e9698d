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

//! Lexer and parser front end for the Jsonnet configuration language.
//!
//! ```text
//! Source → lexer::lex → Vec<Token> → parser::parse → ast::Node
//! ```
//!
//! The lexer keeps every byte of the input: whitespace and comments travel
//! with the tokens as fodder, and [`lexer::reconstruct`] turns a token
//! stream back into the exact source. The parser builds a located syntax
//! tree and stops at the first error, reported as a [`StaticError`] whose
//! message and range are stable.

/// Source positions and ranges.
pub mod span;

/// The `StaticError` type shared by both stages.
pub mod error;

/// Caret-style rendering of errors against their source.
pub mod diagnostics;

pub mod lexer;

pub mod ast;

pub mod parser;

pub use ast::{Node, NodeKind};
pub use diagnostics::DiagnosticPrinter;
pub use error::{ErrorKind, StaticError, StaticResult};
pub use lexer::{lex, reconstruct, Token, TokenKind};
pub use parser::parse;
pub use span::{Location, LocationRange};

/// Lexes and parses one source file.
///
/// # Parameters
/// - `file_name`: Used only to label locations
/// - `source`: The complete text of the file
///
/// # Errors
/// The first lex or parse error in the file.
pub fn parse_source(file_name: &str, source: &str) -> StaticResult<Node> {
    let tokens = lex(file_name, source)?;
    parse(tokens)
}
