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

/// Rune-indexed source reader with a single step-back slot.
pub mod cursor;

/// Token kinds, fodder elements and the `Token` record itself.
pub mod token;

/// Reserved word lookup.
pub mod keywords;

/// Core lexer:
/// - owns the `Lexer` struct and the main scan loop
/// - fodder collection (whitespace and comments)
/// - strings, identifiers, operators
/// - exposes `lex(file_name, source)` and `reconstruct(tokens)`
pub mod lexer;

/// Number literal state machine.
pub mod number;

/// `|||` text block scanning.
pub mod text_block;

pub use lexer::{lex, reconstruct, Lexer};
pub use token::{FodderElement, FodderKind, TextBlock, Token, TokenKind};
