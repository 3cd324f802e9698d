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

//! Text blocks: `|||` delimited multi-line strings.
//!
//! ```text
//! |||
//!   first line
//!     indented relative to the block
//! |||
//! ```
//!
//! The whitespace prefix of the first non-blank line sets the block's
//! indent. Every following line must start with the same prefix, and the
//! first line that does not ends the block; it must then hold only
//! whitespace followed by the closing `|||`.

use crate::error::{StaticError, StaticResult};
use crate::lexer::lexer::Lexer;
use crate::lexer::token::{TextBlock, TokenKind};

impl Lexer {
    /// Scans a text block whose first `|` is already consumed and whose
    /// next runes are known to be `||\n`.
    ///
    /// The token data is the block's content with the indent stripped from
    /// every line. The raw source is kept in [`TextBlock::verbatim`].
    pub(super) fn lex_text_block(&mut self) -> StaticResult<()> {
        let block_start = self.point(self.token_start_loc);
        self.cursor.accept_n(3);

        let mut text = String::new();
        self.copy_blank_lines(&mut text);

        let indent = leading_whitespace(self.cursor.rest());
        if indent.is_empty() {
            return Err(StaticError::lex_error(
                "Text block's first line must start with whitespace",
                block_start,
            ));
        }

        loop {
            self.cursor.accept_n(indent.len());

            loop {
                match self.cursor.advance() {
                    None => {
                        return Err(StaticError::lex_error("Unexpected EOF", block_start));
                    }
                    Some('\n') => break,
                    Some(rune) => text.push(rune),
                }
            }
            text.push('\n');
            self.copy_blank_lines(&mut text);

            if match_indent(&indent, self.cursor.rest()) == 0 {
                break;
            }
        }

        let mut term_indent = String::new();
        loop {
            match self.cursor.advance() {
                Some(rune @ (' ' | '\t' | '\r')) => term_indent.push(rune),
                _ => {
                    self.cursor.step_back();
                    break;
                }
            }
        }

        if !self.cursor.rest_starts_with("|||") {
            return Err(StaticError::lex_error(
                "Text block not terminated with |||",
                block_start,
            ));
        }
        self.cursor.accept_n(3);

        let block = TextBlock {
            indent: indent.iter().collect(),
            term_indent,
            verbatim: self.token_text(),
        };
        self.emit_full_token(TokenKind::StringBlock, text, Some(block));
        Ok(())
    }

    /// Copies a run of empty lines into `text`.
    fn copy_blank_lines(&mut self, text: &mut String) {
        loop {
            match self.cursor.advance() {
                Some('\n') => text.push('\n'),
                _ => {
                    self.cursor.step_back();
                    return;
                }
            }
        }
    }
}

/// The run of spaces and tabs at the start of `line`.
fn leading_whitespace(line: &[char]) -> Vec<char> {
    line.iter()
        .take_while(|rune| matches!(rune, ' ' | '\t'))
        .copied()
        .collect()
}

/// Length of `indent` if `line` starts with exactly that whitespace, else 0.
fn match_indent(indent: &[char], line: &[char]) -> usize {
    if line.starts_with(indent) {
        indent.len()
    } else {
        0
    }
}
