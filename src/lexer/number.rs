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

//! Number literal scanning.
//!
//! Numbers follow the JSON grammar: an optional fraction and exponent after
//! an integer part that is either `0` or starts with `1`-`9`. The sign is
//! never part of the literal; `-1` is a unary minus applied to `1`.

use crate::error::{StaticError, StaticResult};
use crate::lexer::lexer::Lexer;
use crate::lexer::token::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    Begin,
    AfterZero,
    AfterOneToNine,
    AfterDot,
    AfterDigit,
    AfterE,
    AfterExpSign,
    AfterExpDigit,
}

impl Lexer {
    /// Scans a number starting at the cursor, which must be on a digit.
    ///
    /// The scan stops at the first rune that cannot extend the literal and
    /// leaves it unread, so `1.2.3` lexes as `1.2` followed by `.` and `3`.
    /// A dot, an `e`/`E` or an exponent sign not followed by a digit is an
    /// error.
    pub(super) fn lex_number(&mut self) -> StaticResult<()> {
        use NumberState::*;

        let mut state = Begin;

        loop {
            let rune = self.cursor.advance();

            state = match (state, rune) {
                (Begin, Some('0')) => AfterZero,
                (Begin, Some('1'..='9')) => AfterOneToNine,
                (Begin, _) => unreachable!("lex_number called on a non-digit"),

                (AfterZero, Some('.')) => AfterDot,
                (AfterZero, Some('e' | 'E')) => AfterE,
                (AfterZero, _) => break,

                (AfterOneToNine, Some('.')) => AfterDot,
                (AfterOneToNine, Some('e' | 'E')) => AfterE,
                (AfterOneToNine, Some('0'..='9')) => AfterOneToNine,
                (AfterOneToNine, _) => break,

                (AfterDot, Some('0'..='9')) => AfterDigit,
                (AfterDot, other) => {
                    return Err(self.number_error("junk after decimal point", other));
                }

                (AfterDigit, Some('e' | 'E')) => AfterE,
                (AfterDigit, Some('0'..='9')) => AfterDigit,
                (AfterDigit, _) => break,

                (AfterE, Some('+' | '-')) => AfterExpSign,
                (AfterE, Some('0'..='9')) => AfterExpDigit,
                (AfterE, other) => {
                    return Err(self.number_error("junk after 'E'", other));
                }

                (AfterExpSign, Some('0'..='9')) => AfterExpDigit,
                (AfterExpSign, other) => {
                    return Err(self.number_error("junk after exponent sign", other));
                }

                (AfterExpDigit, Some('0'..='9')) => AfterExpDigit,
                (AfterExpDigit, _) => break,
            };
        }

        // The rune that ended the literal belongs to the next token.
        self.cursor.step_back();
        self.emit_number();
        Ok(())
    }

    fn emit_number(&mut self) {
        let data = self.token_text();
        self.emit_full_token(TokenKind::Number, data, None);
    }

    fn number_error(&self, what: &str, found: Option<char>) -> StaticError {
        let found = match found {
            Some(rune) => rune.to_string(),
            None => "EOF".to_string(),
        };

        StaticError::lex_error(
            format!("Couldn't lex number, {}: '{}'", what, found),
            self.point(self.cursor.prev_location()),
        )
    }
}
