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

use crate::span::Location;

/// Where the cursor stands: rune index, line number and the rune index at
/// which the current line starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
    rune: usize,
    line: usize,
    line_start: usize,
}

/// A rune-indexed reader over one source string.
///
/// Positions count Unicode scalar values, so a multi-byte character moves
/// the column by one. The cursor remembers exactly one previous position:
/// `step_back` undoes the most recent `advance` and may not be called twice
/// in a row.
pub struct Cursor {
    runes: Vec<char>,
    current: Position,
    previous: Option<Position>,
}

impl Cursor {
    pub fn new(source: &str) -> Self {
        Self {
            runes: source.chars().collect(),
            current: Position {
                rune: 0,
                line: 1,
                line_start: 0,
            },
            previous: None,
        }
    }

    /// Consumes and returns the next rune, or `None` at end of input.
    ///
    /// Reaching the end still records a previous position, so a following
    /// `step_back` is always valid.
    pub fn advance(&mut self) -> Option<char> {
        self.previous = Some(self.current);

        let rune = *self.runes.get(self.current.rune)?;
        self.current.rune += 1;

        if rune == '\n' {
            self.current.line += 1;
            self.current.line_start = self.current.rune;
        }

        Some(rune)
    }

    /// Looks at the next rune without consuming it.
    ///
    /// This spends the step-back slot, so it may not be followed directly
    /// by `step_back`.
    pub fn peek(&mut self) -> Option<char> {
        let rune = self.advance();
        self.step_back();
        rune
    }

    /// Undoes the most recent `advance`.
    ///
    /// # Panics
    /// If called twice without an intervening `advance`. This is a lexer
    /// bug, never a property of the input.
    pub fn step_back(&mut self) {
        match self.previous.take() {
            Some(previous) => self.current = previous,
            None => panic!("step_back called with no valid previous rune"),
        }
    }

    /// Consumes `n` runes.
    pub fn accept_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// The location of the next rune to be read.
    pub fn location(&self) -> Location {
        Self::location_of(self.current)
    }

    /// The location of the rune returned by the most recent `advance`.
    ///
    /// # Panics
    /// If the step-back slot has already been spent.
    pub fn prev_location(&self) -> Location {
        match self.previous {
            Some(previous) => Self::location_of(previous),
            None => panic!("prev_location called with no valid previous rune"),
        }
    }

    /// Absolute rune offset of the next rune to be read.
    pub fn offset(&self) -> usize {
        self.current.rune
    }

    /// The runes not read yet.
    pub fn rest(&self) -> &[char] {
        &self.runes[self.current.rune.min(self.runes.len())..]
    }

    /// Whether the unread input starts with `prefix`.
    pub fn rest_starts_with(&self, prefix: &str) -> bool {
        let mut rest = self.rest().iter();
        prefix.chars().all(|expected| rest.next() == Some(&expected))
    }

    /// The source text between two rune offsets.
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.runes[start..end].iter().collect()
    }

    fn location_of(position: Position) -> Location {
        Location::new(position.line, position.rune - position.line_start + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_tracks_lines_and_columns() {
        let mut cursor = Cursor::new("ab\nc");

        assert_eq!(cursor.location(), Location::new(1, 1));
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.location(), Location::new(1, 3));
        assert_eq!(cursor.advance(), Some('\n'));
        assert_eq!(cursor.location(), Location::new(2, 1));
        assert_eq!(cursor.advance(), Some('c'));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.offset(), 4);
    }

    #[test]
    fn columns_count_code_points() {
        let mut cursor = Cursor::new("é💩x");
        cursor.accept_n(2);
        assert_eq!(cursor.location(), Location::new(1, 3));
        assert_eq!(cursor.advance(), Some('x'));
    }

    #[test]
    fn step_back_restores_line_bookkeeping() {
        let mut cursor = Cursor::new("a\nb");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.location(), Location::new(2, 1));

        cursor.step_back();
        assert_eq!(cursor.location(), Location::new(1, 2));
        assert_eq!(cursor.advance(), Some('\n'));
    }

    #[test]
    fn peek_does_not_consume() {
        let mut cursor = Cursor::new("xy");
        assert_eq!(cursor.peek(), Some('x'));
        assert_eq!(cursor.advance(), Some('x'));
        assert_eq!(cursor.peek(), Some('y'));
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn step_back_at_end_of_input_is_allowed() {
        let mut cursor = Cursor::new("");
        assert_eq!(cursor.advance(), None);
        cursor.step_back();
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    #[should_panic(expected = "step_back called with no valid previous rune")]
    fn double_step_back_panics() {
        let mut cursor = Cursor::new("ab");
        cursor.advance();
        cursor.step_back();
        cursor.step_back();
    }

    #[test]
    fn rest_starts_with_matches_prefix() {
        let mut cursor = Cursor::new("|||\nx");
        cursor.advance();
        assert!(cursor.rest_starts_with("||\n"));
        assert!(!cursor.rest_starts_with("||\nxy"));
        assert_eq!(cursor.slice(0, 3), "|||");
    }
}
