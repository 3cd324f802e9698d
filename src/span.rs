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

use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// A single `(line, column)` position inside one source file.
///
/// Both numbers are 1-based and columns count Unicode scalar values, not
/// bytes. A line of `0` marks a location that has not been set yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// The distinguished "no position known" value.
    pub const UNSET: Location = Location { line: 0, column: 0 };

    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn is_set(&self) -> bool {
        self.line != 0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open range of source text, tagged with the file it came from.
///
/// Every token, every AST node and every diagnostic carries one of these.
/// The `end` location points one column past the last character covered.
///
/// # Rendering
/// ```text
/// file:1:5          zero-width range
/// file:1:5-9        begin and end on the same line
/// file:(1:5)-(3:2)  range spanning several lines
/// ```
///
/// The file name is shared (`Arc<str>`) so that thousands of tokens from the
/// same file do not each own a copy, and so finished trees can be handed to
/// other threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocationRange {
    pub file_name: Arc<str>,
    pub begin: Location,
    pub end: Location,
}

impl LocationRange {
    pub fn new(file_name: Arc<str>, begin: Location, end: Location) -> Self {
        Self {
            file_name,
            begin,
            end,
        }
    }

    /// A zero-width range at a single location.
    pub fn point(file_name: Arc<str>, location: Location) -> Self {
        Self::new(file_name, location, location)
    }

    /// A range with no position, carrying only the file name.
    pub fn unset(file_name: Arc<str>) -> Self {
        Self::new(file_name, Location::UNSET, Location::UNSET)
    }

    /// The range running from the start of `first` to the end of `last`.
    ///
    /// Used by the parser to build a node's range out of the tokens and
    /// child nodes that delimit it.
    pub fn between(first: &LocationRange, last: &LocationRange) -> Self {
        Self::new(first.file_name.clone(), first.begin, last.end)
    }

    pub fn is_set(&self) -> bool {
        self.begin.is_set()
    }
}

impl fmt::Display for LocationRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_set() {
            return write!(f, "{}", self.file_name);
        }

        if !self.file_name.is_empty() {
            write!(f, "{}:", self.file_name)?;
        }

        if self.begin.line == self.end.line {
            if self.begin.column == self.end.column {
                return write!(f, "{}", self.begin);
            }
            return write!(f, "{}-{}", self.begin, self.end.column);
        }

        write!(f, "({})-({})", self.begin, self.end)
    }
}

/// Ranges serialize as their rendered form (`file:1:5-9`), which is what
/// tooling and snapshot tests compare against.
impl Serialize for LocationRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
