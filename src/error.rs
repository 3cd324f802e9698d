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

use crate::span::LocationRange;
use serde::Serialize;
use thiserror::Error;

/// Which front-end stage rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// Malformed characters or literals, raised by the lexer.
    Lex,
    /// Grammar violations, raised by the parser.
    Parse,
}

/// A fatal diagnostic raised while lexing or parsing.
///
/// Neither stage recovers: the first problem found aborts the run and the
/// caller receives this value instead of a partial token list or tree.
///
/// The rendered form is `"<location> <message>"`, e.g.
/// `main.jsonnet:1:3-4 Did not expect: (IDENTIFIER, "b")`. Message texts are
/// stable and are compared verbatim by callers and tests.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{location} {message}")]
pub struct StaticError {
    /// Stable error code (`E_LEX`, `E_PARSE`)
    pub code: &'static str,

    pub kind: ErrorKind,

    /// Human-readable error message
    pub message: String,

    /// Source range the error is anchored to
    pub location: LocationRange,

    /// Optional note / help text
    pub help: Option<String>,
}

/// Result alias used throughout the lexer and parser.
pub type StaticResult<T> = Result<T, StaticError>;

impl StaticError {
    /// Generic constructor
    pub fn new(kind: ErrorKind, message: impl Into<String>, location: LocationRange) -> Self {
        let code = match kind {
            ErrorKind::Lex => "E_LEX",
            ErrorKind::Parse => "E_PARSE",
        };

        Self {
            code,
            kind,
            message: message.into(),
            location,
            help: None,
        }
    }

    /// Lex error (bad character, number, string, comment or text block)
    pub fn lex_error(message: impl Into<String>, location: LocationRange) -> Self {
        Self::new(ErrorKind::Lex, message, location)
    }

    /// Parse error (grammar violation)
    pub fn parse_error(message: impl Into<String>, location: LocationRange) -> Self {
        Self::new(ErrorKind::Parse, message, location)
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}
