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

use crate::error::StaticError;
use crate::span::LocationRange;
use std::fmt::Write;

/// Renders human-friendly, compiler-style diagnostics for lex and parse
/// errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Underlines the error range with carets (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// Output stays readable without color.
pub struct DiagnosticPrinter {
    /// Full source code of the file that was lexed and parsed.
    source: String,

    /// Name of the source file, for display only.
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a printer for one source file.
    ///
    /// # Arguments
    /// - `file_name` → The name shown in the `-->` line
    /// - `source` → The full source text of that file
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Formats an error diagnostic.
    ///
    /// # Output Example
    /// ```text
    /// error[E_PARSE]: Expected token ")" but got (IDENTIFIER, "b")
    ///   --> config.jsonnet:1:5-6
    ///    |
    ///  1 | ((a b))
    ///    |     ^
    /// ```
    ///
    /// A range that ends on the line it starts on is underlined in full;
    /// otherwise only its first character is marked. Errors without a
    /// position print the header alone.
    pub fn render(&self, error: &StaticError) -> String {
        let mut out = String::new();
        let location = &error.location;

        let _ = writeln!(out, "error[{}]: {}", error.code, error.message);

        if !location.is_set() {
            let _ = writeln!(out, "  --> {}", self.file_name);
        } else {
            let begin = location.begin;
            let _ = writeln!(out, "  --> {}:{}", self.file_name, trim_file(location));

            let src_line = self.source.lines().nth(begin.line.saturating_sub(1)).unwrap_or("");

            let width = if location.end.line == begin.line && location.end.column > begin.column {
                location.end.column - begin.column
            } else {
                1
            };

            let padding = caret_padding(src_line, begin.column.saturating_sub(1));
            let carets = "^".repeat(width);

            let _ = writeln!(out, "   |");
            let _ = writeln!(out, "{:>3} | {}", begin.line, src_line);
            let _ = writeln!(out, "   | {}{}", padding, carets);
        }

        if let Some(help) = &error.help {
            let _ = writeln!(out, "\nhelp: {}", help);
        }

        out
    }

    /// Prints the rendered diagnostic to stderr.
    pub fn print(&self, error: &StaticError) {
        eprint!("{}", self.render(error));
    }
}

/// Blank prefix lining the caret up under column `columns + 1` of `line`.
///
/// Columns count code points, so tabs in the prefix are copied as tabs and
/// every other character becomes one space. Columns past the end of the
/// line are padded with spaces.
fn caret_padding(line: &str, columns: usize) -> String {
    let mut padding: String = line
        .chars()
        .take(columns)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();

    let short = columns.saturating_sub(padding.chars().count());
    padding.extend(std::iter::repeat(' ').take(short));
    padding
}

/// The range rendered without its `file:` prefix.
fn trim_file(location: &LocationRange) -> String {
    let rendered = location.to_string();
    if location.file_name.is_empty() {
        return rendered;
    }

    match rendered.get(location.file_name.len() + 1..) {
        Some(rest) => rest.to_string(),
        None => rendered.clone(),
    }
}
