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
use std::fmt;

/// Represents the **category of a lexical token**.
///
/// Keywords get a kind of their own so the parser can dispatch on them
/// directly; everything else that is made of symbol characters arrives as a
/// single `Operator` kind and the parser decides which spellings mean
/// something.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → AST
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Punctuation
    BraceL,
    BraceR,
    BracketL,
    BracketR,
    Comma,
    Dollar,
    Dot,
    ParenL,
    ParenR,
    Semicolon,

    // Arbitrary length lexemes
    Identifier,
    Number,
    Operator,
    StringDouble,
    StringSingle,
    StringBlock,

    // Keywords
    Assert,
    Else,
    Error,
    False,
    For,
    Function,
    If,
    Import,
    ImportStr,
    In,
    Local,
    Null,
    SelfRef,
    Super,
    TailStrict,
    Then,
    True,

    /// Always the **final token**; carries any trailing fodder.
    EndOfFile,
}

impl TokenKind {
    /// The spelling used when a kind is named inside a diagnostic.
    ///
    /// Punctuation is quoted (`"{"`), open-ended lexemes use an upper-case
    /// class name (`IDENTIFIER`) and keywords are spelled as written.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::BraceL => "\"{\"",
            TokenKind::BraceR => "\"}\"",
            TokenKind::BracketL => "\"[\"",
            TokenKind::BracketR => "\"]\"",
            TokenKind::Comma => "\",\"",
            TokenKind::Dollar => "\"$\"",
            TokenKind::Dot => "\".\"",
            TokenKind::ParenL => "\"(\"",
            TokenKind::ParenR => "\")\"",
            TokenKind::Semicolon => "\";\"",

            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::StringDouble => "STRING_DOUBLE",
            TokenKind::StringSingle => "STRING_SINGLE",
            TokenKind::StringBlock => "STRING_BLOCK",

            TokenKind::Assert => "assert",
            TokenKind::Else => "else",
            TokenKind::Error => "error",
            TokenKind::False => "false",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::If => "if",
            TokenKind::Import => "import",
            TokenKind::ImportStr => "importstr",
            TokenKind::In => "in",
            TokenKind::Local => "local",
            TokenKind::Null => "null",
            TokenKind::SelfRef => "self",
            TokenKind::Super => "super",
            TokenKind::TailStrict => "tailstrict",
            TokenKind::Then => "then",
            TokenKind::True => "true",

            TokenKind::EndOfFile => "end of file",
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Assert
                | TokenKind::Else
                | TokenKind::Error
                | TokenKind::False
                | TokenKind::For
                | TokenKind::Function
                | TokenKind::If
                | TokenKind::Import
                | TokenKind::ImportStr
                | TokenKind::In
                | TokenKind::Local
                | TokenKind::Null
                | TokenKind::SelfRef
                | TokenKind::Super
                | TokenKind::TailStrict
                | TokenKind::Then
                | TokenKind::True
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The flavour of a piece of fodder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FodderKind {
    /// Spaces, tabs, carriage returns and newlines.
    Whitespace,
    /// `// ...` up to (not including) the newline.
    CommentCpp,
    /// `# ...` up to (not including) the newline.
    CommentHash,
    /// `/* ... */`
    CommentC,
}

/// Text the grammar ignores but a formatter must keep.
///
/// `data` holds the exact source text, comment delimiters included, so
/// concatenating fodder and token spellings reproduces the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FodderElement {
    pub kind: FodderKind,
    pub data: String,
}

impl FodderElement {
    pub fn new(kind: FodderKind, data: impl Into<String>) -> Self {
        Self {
            kind,
            data: data.into(),
        }
    }
}

/// Extra information recorded for `|||` text blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    /// The whitespace prefix stripped from every content line.
    pub indent: String,

    /// Whitespace in front of the closing `|||`.
    pub term_indent: String,

    /// The block exactly as written, from the opening to the closing `|||`.
    pub verbatim: String,
}

/// Represents a **single lexical token**.
///
/// A `Token` is a fully classified unit of source code consisting of:
/// - A token category (`TokenKind`)
/// - The fodder (whitespace, comments) that preceded it
/// - Its text payload
/// - The range of source it was read from
///
/// # Example Tokens
/// ```text
/// local  →  { kind: Local,      data: "local" }
/// x      →  { kind: Identifier, data: "x"     }
/// 'hi'   →  { kind: StringSingle, data: "hi"  }   (quotes stripped)
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// Whitespace and comments seen since the previous token.
    pub fodder: Vec<FodderElement>,

    /// The token's text.
    ///
    /// For quoted strings this is the raw text between the quotes, escapes
    /// left uninterpreted. For text blocks it is the de-indented content.
    pub data: String,

    /// Present only when `kind == StringBlock`.
    pub text_block: Option<TextBlock>,

    /// Where the token was read from.
    pub location: LocationRange,
}

impl Token {
    pub fn new(kind: TokenKind, data: impl Into<String>, location: LocationRange) -> Self {
        Self {
            kind,
            fodder: Vec::new(),
            data: data.into(),
            text_block: None,
            location,
        }
    }

    /// The exact source spelling of this token, without its fodder.
    pub fn source_text(&self) -> String {
        match self.kind {
            TokenKind::StringDouble => format!("\"{}\"", self.data),
            TokenKind::StringSingle => format!("'{}'", self.data),
            TokenKind::StringBlock => match &self.text_block {
                Some(block) => block.verbatim.clone(),
                None => self.data.clone(),
            },
            _ => self.data.clone(),
        }
    }
}

impl fmt::Display for Token {
    /// Formats a token for **diagnostics**.
    ///
    /// ```text
    /// end of file             token with no text
    /// "::"                    operators
    /// (IDENTIFIER, "foo")     everything else
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            write!(f, "{}", self.kind)
        } else if self.kind == TokenKind::Operator {
            write!(f, "\"{}\"", self.data)
        } else {
            write!(f, "({}, \"{}\")", self.kind, self.data)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Location;
    use std::sync::Arc;

    fn token(kind: TokenKind, data: &str) -> Token {
        Token::new(
            kind,
            data,
            LocationRange::point(Arc::from("test"), Location::new(1, 1)),
        )
    }

    #[test]
    fn renders_tokens_for_diagnostics() {
        assert_eq!(token(TokenKind::EndOfFile, "").to_string(), "end of file");
        assert_eq!(token(TokenKind::Operator, ":").to_string(), "\":\"");
        assert_eq!(token(TokenKind::Identifier, "b").to_string(), "(IDENTIFIER, \"b\")");
        assert_eq!(token(TokenKind::Comma, ",").to_string(), "(\",\", \",\")");
        assert_eq!(token(TokenKind::For, "for").to_string(), "(for, \"for\")");
    }

    #[test]
    fn quoted_strings_restore_their_quotes() {
        assert_eq!(token(TokenKind::StringDouble, "hi").source_text(), "\"hi\"");
        assert_eq!(token(TokenKind::StringSingle, "hi").source_text(), "'hi'");
    }

    #[test]
    fn keyword_kinds_are_flagged() {
        assert!(TokenKind::TailStrict.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::EndOfFile.is_keyword());
    }
}
