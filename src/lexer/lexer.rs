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

use crate::error::{StaticError, StaticResult};
use crate::lexer::cursor::Cursor;
use crate::lexer::keywords::keyword_kind;
use crate::lexer::token::{FodderElement, FodderKind, TextBlock, Token, TokenKind};
use crate::span::{Location, LocationRange};
use std::sync::Arc;
use tracing::debug;

/// Converts one source file into a stream of tokens.
///
/// The lexer keeps everything: whitespace and comments are collected as
/// *fodder* and attached to the token that follows them, and the final
/// `EndOfFile` token carries whatever fodder trails the last real token.
pub struct Lexer {
    pub(super) file_name: Arc<str>,
    pub(super) cursor: Cursor,
    tokens: Vec<Token>,
    fodder: Vec<FodderElement>,

    /// Rune offset where the token being scanned begins.
    token_start: usize,
    pub(super) token_start_loc: Location,
}

/// Lexes `source` in full.
///
/// `file_name` is used only to label locations in tokens and diagnostics.
///
/// # Errors
/// A lex error for the first malformed number, string, comment or text
/// block, or for a character that cannot start any token.
pub fn lex(file_name: &str, source: &str) -> StaticResult<Vec<Token>> {
    let tokens = Lexer::new(file_name, source).lex()?;
    debug!(file = file_name, tokens = tokens.len(), "lexed source");
    Ok(tokens)
}

/// Rebuilds source text from a token stream.
///
/// Each token contributes its fodder followed by its own spelling, so for
/// any input that lexes, `reconstruct(&lex(f, s)?) == s`.
pub fn reconstruct(tokens: &[Token]) -> String {
    let mut out = String::new();

    for token in tokens {
        for element in &token.fodder {
            out.push_str(&element.data);
        }
        out.push_str(&token.source_text());
    }

    out
}

impl Lexer {
    /// Creates a lexer positioned at line 1, column 1 of `source`.
    pub fn new(file_name: &str, source: &str) -> Self {
        Self {
            file_name: Arc::from(file_name),
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            fodder: Vec::new(),
            token_start: 0,
            token_start_loc: Location::new(1, 1),
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// Characters are classified in a fixed priority order: whitespace,
    /// punctuation, `!`/`!=`, the single-rune operators `~ + -`, digits,
    /// quotes, identifier starts and finally runs of symbol characters.
    ///
    /// # Output
    /// The token list, always terminated by exactly one `EndOfFile` token.
    pub fn lex(mut self) -> StaticResult<Vec<Token>> {
        while let Some(rune) = self.cursor.advance() {
            match rune {
                ' ' | '\t' | '\r' | '\n' => self.add_whitespace_fodder(),

                '{' => self.emit_token(TokenKind::BraceL),
                '}' => self.emit_token(TokenKind::BraceR),
                '[' => self.emit_token(TokenKind::BracketL),
                ']' => self.emit_token(TokenKind::BracketR),
                ',' => self.emit_token(TokenKind::Comma),
                '$' => self.emit_token(TokenKind::Dollar),
                '.' => self.emit_token(TokenKind::Dot),
                '(' => self.emit_token(TokenKind::ParenL),
                ')' => self.emit_token(TokenKind::ParenR),
                ';' => self.emit_token(TokenKind::Semicolon),

                '!' => {
                    if self.cursor.peek() == Some('=') {
                        self.cursor.advance();
                    }
                    self.emit_token(TokenKind::Operator);
                }

                // `+:`, `+::` and `+:::` are field assignment operators.
                '+' if self.cursor.peek() == Some(':') => self.lex_symbol(rune)?,

                '~' | '+' | '-' => self.emit_token(TokenKind::Operator),

                '0'..='9' => {
                    self.cursor.step_back();
                    self.lex_number()?;
                }

                '"' => self.lex_quoted_string('"', TokenKind::StringDouble)?,
                '\'' => self.lex_quoted_string('\'', TokenKind::StringSingle)?,

                _ if is_identifier_first(rune) => self.lex_identifier(),

                _ if is_symbol(rune) => self.lex_symbol(rune)?,

                _ => {
                    return Err(StaticError::lex_error(
                        format!("Could not lex the character {}", rune),
                        self.point(self.cursor.prev_location()),
                    ));
                }
            }
        }

        // Trailing fodder rides on the end-of-file marker.
        self.emit_token(TokenKind::EndOfFile);
        Ok(self.tokens)
    }

    /// Scans the rest of an identifier whose first rune is already consumed,
    /// then classifies it as a keyword or a plain identifier.
    fn lex_identifier(&mut self) {
        loop {
            match self.cursor.advance() {
                Some(rune) if is_identifier(rune) => {}
                _ => {
                    self.cursor.step_back();
                    break;
                }
            }
        }

        let text = self.cursor.slice(self.token_start, self.cursor.offset());
        let kind = keyword_kind(&text).unwrap_or(TokenKind::Identifier);
        self.emit_token(kind);
    }

    /// Scans a quoted string whose opening quote is already consumed.
    ///
    /// A backslash protects the rune after it (including the quote and a
    /// newline). Escapes are not interpreted: the token holds the raw text
    /// between the quotes.
    fn lex_quoted_string(&mut self, quote: char, kind: TokenKind) -> StaticResult<()> {
        let string_start_loc = self.token_start_loc;
        let content_start = self.cursor.offset();

        loop {
            match self.cursor.advance() {
                None => {
                    return Err(StaticError::lex_error(
                        "Unterminated String",
                        self.point(string_start_loc),
                    ));
                }
                Some(rune) if rune == quote => break,
                Some('\\') => {
                    if self.cursor.peek().is_some() {
                        self.cursor.advance();
                    }
                }
                Some(_) => {}
            }
        }

        let content = self.cursor.slice(content_start, self.cursor.offset() - 1);
        self.emit_full_token(kind, content, None);
        Ok(())
    }

    /// Lexes a token that starts with a symbol character: a comment, a text
    /// block or an operator. `first` has already been consumed.
    fn lex_symbol(&mut self, first: char) -> StaticResult<()> {
        if first == '/' && self.cursor.peek() == Some('/') {
            self.cursor.advance();
            self.skip_to_end_of_line();
            self.add_comment_fodder(FodderKind::CommentCpp);
            return Ok(());
        }

        if first == '#' {
            self.skip_to_end_of_line();
            self.add_comment_fodder(FodderKind::CommentHash);
            return Ok(());
        }

        if first == '/' && self.cursor.peek() == Some('*') {
            return self.lex_block_comment();
        }

        if first == '|' && self.cursor.rest_starts_with("||\n") {
            return self.lex_text_block();
        }

        self.lex_operator(first);
        Ok(())
    }

    /// Consumes a comment body up to, but not including, the newline. The
    /// newline is left to be lexed as whitespace fodder.
    fn skip_to_end_of_line(&mut self) {
        loop {
            match self.cursor.advance() {
                None | Some('\n') => {
                    self.cursor.step_back();
                    return;
                }
                Some(_) => {}
            }
        }
    }

    /// Skips a `/* ... */` comment whose `/` is already consumed.
    fn lex_block_comment(&mut self) -> StaticResult<()> {
        let comment_start_loc = self.token_start_loc;
        self.cursor.advance(); // '*'

        loop {
            match self.cursor.advance() {
                None => {
                    return Err(StaticError::lex_error(
                        "Multi-line comment has no terminating */",
                        self.point(comment_start_loc),
                    ));
                }
                Some('*') if self.cursor.peek() == Some('/') => {
                    self.cursor.advance();
                    self.add_comment_fodder(FodderKind::CommentC);
                    return Ok(());
                }
                Some(_) => {}
            }
        }
    }

    /// Emits the longest run of symbol characters starting at `first` as one
    /// operator token.
    ///
    /// The run stops in front of anything that would open a comment or a
    /// text block, and a run longer than one rune gives back any trailing
    /// `+ - ~ ! $` so that `x<-1` reads as `x < -1`.
    fn lex_operator(&mut self, first: char) {
        let rest = self.cursor.rest();

        let mut run = vec![first];
        for (i, &rune) in rest.iter().enumerate() {
            if !is_symbol(rune) || opens_comment_or_block(rune, &rest[i + 1..]) {
                break;
            }
            run.push(rune);
        }

        while run.len() > 1 && matches!(run.last(), Some('+' | '-' | '~' | '!' | '$')) {
            run.pop();
        }

        self.cursor.accept_n(run.len() - 1);
        self.emit_token(TokenKind::Operator);
    }

    /// Wraps a single location of this file into a zero-width range.
    pub(super) fn point(&self, location: Location) -> LocationRange {
        LocationRange::point(self.file_name.clone(), location)
    }

    /// Moves the start of the next token to the cursor. Accumulated fodder
    /// is kept.
    pub(super) fn reset_token_start(&mut self) {
        self.token_start = self.cursor.offset();
        self.token_start_loc = self.cursor.location();
    }

    /// Source text from the current token start up to the cursor.
    pub(super) fn token_text(&self) -> String {
        self.cursor.slice(self.token_start, self.cursor.offset())
    }

    /// Pushes a token covering `token_start..cursor`, hands it the pending
    /// fodder and starts a new token.
    pub(super) fn emit_full_token(
        &mut self,
        kind: TokenKind,
        data: String,
        text_block: Option<TextBlock>,
    ) {
        let location = LocationRange::new(
            self.file_name.clone(),
            self.token_start_loc,
            self.cursor.location(),
        );

        self.tokens.push(Token {
            kind,
            fodder: std::mem::take(&mut self.fodder),
            data,
            text_block,
            location,
        });

        self.reset_token_start();
    }

    fn emit_token(&mut self, kind: TokenKind) {
        let data = self.token_text();
        self.emit_full_token(kind, data, None);
    }

    /// Records skipped whitespace, merging with a directly preceding
    /// whitespace element.
    fn add_whitespace_fodder(&mut self) {
        let data = self.token_text();

        match self.fodder.last_mut() {
            Some(last) if last.kind == FodderKind::Whitespace => last.data.push_str(&data),
            _ => self.fodder.push(FodderElement::new(FodderKind::Whitespace, data)),
        }

        self.reset_token_start();
    }

    fn add_comment_fodder(&mut self, kind: FodderKind) {
        let data = self.token_text();
        self.fodder.push(FodderElement::new(kind, data));
        self.reset_token_start();
    }
}

pub(super) fn is_identifier_first(rune: char) -> bool {
    rune.is_ascii_alphabetic() || rune == '_'
}

pub(super) fn is_identifier(rune: char) -> bool {
    is_identifier_first(rune) || rune.is_ascii_digit()
}

pub(super) fn is_symbol(rune: char) -> bool {
    matches!(
        rune,
        '!' | '$' | ':' | '~' | '+' | '-' | '&' | '|' | '^' | '=' | '<' | '>' | '*' | '/' | '%' | '#'
    )
}

/// Whether `rune`, followed by `after`, starts `//`, `/*`, `#` or `|||`.
fn opens_comment_or_block(rune: char, after: &[char]) -> bool {
    match rune {
        '/' => matches!(after.first(), Some('/' | '*')),
        '#' => true,
        '|' => after.starts_with(&['|', '|']),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_data(source: &str) -> Vec<(TokenKind, String)> {
        lex("test", source)
            .unwrap()
            .into_iter()
            .map(|t| (t.kind, t.data))
            .collect()
    }

    #[test]
    fn fodder_attaches_to_the_next_token() {
        let tokens = lex("test", "  a // note\n  b").unwrap();

        assert_eq!(tokens[0].fodder, vec![FodderElement::new(FodderKind::Whitespace, "  ")]);
        assert_eq!(
            tokens[1].fodder,
            vec![
                FodderElement::new(FodderKind::Whitespace, " "),
                FodderElement::new(FodderKind::CommentCpp, "// note"),
                FodderElement::new(FodderKind::Whitespace, "\n  "),
            ]
        );
        assert!(tokens[2].fodder.is_empty());
    }

    #[test]
    fn trailing_fodder_lands_on_end_of_file() {
        let tokens = lex("test", "x /* done */\n").unwrap();
        let eof = tokens.last().unwrap();

        assert_eq!(eof.kind, TokenKind::EndOfFile);
        assert_eq!(eof.data, "");
        assert_eq!(
            eof.fodder,
            vec![
                FodderElement::new(FodderKind::Whitespace, " "),
                FodderElement::new(FodderKind::CommentC, "/* done */"),
                FodderElement::new(FodderKind::Whitespace, "\n"),
            ]
        );
    }

    #[test]
    fn token_locations_cover_their_text() {
        let tokens = lex("test", "a\n  bc").unwrap();
        assert_eq!(tokens[0].location.to_string(), "test:1:1-2");
        assert_eq!(tokens[1].location.to_string(), "test:2:3-5");
        assert_eq!(tokens[2].location.to_string(), "test:2:5");
    }

    #[test]
    fn string_location_includes_quotes() {
        let tokens = lex("test", "'hi'").unwrap();
        assert_eq!(tokens[0].data, "hi");
        assert_eq!(tokens[0].location.to_string(), "test:1:1-5");
    }

    #[test]
    fn operators_do_not_swallow_comments() {
        assert_eq!(
            kinds_and_data("a+//c\nb"),
            vec![
                (TokenKind::Identifier, "a".to_string()),
                (TokenKind::Operator, "+".to_string()),
                (TokenKind::Identifier, "b".to_string()),
                (TokenKind::EndOfFile, "".to_string()),
            ]
        );
        assert_eq!(kinds_and_data("<#x")[0], (TokenKind::Operator, "<".to_string()));
        assert_eq!(kinds_and_data("</*x*/")[0], (TokenKind::Operator, "<".to_string()));
    }

    #[test]
    fn operators_give_back_trailing_unary_runes() {
        assert_eq!(
            kinds_and_data("x<-1"),
            vec![
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::Operator, "<".to_string()),
                (TokenKind::Operator, "-".to_string()),
                (TokenKind::Number, "1".to_string()),
                (TokenKind::EndOfFile, "".to_string()),
            ]
        );
        assert_eq!(kinds_and_data("==!x")[0], (TokenKind::Operator, "==".to_string()));
    }

    #[test]
    fn plus_colon_forms_one_operator() {
        assert_eq!(kinds_and_data("+:")[0], (TokenKind::Operator, "+:".to_string()));
        assert_eq!(kinds_and_data("+:::")[0], (TokenKind::Operator, "+:::".to_string()));
        assert_eq!(kinds_and_data("+-")[0], (TokenKind::Operator, "+".to_string()));
    }

    #[test]
    fn unknown_character_is_reported_at_its_position() {
        let err = lex("test", "a ` b").unwrap_err();
        assert_eq!(err.to_string(), "test:1:3 Could not lex the character `");
    }

    #[test]
    fn reconstruct_restores_quotes_and_fodder() {
        let source = "{ a: \"x\\\"y\", # why\n  b: 'z' }\n";
        let tokens = lex("test", source).unwrap();
        assert_eq!(reconstruct(&tokens), source);
    }
}
