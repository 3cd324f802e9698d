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

use crate::lexer::token::TokenKind;

/// Resolves an identifier-shaped word to its **reserved keyword** kind.
///
/// This function is used by the lexer once it has scanned a maximal run of
/// identifier characters. The comparison is exact and case-sensitive.
///
/// # Returns
/// - `Some(kind)` if the word is one of the reserved keywords.
/// - `None` if the word should be treated as a normal identifier.
///
/// # Examples
/// ```text
/// local      -> Some(Local)
/// importstr  -> Some(ImportStr)
/// Local      -> None
/// locals     -> None
/// ```
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "assert" => TokenKind::Assert,
        "else" => TokenKind::Else,
        "error" => TokenKind::Error,
        "false" => TokenKind::False,
        "for" => TokenKind::For,
        "function" => TokenKind::Function,
        "if" => TokenKind::If,
        "import" => TokenKind::Import,
        "importstr" => TokenKind::ImportStr,
        "in" => TokenKind::In,
        "local" => TokenKind::Local,
        "null" => TokenKind::Null,
        "self" => TokenKind::SelfRef,
        "super" => TokenKind::Super,
        "tailstrict" => TokenKind::TailStrict,
        "then" => TokenKind::Then,
        "true" => TokenKind::True,
        _ => return None,
    };

    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_round_trips_through_its_spelling() {
        let words = [
            "assert", "else", "error", "false", "for", "function", "if", "import", "importstr",
            "in", "local", "null", "self", "super", "tailstrict", "then", "true",
        ];

        for word in words {
            let kind = keyword_kind(word).unwrap();
            assert!(kind.is_keyword());
            assert_eq!(kind.as_str(), word);
        }
    }

    #[test]
    fn near_misses_are_identifiers() {
        assert_eq!(keyword_kind("Local"), None);
        assert_eq!(keyword_kind("locals"), None);
        assert_eq!(keyword_kind("import_str"), None);
        assert_eq!(keyword_kind(""), None);
    }
}
