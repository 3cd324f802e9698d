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

use serde::Serialize;
use std::fmt;

/// Precedence of field access, indexing and function application.
pub const APPLY_PRECEDENCE: u8 = 2;

/// Precedence of the prefix operators `! ~ + -`.
pub const UNARY_PRECEDENCE: u8 = 4;

/// Precedence of the keyword-led forms and of any full expression.
pub const MAX_PRECEDENCE: u8 = 16;

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    Not,
    BitwiseNot,
    Plus,
    Minus,
}

impl UnaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "!" => Some(UnaryOp::Not),
            "~" => Some(UnaryOp::BitwiseNot),
            "+" => Some(UnaryOp::Plus),
            "-" => Some(UnaryOp::Minus),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::BitwiseNot => "~",
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infix operators, all left-associative.
///
/// # Precedence
/// ```text
/// 5   *  /  %
/// 6   +  -
/// 7   << >>
/// 8   <  <= >  >=
/// 9   == !=
/// 10  &
/// 11  ^
/// 12  |
/// 13  &&
/// 14  ||
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
    Mult,
    Div,
    Percent,
    Plus,
    Minus,
    ShiftL,
    ShiftR,
    Greater,
    GreaterEq,
    Less,
    LessEq,
    ManifestEqual,
    ManifestUnequal,
    BitwiseAnd,
    BitwiseXor,
    BitwiseOr,
    And,
    Or,
}

impl BinaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "*" => BinaryOp::Mult,
            "/" => BinaryOp::Div,
            "%" => BinaryOp::Percent,
            "+" => BinaryOp::Plus,
            "-" => BinaryOp::Minus,
            "<<" => BinaryOp::ShiftL,
            ">>" => BinaryOp::ShiftR,
            ">" => BinaryOp::Greater,
            ">=" => BinaryOp::GreaterEq,
            "<" => BinaryOp::Less,
            "<=" => BinaryOp::LessEq,
            "==" => BinaryOp::ManifestEqual,
            "!=" => BinaryOp::ManifestUnequal,
            "&" => BinaryOp::BitwiseAnd,
            "^" => BinaryOp::BitwiseXor,
            "|" => BinaryOp::BitwiseOr,
            "&&" => BinaryOp::And,
            "||" => BinaryOp::Or,
            _ => return None,
        };
        Some(op)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Mult => "*",
            BinaryOp::Div => "/",
            BinaryOp::Percent => "%",
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::ShiftL => "<<",
            BinaryOp::ShiftR => ">>",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEq => ">=",
            BinaryOp::Less => "<",
            BinaryOp::LessEq => "<=",
            BinaryOp::ManifestEqual => "==",
            BinaryOp::ManifestUnequal => "!=",
            BinaryOp::BitwiseAnd => "&",
            BinaryOp::BitwiseXor => "^",
            BinaryOp::BitwiseOr => "|",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }

    /// The level at which this operator is parsed. Smaller binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOp::Mult | BinaryOp::Div | BinaryOp::Percent => 5,
            BinaryOp::Plus | BinaryOp::Minus => 6,
            BinaryOp::ShiftL | BinaryOp::ShiftR => 7,
            BinaryOp::Greater | BinaryOp::GreaterEq | BinaryOp::Less | BinaryOp::LessEq => 8,
            BinaryOp::ManifestEqual | BinaryOp::ManifestUnequal => 9,
            BinaryOp::BitwiseAnd => 10,
            BinaryOp::BitwiseXor => 11,
            BinaryOp::BitwiseOr => 12,
            BinaryOp::And => 13,
            BinaryOp::Or => 14,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("*" => Some(5))]
    #[test_case("+" => Some(6))]
    #[test_case(">>" => Some(7))]
    #[test_case("<=" => Some(8))]
    #[test_case("!=" => Some(9))]
    #[test_case("&" => Some(10))]
    #[test_case("^" => Some(11))]
    #[test_case("|" => Some(12))]
    #[test_case("&&" => Some(13))]
    #[test_case("||" => Some(14))]
    #[test_case(":" => None)]
    #[test_case("~" => None)]
    fn binary_precedence(symbol: &str) -> Option<u8> {
        BinaryOp::from_symbol(symbol).map(|op| op.precedence())
    }

    #[test]
    fn symbols_round_trip() {
        for symbol in ["*", "/", "%", "<<", ">=", "==", "||"] {
            assert_eq!(BinaryOp::from_symbol(symbol).unwrap().as_str(), symbol);
        }
        for symbol in ["!", "~", "+", "-"] {
            assert_eq!(UnaryOp::from_symbol(symbol).unwrap().to_string(), symbol);
        }
    }

    #[test]
    fn all_binary_levels_sit_between_unary_and_max() {
        let op = BinaryOp::from_symbol("||").unwrap();
        assert!(op.precedence() < MAX_PRECEDENCE);
        assert!(BinaryOp::Mult.precedence() > UNARY_PRECEDENCE);
    }
}
