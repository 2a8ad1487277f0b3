use logos::Logos;

use crate::interpreter::operator::Operator;

/// Represents a lexical token in an arithmetic expression.
///
/// Whitespace between tokens is skipped, so `3 + 4` and `3+4` produce the
/// same token stream. Whitespace still separates literals: `1 2` is two
/// numbers, not `12`.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(error = LexError)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.`.
    ///
    /// The maximal run of digits and decimal points is taken as one literal;
    /// a run such as `1.2.3` is rejected by the number parser rather than
    /// split.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Reasons the lexer can refuse a piece of input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    /// The input contains a character no token starts with.
    #[default]
    UnexpectedCharacter,
    /// A run of digits and decimal points is not a valid number.
    MalformedNumber,
}

impl Token {
    /// Maps operator tokens to their [`Operator`]; parentheses and numbers
    /// yield `None`.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::Plus => Some(Operator::Add),
            Self::Minus => Some(Operator::Sub),
            Self::Star => Some(Operator::Mul),
            Self::Slash => Some(Operator::Div),
            Self::Caret => Some(Operator::Pow),
            Self::Number(_) | Self::LParen | Self::RParen => None,
        }
    }
}

fn parse_number(lex: &mut logos::Lexer<Token>) -> Result<f64, LexError> {
    lex.slice().parse().map_err(|_| LexError::MalformedNumber)
}
