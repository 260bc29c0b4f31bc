//! Token definitions for the mchoice submission format.
//!
//! The tokens are defined using the logos derive macro. The format has no
//! nesting and no punctuation; the whole alphabet is digits, letters,
//! comments, and whitespace. Anything else lexes as [Token::Invalid] via the
//! lowest-priority catch-all pattern, one character at a time.

use logos::Logos;
use serde::Serialize;

/// All possible tokens in an mchoice submission
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Token {
    /// A maximal run of ASCII digits, kept as source text
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),

    /// A single letter; runs of letters lex as one token per character
    #[regex(r"[A-Za-z]", |lex| lex.slice().chars().next())]
    Letter(char),

    /// `//` to the end of the line, exclusive of the line break
    #[regex(r"//[^\n]*")]
    Comment,

    /// A contiguous run of spaces, tabs, and line breaks
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// Any character outside the alphabet, exactly one per token
    #[regex(r".", priority = 0)]
    Invalid,
}

impl Token {
    /// Check if this token is filtered out before grammar validation
    pub fn is_trivia(&self) -> bool {
        matches!(self, Token::Comment | Token::Whitespace)
    }

    /// Check if this token marks a lexical error
    pub fn is_invalid(&self) -> bool {
        matches!(self, Token::Invalid)
    }
}
