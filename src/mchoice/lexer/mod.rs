//! Lexer for the mchoice submission format.
//!
//!     Tokenization is handled entirely by logos; this module only wraps the
//!     generated lexer with span collection and the lexing-failed flag.
//!
//!     The submission alphabet is small: digit runs, single letters, `//`
//!     comments, and whitespace. Every other character is captured as an
//!     Invalid token of exactly one character, so the lexer always produces a
//!     complete token sequence for diagnostics and never returns an error,
//!     no matter how hostile the input.
//!
//!     Comment and Whitespace tokens are trivia: they are kept in the raw
//!     scan output (their spans keep position accounting honest) and dropped
//!     by [filter_trivia] before grammar validation.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{filter_trivia, scan, tokenize, tokenize_with_spans, LexerOutput, TokenSpan};
pub use tokens::Token;
