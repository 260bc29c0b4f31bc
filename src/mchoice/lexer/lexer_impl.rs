//! Implementation of the mchoice lexer.
//!
//! Convenience functions over the logos-generated lexer. The catch-all
//! Invalid pattern in [Token](super::tokens::Token) means the generated lexer
//! matches every character of every input, so the `Err` arm of the logos
//! iterator is unreachable in practice; it is still mapped to
//! [Token::Invalid] rather than unwrapped.

use std::ops::Range;

use logos::Logos;

use super::tokens::Token;

/// Type alias for token with span
pub type TokenSpan = (Token, Range<usize>);

/// Complete scan of a submission: every token with its span, plus the
/// lexical verdict
#[derive(Debug, Clone)]
pub struct LexerOutput {
    /// Full token sequence, trivia and Invalid tokens included
    pub tokens: Vec<TokenSpan>,
    /// True iff any Invalid token was produced
    pub lexing_failed: bool,
}

impl LexerOutput {
    /// Spans of the offending characters, for diagnostics
    pub fn invalid_spans(&self) -> Vec<Range<usize>> {
        self.tokens
            .iter()
            .filter(|(token, _)| token.is_invalid())
            .map(|(_, span)| span.clone())
            .collect()
    }
}

/// Convenience function to tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Convenience function to tokenize a string and collect tokens with their spans
pub fn tokenize_with_spans(source: &str) -> Vec<TokenSpan> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let token = result.unwrap_or(Token::Invalid);
        tokens.push((token, lexer.span()));
    }

    tokens
}

/// Scan a submission: tokenize fully and record whether lexing failed.
///
/// Never returns an error; malformed characters are present in the output as
/// Invalid tokens and reflected in the failure flag.
pub fn scan(source: &str) -> LexerOutput {
    let tokens = tokenize_with_spans(source);
    let lexing_failed = tokens.iter().any(|(token, _)| token.is_invalid());

    LexerOutput {
        tokens,
        lexing_failed,
    }
}

/// Drop Comment and Whitespace tokens ahead of grammar validation.
///
/// Invalid tokens are kept: a lexically broken submission must not become
/// grammatically acceptable by filtering.
pub fn filter_trivia(tokens: Vec<TokenSpan>) -> Vec<TokenSpan> {
    tokens
        .into_iter()
        .filter(|(token, _)| !token.is_trivia())
        .collect()
}
