//! Parser combinator functions for the block grammar.

use chumsky::prelude::*;

use super::ast::QuestionBlock;
use crate::mchoice::lexer::{Token, TokenSpan};

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenSpan>;

/// Match a Number token and read it as a question number.
///
/// A digit run too large for u64 cannot be a question number; it is reported
/// as a syntax error, not a panic.
fn question_number() -> impl Parser<TokenSpan, u64, Error = ParserError> + Clone {
    filter_map(|span, ts: TokenSpan| match ts {
        (Token::Number(digits), _) => digits
            .parse::<u64>()
            .map_err(|_| Simple::custom(span, "question number out of range")),
        ts => Err(Simple::expected_input_found(span, Vec::new(), Some(ts))),
    })
}

/// Match a Letter token as an uppercase answer code
fn answer_letter() -> impl Parser<TokenSpan, char, Error = ParserError> + Clone {
    filter_map(|span, ts: TokenSpan| match ts {
        (Token::Letter(letter), _) => Ok(letter.to_ascii_uppercase()),
        ts => Err(Simple::expected_input_found(span, Vec::new(), Some(ts))),
    })
}

/// `block := Number Letter+`
fn question_block() -> impl Parser<TokenSpan, QuestionBlock, Error = ParserError> + Clone {
    question_number()
        .then(answer_letter().repeated().at_least(1))
        .map(|(number, letters)| QuestionBlock::new(number, letters))
}

/// `submission := block+`, consuming the entire token stream
pub(crate) fn submission() -> impl Parser<TokenSpan, Vec<QuestionBlock>, Error = ParserError> {
    question_block().repeated().at_least(1).then_ignore(end())
}
