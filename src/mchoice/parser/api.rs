//! Public API for the grammar validator.

use super::ast::{Numbering, QuestionBlock};
use super::combinators::submission;
use crate::mchoice::lexer::TokenSpan;

/// Outcome of grammar validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// True iff the filtered stream is exactly `(Number Letter+)+` with
    /// sequential numbering
    pub accepted: bool,
    /// Number of grammar deviations seen; zero iff accepted
    pub syntax_error_count: usize,
    /// The parsed blocks, empty when the structure did not parse
    pub blocks: Vec<QuestionBlock>,
}

/// Validate a trivia-filtered token stream against the block grammar.
///
/// Structural deviations (leading letters, a number without letters,
/// trailing tokens, Invalid tokens in the stream) and numbering deviations
/// each count as syntax errors. The numbering rule is strict: block numbers
/// must increase by exactly 1 from `numbering.first`.
pub fn validate(tokens: Vec<TokenSpan>, numbering: Numbering) -> Validation {
    use chumsky::Parser;

    let (blocks, errors) = submission().parse_recovery(tokens);
    let mut syntax_error_count = errors.len();
    let blocks = blocks.unwrap_or_default();

    for (position, block) in blocks.iter().enumerate() {
        let expected = numbering.first.checked_add(position as u64);
        if expected != Some(block.number) {
            syntax_error_count += 1;
        }
    }

    Validation {
        accepted: syntax_error_count == 0 && !blocks.is_empty(),
        syntax_error_count,
        blocks,
    }
}
