//! Answer checker: compares validated question blocks against an answer key.
//!
//! The check is a pure fold over the key. Each key question at index `i` is
//! paired with the block at position `i`; a missing block contributes no
//! submitted codes, and blocks beyond the key length are ignored. For every
//! option position the submitted/not-submitted status is compared with the
//! option's correctness flag, and every mismatch becomes a [Discordance].
//! Nothing here panics on shape mismatches; the checker always returns a
//! complete result.

use serde::Serialize;

use super::key::{position_of, AnswerKey};
use super::parser::QuestionBlock;

/// A mismatch between an option's submitted status and its correctness flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Discordance {
    /// Zero-based index of the question in the key
    pub question: usize,
    /// Zero-based position of the option within the question
    pub option: usize,
}

/// Outcome of checking one submission against one key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// True iff no option anywhere is discordant
    pub passed: bool,
    /// All discordances, in key order
    pub discordances: Vec<Discordance>,
}

/// Check validated blocks against the key.
///
/// Letter codes with no matching option position (beyond the question's
/// option count, or beyond 'Z') match nothing and contribute no discordance
/// of their own; missing correct options still show up as discordant.
pub fn check(blocks: &[QuestionBlock], key: &AnswerKey) -> CheckOutcome {
    let mut discordances = Vec::new();

    for (question_index, question) in key.questions.iter().enumerate() {
        let ticked: Vec<usize> = blocks
            .get(question_index)
            .map(|block| {
                block
                    .letters
                    .iter()
                    .filter_map(|&code| position_of(code))
                    .collect()
            })
            .unwrap_or_default();

        for (position, answer) in question.answers.iter().enumerate() {
            if ticked.contains(&position) != answer.is_correct {
                discordances.push(Discordance {
                    question: question_index,
                    option: position,
                });
            }
        }
    }

    CheckOutcome {
        passed: discordances.is_empty(),
        discordances,
    }
}
