//! The composed checking pipeline: lex, validate, then check.
//!
//! These entry points are what a host framework calls. Both checks accept
//! arbitrary, possibly hostile, text and always return a structured verdict;
//! no input makes them panic or error out.

use log::debug;
use rand::Rng;
use serde::Serialize;

use super::checker::{check, Discordance};
use super::feedback::{hint_lines, render_feedback, select_hints, FORMAT_REJECTED_MESSAGE};
use super::key::AnswerKey;
use super::lexer::{filter_trivia, scan};
use super::parser::{validate, Numbering, QuestionBlock};

/// Verdict of the format check: lexical plus grammatical validation only,
/// independent of answer content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatCheck {
    /// True iff lexing succeeded and the grammar accepted the stream
    pub accepted: bool,
    /// True iff any character outside the alphabet was seen
    pub lexing_failed: bool,
    /// Grammar deviations counted by the validator
    pub syntax_error_count: usize,
    /// Parsed blocks, for the answer check and diagnostics
    pub blocks: Vec<QuestionBlock>,
}

impl FormatCheck {
    /// The fixed instructional message for a rejected submission
    pub fn message(&self) -> Option<&'static str> {
        if self.accepted {
            None
        } else {
            Some(FORMAT_REJECTED_MESSAGE)
        }
    }
}

/// Verdict of the answer check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerCheck {
    /// True iff the submission parsed and no option is discordant
    pub passed: bool,
    /// All discordances, in key order; empty when the format was rejected
    pub discordances: Vec<Discordance>,
    /// Rendered feedback fragment, only present on failure
    pub feedback: Option<String>,
}

/// Run the format check with the default numbering baseline
pub fn check_format(source: &str) -> FormatCheck {
    check_format_with(source, Numbering::default())
}

/// Run the format check with an explicit numbering baseline
pub fn check_format_with(source: &str, numbering: Numbering) -> FormatCheck {
    let output = scan(source);
    debug!(
        "lexed {} tokens from {} bytes, lexing_failed={}",
        output.tokens.len(),
        source.len(),
        output.lexing_failed
    );

    let lexing_failed = output.lexing_failed;
    let validation = validate(filter_trivia(output.tokens), numbering);
    debug!(
        "grammar: accepted={} syntax_errors={} blocks={}",
        validation.accepted,
        validation.syntax_error_count,
        validation.blocks.len()
    );

    FormatCheck {
        accepted: validation.accepted && !lexing_failed,
        lexing_failed,
        syntax_error_count: validation.syntax_error_count,
        blocks: validation.blocks,
    }
}

/// Run the full answer check, drawing hint order from the process-wide
/// generator
pub fn check_answers(source: &str, key: &AnswerKey) -> AnswerCheck {
    check_answers_with_rng(source, key, &mut rand::thread_rng())
}

/// Run the full answer check with an injected generator, for reproducible
/// hint selection
pub fn check_answers_with_rng<R: Rng>(source: &str, key: &AnswerKey, rng: &mut R) -> AnswerCheck {
    let format = check_format(source);
    if !format.accepted {
        return AnswerCheck {
            passed: false,
            discordances: Vec::new(),
            feedback: Some(FORMAT_REJECTED_MESSAGE.to_string()),
        };
    }

    let outcome = check(&format.blocks, key);
    debug!(
        "checked {} blocks against {} questions: passed={} discordances={}",
        format.blocks.len(),
        key.questions.len(),
        outcome.passed,
        outcome.discordances.len()
    );

    let feedback = if outcome.passed {
        None
    } else {
        let selected = select_hints(hint_lines(&outcome.discordances, key), rng);
        Some(render_feedback(&selected))
    };

    AnswerCheck {
        passed: outcome.passed,
        discordances: outcome.discordances,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mchoice::key::{Answer, Question};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_format_check_accepts_the_reference_submission() {
        let verdict = check_format("1 A 2 B C 3 D");
        assert!(verdict.accepted);
        assert_eq!(verdict.message(), None);
    }

    #[test]
    fn test_format_check_rejects_with_fixed_message() {
        let verdict = check_format("AAAA1 A 2 B C 3 D");
        assert!(!verdict.accepted);
        assert_eq!(verdict.message(), Some(FORMAT_REJECTED_MESSAGE));
    }

    #[test]
    fn test_lexing_failure_rejects_even_when_structure_would_parse() {
        // the alien character sits in a comment-free spot; without the flag
        // the remaining stream could never be mistaken for a submission, so
        // also pin the flag itself
        let verdict = check_format("//blabla\n1\n$\n//blabla\nA\nB");
        assert!(verdict.lexing_failed);
        assert!(!verdict.accepted);
    }

    #[test]
    fn test_answer_check_passes_without_feedback() {
        let key = AnswerKey::new(vec![
            Question::new("Q1", vec![Answer::new("Ja", false, None), Answer::new("Nee", true, None)]),
            Question::new("Q2", vec![Answer::new("Ja", false, None), Answer::new("Nee", true, None)]),
            Question::new("Q3", vec![Answer::new("Ja", true, None), Answer::new("Nee", false, None)]),
        ]);

        let verdict = check_answers("1 B 2 B 3 A", &key);
        assert!(verdict.passed);
        assert!(verdict.discordances.is_empty());
        assert_eq!(verdict.feedback, None);
    }

    #[test]
    fn test_answer_check_renders_capped_feedback() {
        let key = AnswerKey::new(vec![Question::new(
            "Rozen zijn (meestal)",
            vec![
                Answer::new("Rood", true, Some("hint rood")),
                Answer::new("Bloemen", true, Some("hint bloemen")),
                Answer::new("Groen", false, Some("hint groen")),
            ],
        )]);

        let mut rng = StdRng::seed_from_u64(3);
        let verdict = check_answers_with_rng("1 C", &key, &mut rng);
        assert!(!verdict.passed);
        assert_eq!(verdict.discordances.len(), 3);

        let feedback = verdict.feedback.expect("failed check must carry feedback");
        let hint_count = feedback.matches("Vraag 1: ").count();
        assert_eq!(hint_count, 3);
    }

    #[test]
    fn test_answer_check_on_invalid_format_fails_closed() {
        let key = AnswerKey::new(vec![Question::new(
            "Q",
            vec![Answer::new("Ja", true, None)],
        )]);

        let verdict = check_answers("$$$", &key);
        assert!(!verdict.passed);
        assert!(verdict.discordances.is_empty());
        assert_eq!(verdict.feedback.as_deref(), Some(FORMAT_REJECTED_MESSAGE));
    }

    #[test]
    fn test_checks_are_idempotent() {
        let key = AnswerKey::new(vec![Question::new(
            "Q",
            vec![Answer::new("Ja", true, Some("hint"))],
        )]);

        let first = check_format("1 A 2 B");
        let second = check_format("1 A 2 B");
        assert_eq!(first, second);

        let left = check_answers("1 B", &key);
        let right = check_answers("1 B", &key);
        assert_eq!(left.passed, right.passed);
        assert_eq!(left.discordances, right.discordances);
    }
}
