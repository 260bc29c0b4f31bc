//! Structures produced by grammar validation.

use serde::Serialize;

/// One unit of submitted answer data: a question number followed by the
/// letter codes ticked for that question, normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionBlock {
    pub number: u64,
    pub letters: Vec<char>,
}

impl QuestionBlock {
    pub fn new(number: u64, letters: Vec<char>) -> Self {
        Self { number, letters }
    }
}

/// Numbering rule for a submission's blocks: strictly sequential with step
/// 1, starting at `first`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numbering {
    pub first: u64,
}

impl Numbering {
    pub fn starting_at(first: u64) -> Self {
        Self { first }
    }
}

impl Default for Numbering {
    fn default() -> Self {
        Self { first: 1 }
    }
}
