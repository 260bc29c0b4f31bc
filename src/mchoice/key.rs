//! The answer key: the authoritative ordered list of questions and their
//! options.
//!
//! An option's position inside its question defines its answer code:
//! position 0 is 'A', position 1 is 'B', and so on. The mapping lives in
//! [code_of] and [position_of]; out-of-range positions and non-letter codes
//! map to `None` and simply match nothing.

use serde::{Deserialize, Serialize};

/// Number of letter codes available; option positions beyond 'Z' have no code
const CODE_ALPHABET_LEN: usize = 26;

/// An ordered list of questions, constructed once by the caller and borrowed
/// by every check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerKey {
    pub questions: Vec<Question>,
}

impl AnswerKey {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Ordered textual rendering of the key, for instructional display.
    ///
    /// A pure function of the key: identical keys render byte-identically.
    pub fn render(&self) -> String {
        let mut rendered = String::new();
        for (index, question) in self.questions.iter().enumerate() {
            rendered.push_str(&format!("{}. {}\n", index + 1, question.prompt));
            for (position, answer) in question.answers.iter().enumerate() {
                let code = code_of(position).unwrap_or('?');
                rendered.push_str(&format!("   {}. {}\n", code, answer.label));
            }
        }
        rendered
    }
}

/// A prompt with its ordered answer options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answers: Vec<Answer>) -> Self {
        Self {
            prompt: prompt.into(),
            answers,
        }
    }
}

/// One answer option: its label, whether it should be ticked, and the hint
/// surfaced when it is discordant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub label: String,
    pub is_correct: bool,
    #[serde(default)]
    pub hint: Option<String>,
}

impl Answer {
    pub fn new(label: impl Into<String>, is_correct: bool, hint: Option<&str>) -> Self {
        Self {
            label: label.into(),
            is_correct,
            hint: hint.map(str::to_string),
        }
    }
}

/// The answer code for an option position: 0 -> 'A', 1 -> 'B', and so on.
///
/// Positions beyond 'Z' have no code and can never be submitted.
pub fn code_of(position: usize) -> Option<char> {
    if position < CODE_ALPHABET_LEN {
        Some((b'A' + position as u8) as char)
    } else {
        None
    }
}

/// The option position for a submitted code, case-insensitive.
///
/// Non-letter codes have no position and match no option.
pub fn position_of(code: char) -> Option<usize> {
    if code.is_ascii_alphabetic() {
        Some((code.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}
