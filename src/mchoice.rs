//! The mchoice validation pipeline.
//!
//!     Raw submission text flows through three stages, each depending only on
//!     the one before it:
//!
//!         1. Lexing. The source is tokenized by a logos lexer into Number,
//!            Letter, Comment, Whitespace, and Invalid tokens, each carrying
//!            its byte span. Lexing never fails; unrecognized characters
//!            become Invalid tokens and set a failure flag. See [lexer].
//!
//!         2. Grammar validation. Comment and Whitespace tokens are filtered
//!            out and the remaining stream is matched against the block
//!            grammar `submission := (Number Letter+)+`, including the
//!            strictly sequential numbering rule. See [parser].
//!
//!         3. Answer checking. The validated blocks are folded against an
//!            answer key, producing the set of discordant options and the
//!            feedback hints to surface. See [checker] and [feedback].
//!
//!     The composed entry points live in [pipeline]; everything in between is
//!     public so hosts can run individual stages.

pub mod checker;
pub mod feedback;
pub mod key;
pub mod lexer;
pub mod location;
pub mod parser;
pub mod pipeline;

pub use checker::{check, CheckOutcome, Discordance};
pub use key::{code_of, position_of, Answer, AnswerKey, Question};
pub use lexer::{scan, Token};
pub use parser::{validate, Numbering, QuestionBlock, Validation};
pub use pipeline::{check_answers, check_answers_with_rng, check_format, AnswerCheck, FormatCheck};
