//! Grammar validator for the mchoice submission format.
//!
//!     The grammar is deliberately tiny:
//!
//!         submission := block+
//!         block      := Number Letter+
//!
//!     The validator consumes the trivia-filtered token stream and accepts
//!     iff the whole stream matches the pattern and the block numbers are
//!     strictly sequential from the configured baseline. There is no error
//!     recovery and no partial acceptance; format checking is binary, with a
//!     syntax error count kept only for reporting.

pub mod api;
pub mod ast;
pub mod combinators;

pub use api::{validate, Validation};
pub use ast::{Numbering, QuestionBlock};
