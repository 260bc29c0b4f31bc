//! # mchoice
//!
//! A validator and answer checker for the mchoice multiple-choice submission
//! format.
//!
//! A submission is a plain-text file of repeated question blocks: a question
//! number followed by one or more single-letter answer codes, separated by
//! arbitrary whitespace, with `//` end-of-line comments allowed anywhere.
//!
//!     // an example submission
//!     1 A
//!     2 B C
//!     3 D
//!
//! Checking runs as a fixed pipeline: the lexer classifies every input
//! character into tokens (flagging anything outside the alphabet), the
//! grammar validator accepts or rejects the token stream against the block
//! grammar, and the answer checker compares the validated blocks against an
//! answer key to produce discordances and feedback hints. See the
//! [mchoice] module for the pipeline entry points.

#![allow(rustdoc::invalid_html_tags)]

pub mod mchoice;
