//! # termcalc
//!
//! termcalc is a small arithmetic expression calculator written in Rust.
//! It parses an expression over numbers, parentheses, and the operators
//! `+ - * / % ^` into a tree of nested terms, then collapses that tree in
//! place, one precedence class at a time, into a single `f64`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::term::Term;

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning an
/// expression or collapsing its term tree. Each error carries enough context
/// (character position, the offending literal) to produce a useful message.
///
/// # Responsibilities
/// - Defines error enums for both phases (parser, evaluator).
/// - Implements `Display` and `std::error::Error` for standard reporting.
pub mod error;
/// Orchestrates parsing and evaluation of expressions.
///
/// This module ties together the two phases: the parser, which builds a term
/// tree from expression text, and the evaluator, which collapses that tree
/// into a value. The phases are deliberately coupled: the parser embeds each
/// operand's combining operator (and any unary signs) in the operand's own
/// text, and the evaluator's rules assume exactly that shape.
///
/// # Responsibilities
/// - Coordinates the parser and evaluator phases.
/// - Manages the flow of data and errors between them.
pub mod interpreter;
/// Defines the term tree that expressions are parsed into.
///
/// This module declares the [`Term`] type, the single recursive entity of
/// the crate: a leaf holding a signed numeric literal, or a group holding an
/// ordered sequence of subterms. The parser builds the tree and the
/// evaluator destroys it.
///
/// # Responsibilities
/// - Defines the `Term` type and its construction entry point.
/// - Extracts the combining operator of a term.
/// - Renders a term back to expression text.
pub mod term;
/// General utilities shared by the parser and evaluator.
///
/// This module provides the character classification predicates both phases
/// rely on: operator detection, precedence class membership, and numeric
/// literal characters.
///
/// # Responsibilities
/// - Classifies characters consistently across parsing and evaluation.
pub mod util;

/// Evaluates an expression string and returns the result.
///
/// This function strips all whitespace from the input, parses the remainder
/// into a term tree, and collapses the tree into a single value. It is the
/// one-call surface for callers that do not need the tree itself.
///
/// # Errors
/// Returns an error if the expression has mismatched parentheses, contains
/// an operand that is not a number, or takes a modulo by zero.
///
/// # Examples
/// ```
/// use termcalc::evaluate;
///
/// assert_eq!(evaluate("2 * (3 + 1) / (6 - 2) - 1").unwrap(), 1.0);
/// assert_eq!(evaluate("2(3)").unwrap(), 6.0);
///
/// // Unbalanced parentheses are rejected at parse time.
/// assert!(evaluate("(1 + 2").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let stripped: String = expression.chars().filter(|ch| !ch.is_whitespace()).collect();

    let mut term = Term::new(&stripped)?;
    let result = term.calculate()?;

    Ok(result)
}
