/// Character classification helpers.
///
/// This module provides the predicates that drive both the scanner and the
/// precedence passes: which characters are operators, which operators belong
/// to which precedence class, and which characters can appear in a numeric
/// literal. Keeping them in one place guarantees the parser and the evaluator
/// agree on every character class.
pub mod chars;
